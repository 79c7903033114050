// Easing curves and the inertia integrator used by the effect animations.

use glam::Vec2;
use std::f32::consts::TAU;

/// Named easing for spark travel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseInOut,
    #[default]
    EaseOut,
}

impl Easing {
    /// Unknown names map to the default ease-out.
    pub fn from_name(name: &str) -> Easing {
        match name.trim() {
            "linear" => Easing::Linear,
            "ease-in" => Easing::EaseIn,
            "ease-in-out" => Easing::EaseInOut,
            _ => Easing::EaseOut,
        }
    }

    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            Easing::EaseOut => t * (2.0 - t),
        }
    }
}

/// Elastic ease-out: overshoots and rings down to 1.
///
/// `amplitude` below 1 is treated as 1; `period` is the ring period in
/// normalized time.
#[inline]
pub fn elastic_out(t: f32, amplitude: f32, period: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }
    let a = amplitude.max(1.0);
    let shift = period / TAU * (1.0 / a).asin();
    a * 2f32.powf(-10.0 * t) * ((t - shift) * TAU / period).sin() + 1.0
}

/// Quadratic ease-out used by the emphasis tweens.
#[inline]
pub fn quad_out(t: f32) -> f32 {
    Easing::EaseOut.apply(t)
}

/// Velocity-decay integrator: a push that slows at a constant deceleration
/// until it stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inertia {
    pub velocity: Vec2,
    /// Seconds until the motion stops.
    pub duration: f32,
}

impl Inertia {
    pub fn new(velocity: Vec2, resistance: f32, max_secs: f32) -> Self {
        let speed = velocity.length();
        let duration = if resistance > 0.0 && speed.is_finite() {
            (speed / resistance).min(max_secs)
        } else {
            max_secs
        };
        Self { velocity, duration }
    }

    /// Distance travelled after `elapsed` seconds.
    #[inline]
    pub fn travel(&self, elapsed: f32) -> Vec2 {
        if self.duration <= 0.0 {
            return Vec2::ZERO;
        }
        let t = elapsed.clamp(0.0, self.duration);
        self.velocity * (t - t * t / (2.0 * self.duration))
    }

    /// Total travel once the motion has stopped.
    #[inline]
    pub fn rest(&self) -> Vec2 {
        self.velocity * (self.duration * 0.5)
    }

    #[inline]
    pub fn is_settled(&self, elapsed: f32) -> bool {
        elapsed >= self.duration
    }
}

