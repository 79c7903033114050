// Pointer tracking for the dot grid: position plus a clamped velocity
// estimate from consecutive samples.

use super::constants::NOMINAL_FRAME_MS;
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    /// Surface-local position in CSS px.
    pub position: Vec2,
    /// px/s
    pub velocity: Vec2,
    pub speed: f32,
    pub last_ms: Option<f64>,
}

impl PointerState {
    /// Fold in a new sample. Velocity is clamped to `max_speed` by rescaling
    /// both components, so its direction is kept.
    pub fn sample(&mut self, position: Vec2, now_ms: f64, max_speed: f32) {
        let velocity = match self.last_ms {
            Some(last) => {
                let dt_ms = if now_ms > last {
                    now_ms - last
                } else {
                    NOMINAL_FRAME_MS
                };
                clamp_speed((position - self.position) / dt_ms as f32 * 1000.0, max_speed)
            }
            // Nothing to difference against yet.
            None => Vec2::ZERO,
        };
        self.position = position;
        self.velocity = velocity;
        self.speed = velocity.length().min(max_speed);
        self.last_ms = Some(now_ms);
    }
}

/// Clamp a velocity to `max_speed`, keeping direction.
#[inline]
pub fn clamp_speed(velocity: Vec2, max_speed: f32) -> Vec2 {
    let speed = velocity.length();
    if speed > max_speed && speed > 0.0 {
        velocity * (max_speed / speed)
    } else {
        velocity
    }
}
