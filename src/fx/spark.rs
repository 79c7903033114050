// Click sparks: each click throws a ring of short line segments that fly
// outward, shrink, and expire.

use super::config::SparkConfig;
use super::constants::{RESIZE_DEBOUNCE_MS, SPARK_LINE_WIDTH};
use super::surface::{has_area, DrawSurface};
use super::throttle::Debounce;
use glam::Vec2;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub origin: Vec2,
    /// Radians.
    pub angle: f32,
    pub start_ms: f64,
}

impl Spark {
    /// Segment endpoints for an eased progress in [0, 1].
    pub fn segment(&self, eased: f32, config: &SparkConfig) -> (Vec2, Vec2) {
        let dir = Vec2::from_angle(self.angle);
        let distance = eased * config.radius * config.extra_scale;
        let length = config.size * (1.0 - eased);
        let near = self.origin + dir * distance;
        let far = self.origin + dir * (distance + length);
        (near, far)
    }
}

/// Angles for one burst, evenly spaced over the full circle.
pub fn burst_angles(count: usize) -> impl Iterator<Item = f32> {
    (0..count).map(move |i| TAU * i as f32 / count as f32)
}

pub struct SparkBurst {
    config: SparkConfig,
    sparks: Vec<Spark>,
    size: Vec2,
    resize: Debounce,
    pending_size: Option<Vec2>,
}

impl SparkBurst {
    pub fn new(config: SparkConfig) -> Self {
        Self {
            config,
            sparks: Vec::new(),
            size: Vec2::ZERO,
            resize: Debounce::new(RESIZE_DEBOUNCE_MS),
            pending_size: None,
        }
    }

    pub fn config(&self) -> &SparkConfig {
        &self.config
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
        self.pending_size = None;
    }

    /// Note a viewport size change; see [`SparkBurst::take_resize`].
    pub fn request_resize(&mut self, size: Vec2, now_ms: f64) {
        self.pending_size = Some(size);
        self.resize.trigger(now_ms);
    }

    /// The size to reallocate the surface to, once resizing has gone quiet.
    pub fn take_resize(&mut self, now_ms: f64) -> Option<Vec2> {
        if !self.resize.poll(now_ms) {
            return None;
        }
        let size = self.pending_size.take()?;
        self.size = size;
        Some(size)
    }

    pub fn click(&mut self, origin: Vec2, now_ms: f64) {
        self.sparks.extend(burst_angles(self.config.count).map(|angle| Spark {
            origin,
            angle,
            start_ms: now_ms,
        }));
    }

    /// Drop sparks whose age has reached the duration.
    pub fn expire(&mut self, now_ms: f64) {
        let duration = self.config.duration_ms;
        self.sparks.retain(|s| now_ms - s.start_ms < duration);
    }

    /// One animation frame: expire, clear, redraw the live sparks.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl DrawSurface) {
        self.expire(now_ms);
        if !has_area(self.size) {
            return;
        }
        surface.clear(self.size);
        let duration = self.config.duration_ms;
        for spark in &self.sparks {
            let progress = ((now_ms - spark.start_ms) / duration) as f32;
            let eased = self.config.easing.apply(progress);
            let (near, far) = spark.segment(eased, &self.config);
            surface.stroke_line(near, far, SPARK_LINE_WIDTH, self.config.color);
        }
    }
}
