// Proximity text emphasis: designated text elements swell and glow as the
// pointer approaches.

use super::color::Rgb;
use super::config::EmphasisConfig;
use super::constants::EMPHASIS_POINTER_THROTTLE_MS;
use super::easing::quad_out;
use super::throttle::Throttle;
use glam::Vec2;

// Retargets closer than this to the running tween's goal are ignored.
const RETARGET_EPSILON: f32 = 1e-3;
// Levels this close to the goal are reported as the goal itself.
const SNAP_EPSILON: f32 = 1e-4;

/// Level tween for one element. A new target replaces the running tween,
/// starting from wherever it currently is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmphasisTrack {
    from: f32,
    to: f32,
    start_ms: f64,
    duration_ms: f64,
    written: Option<f32>,
}

impl Default for EmphasisTrack {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            start_ms: 0.0,
            duration_ms: 0.0,
            written: None,
        }
    }
}

impl EmphasisTrack {
    pub fn level(&self, now_ms: f64) -> f32 {
        let elapsed = now_ms - self.start_ms;
        if self.duration_ms <= 0.0 || elapsed >= self.duration_ms {
            return self.to;
        }
        let p = (elapsed / self.duration_ms) as f32;
        let level = self.from + (self.to - self.from) * quad_out(p);
        if (level - self.to).abs() < SNAP_EPSILON {
            self.to
        } else {
            level
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn retarget(&mut self, to: f32, duration_secs: f32, now_ms: f64) {
        if (to - self.to).abs() < RETARGET_EPSILON {
            return;
        }
        self.from = self.level(now_ms);
        self.to = to;
        self.start_ms = now_ms;
        self.duration_ms = duration_secs.max(0.0) as f64 * 1000.0;
    }
}

/// Resolved look for one element at some level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmphasisStyle {
    pub level: f32,
    pub scale: f32,
    pub shadow_blur: f32,
    pub color: Rgb,
}

impl EmphasisStyle {
    pub fn at(level: f32, config: &EmphasisConfig) -> Self {
        let level = level.clamp(0.0, 1.0);
        Self {
            level,
            scale: 1.0 + level * config.scale_boost,
            shadow_blur: level * config.shadow_blur,
            color: config.text.lerp(config.accent, level),
        }
    }

    /// Neutral means the host should drop its inline overrides.
    pub fn is_neutral(&self) -> bool {
        self.level <= 0.0
    }
}

/// Emphasis target for an element whose center is `dist` from the pointer.
#[inline]
pub fn emphasis_level(dist: f32, radius: f32) -> f32 {
    if radius <= 0.0 || dist >= radius {
        0.0
    } else {
        (1.0 - dist / radius).clamp(0.0, 1.0)
    }
}

pub struct TextEmphasis {
    config: EmphasisConfig,
    throttle: Throttle,
    tracks: Vec<EmphasisTrack>,
}

impl TextEmphasis {
    pub fn new(config: EmphasisConfig, element_count: usize) -> Self {
        Self {
            config,
            throttle: Throttle::new(EMPHASIS_POINTER_THROTTLE_MS),
            tracks: vec![EmphasisTrack::default(); element_count],
        }
    }

    pub fn config(&self) -> &EmphasisConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn track(&self, index: usize) -> Option<&EmphasisTrack> {
        self.tracks.get(index)
    }

    /// Start over with `element_count` fresh tracks, for when the host's
    /// element set changed.
    pub fn track_elements(&mut self, element_count: usize) {
        self.tracks = vec![EmphasisTrack::default(); element_count];
    }

    /// Throttle gate; the host reads element bounds only when this passes.
    pub fn accept_pointer(&mut self, now_ms: f64) -> bool {
        self.throttle.ready(now_ms)
    }

    /// Retarget every element from the pointer and element centers
    /// (`centers[i]` belongs to element `i`; `None` skips it).
    pub fn retarget(&mut self, pointer: Vec2, centers: &[Option<Vec2>], now_ms: f64) {
        let EmphasisConfig {
            radius,
            in_secs,
            out_secs,
            ..
        } = self.config;
        for (track, center) in self.tracks.iter_mut().zip(centers) {
            let Some(center) = center else { continue };
            let level = emphasis_level(center.distance(pointer), radius);
            let secs = if level > 0.0 { in_secs } else { out_secs };
            track.retarget(level, secs, now_ms);
        }
    }

    /// Styles that changed since the last call, as `(element index, style)`.
    pub fn frame(&mut self, now_ms: f64) -> Vec<(usize, EmphasisStyle)> {
        let mut changed = Vec::new();
        for (i, track) in self.tracks.iter_mut().enumerate() {
            let level = track.level(now_ms);
            let stale = match track.written {
                Some(prev) => prev != level,
                None => level > 0.0,
            };
            if stale {
                track.written = Some(level);
                changed.push((i, EmphasisStyle::at(level, &self.config)));
            }
        }
        changed
    }
}
