// Per-instance effect configuration.
//
// Every field has a default from `constants`; hosts override individual
// fields through a key lookup (the web layer feeds `data-*` attributes).
// Values that fail to parse keep their default.

use super::color::Rgb;
use super::constants::*;
use super::easing::Easing;
use std::str::FromStr;

#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    pub dot_size: f32,
    pub gap: f32,
    pub base_color: Rgb,
    pub active_color: Rgb,
    pub proximity: f32,
    pub speed_trigger: f32,
    pub shock_radius: f32,
    pub shock_strength: f32,
    pub max_speed: f32,
    pub resistance: f32,
    pub return_secs: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dot_size: DOT_SIZE,
            gap: DOT_GAP,
            base_color: Rgb::parse_or_neutral(DOT_BASE_COLOR),
            active_color: Rgb::parse_or_neutral(DOT_ACTIVE_COLOR),
            proximity: DOT_PROXIMITY,
            speed_trigger: DOT_SPEED_TRIGGER,
            shock_radius: DOT_SHOCK_RADIUS,
            shock_strength: DOT_SHOCK_STRENGTH,
            max_speed: POINTER_SPEED_MAX,
            resistance: DOT_RESISTANCE,
            return_secs: DOT_RETURN_SECS,
        }
    }
}

impl GridConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut c = Self::default();
        override_num(&lookup, "dot-size", &mut c.dot_size);
        override_num(&lookup, "gap", &mut c.gap);
        override_color(&lookup, "base-color", &mut c.base_color);
        override_color(&lookup, "active-color", &mut c.active_color);
        override_num(&lookup, "proximity", &mut c.proximity);
        override_num(&lookup, "speed-trigger", &mut c.speed_trigger);
        override_num(&lookup, "shock-radius", &mut c.shock_radius);
        override_num(&lookup, "shock-strength", &mut c.shock_strength);
        override_num(&lookup, "max-speed", &mut c.max_speed);
        override_num(&lookup, "resistance", &mut c.resistance);
        override_num(&lookup, "return-duration", &mut c.return_secs);
        c
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SparkConfig {
    pub color: Rgb,
    pub size: f32,
    pub radius: f32,
    pub count: usize,
    pub duration_ms: f64,
    pub easing: Easing,
    pub extra_scale: f32,
}

impl Default for SparkConfig {
    fn default() -> Self {
        Self {
            color: Rgb::parse_or_neutral(SPARK_COLOR),
            size: SPARK_SIZE,
            radius: SPARK_RADIUS,
            count: SPARK_COUNT,
            duration_ms: SPARK_DURATION_MS,
            easing: Easing::from_name(SPARK_EASING),
            extra_scale: SPARK_EXTRA_SCALE,
        }
    }
}

impl SparkConfig {
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut c = Self::default();
        override_color(&lookup, "spark-color", &mut c.color);
        override_num(&lookup, "spark-size", &mut c.size);
        override_num(&lookup, "spark-radius", &mut c.radius);
        override_num(&lookup, "spark-count", &mut c.count);
        override_num(&lookup, "duration", &mut c.duration_ms);
        if let Some(name) = lookup("easing") {
            c.easing = Easing::from_name(&name);
        }
        override_num(&lookup, "extra-scale", &mut c.extra_scale);
        c
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmphasisConfig {
    pub radius: f32,
    pub scale_boost: f32,
    pub shadow_blur: f32,
    pub text: Rgb,
    pub accent: Rgb,
    pub in_secs: f32,
    pub out_secs: f32,
}

impl Default for EmphasisConfig {
    fn default() -> Self {
        Self {
            radius: EMPHASIS_RADIUS,
            scale_boost: EMPHASIS_SCALE_BOOST,
            shadow_blur: EMPHASIS_SHADOW_BLUR,
            text: Rgb::parse_or_neutral(EMPHASIS_TEXT_COLOR),
            accent: Rgb::parse_or_neutral(EMPHASIS_ACCENT_COLOR),
            in_secs: EMPHASIS_IN_SECS,
            out_secs: EMPHASIS_OUT_SECS,
        }
    }
}

impl EmphasisConfig {
    // The trigger radius stays fixed; only the look is configurable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut c = Self::default();
        override_num(&lookup, "scale-boost", &mut c.scale_boost);
        override_num(&lookup, "shadow-blur", &mut c.shadow_blur);
        override_color(&lookup, "text-color", &mut c.text);
        override_color(&lookup, "accent-color", &mut c.accent);
        c
    }
}

fn override_num<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut T) {
    if let Some(raw) = lookup(key) {
        match raw.trim().parse::<T>() {
            Ok(v) => *slot = v,
            Err(_) => log::warn!("[config] ignoring {}='{}'", key, raw),
        }
    }
}

fn override_color(lookup: &impl Fn(&str) -> Option<String>, key: &str, slot: &mut Rgb) {
    if let Some(raw) = lookup(key) {
        *slot = Rgb::parse_or_neutral(&raw);
    }
}
