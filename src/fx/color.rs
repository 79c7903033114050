// Hex color parsing and channel interpolation for the canvas effects.

use std::fmt;

/// 8-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Color used when a configured value does not parse.
    pub const NEUTRAL: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Strict parse of `#RGB`, `#RRGGBB` (leading `#` optional).
    pub fn parse(text: &str) -> Option<Rgb> {
        let hex = text.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            3 => {
                let mut it = hex.chars().filter_map(|c| c.to_digit(16));
                let r = it.next()? as u8;
                let g = it.next()? as u8;
                let b = it.next()? as u8;
                Some(Rgb::new(r * 17, g * 17, b * 17))
            }
            6 => {
                let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
                let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
                let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
                Some(Rgb::new(r, g, b))
            }
            _ => None,
        }
    }

    /// Parse or fall back to [`Rgb::NEUTRAL`].
    pub fn parse_or_neutral(text: &str) -> Rgb {
        match Rgb::parse(text) {
            Some(c) => c,
            None => {
                log::debug!("[color] '{}' is not a hex color, using neutral", text);
                Rgb::NEUTRAL
            }
        }
    }

    /// Per-channel linear blend, rounded to the nearest integer.
    /// `t` is clamped to [0, 1] so the endpoints are exact.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }

    pub fn to_css_rgba(self, alpha: f32) -> String {
        format!(
            "rgba({},{},{},{:.3})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}
