// Drawing seam between the effect engines and the host canvas.

use super::color::Rgb;
use glam::Vec2;

/// The few 2D primitives the effects need. Coordinates are CSS px; the host
/// implementation is responsible for device-pixel-ratio scaling.
pub trait DrawSurface {
    fn clear(&mut self, size: Vec2);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb);
}

/// True when a container can hold anything at all.
#[inline]
pub fn has_area(size: Vec2) -> bool {
    size.x > 0.0 && size.y > 0.0 && size.is_finite()
}
