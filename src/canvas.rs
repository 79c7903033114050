use crate::dom;
use crate::error::MountError;
use crate::fx::{DrawSurface, Rgb};
use glam::Vec2;
use std::f64::consts::TAU;
use web_sys as web;

/// [`DrawSurface`] backed by a 2D canvas context. Draw calls take CSS px;
/// the context transform carries the device pixel ratio.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    last_fill: Option<Rgb>,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> Result<Self, MountError> {
        if !dom::supports_path2d() {
            return Err(MountError::NoPath2d);
        }
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self {
            canvas,
            ctx,
            last_fill: None,
        })
    }

    /// Reallocate the backing store for `css_size` and reset the transform.
    pub fn resize(&mut self, css_size: Vec2) {
        let dpr = dom::sync_canvas_backing_size(&self.canvas, css_size);
        // Setting width/height resets context state, including the fill.
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.last_fill = None;
    }
}

impl DrawSurface for CanvasSurface {
    fn clear(&mut self, size: Vec2) {
        self.ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        if self.last_fill != Some(color) {
            self.ctx.set_fill_style_str(&color.to_string());
            self.last_fill = Some(color);
        }
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU);
        self.ctx.fill();
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }
}
