// Shared scaffolding for the host-side tests.
// The main crate is wasm-only, so the pure effect modules are included directly.

#![allow(dead_code)]

pub mod fx {
    pub mod color {
        include!("../../src/fx/color.rs");
    }
    pub mod config {
        include!("../../src/fx/config.rs");
    }
    pub mod constants {
        include!("../../src/fx/constants.rs");
    }
    pub mod content {
        include!("../../src/fx/content.rs");
    }
    pub mod easing {
        include!("../../src/fx/easing.rs");
    }
    pub mod emphasis {
        include!("../../src/fx/emphasis.rs");
    }
    pub mod grid {
        include!("../../src/fx/grid.rs");
    }
    pub mod pointer {
        include!("../../src/fx/pointer.rs");
    }
    pub mod spark {
        include!("../../src/fx/spark.rs");
    }
    pub mod surface {
        include!("../../src/fx/surface.rs");
    }
    pub mod throttle {
        include!("../../src/fx/throttle.rs");
    }
}

use fx::color::Rgb;
use fx::surface::DrawSurface;
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear(Vec2),
    Circle { center: Vec2, radius: f32, color: Rgb },
    Line { from: Vec2, to: Vec2, width: f32, color: Rgb },
}

/// Records every draw call of a frame.
#[derive(Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn circles(&self) -> Vec<(Vec2, f32, Rgb)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Circle {
                    center,
                    radius,
                    color,
                } => Some((*center, *radius, *color)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(Vec2, Vec2)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for RecordingSurface {
    fn clear(&mut self, size: Vec2) {
        self.calls.clear();
        self.calls.push(DrawCall::Clear(size));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgb) {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgb) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            width,
            color,
        });
    }
}
