pub mod color;
pub mod config;
pub mod constants;
pub mod content;
pub mod easing;
pub mod emphasis;
pub mod grid;
pub mod pointer;
pub mod spark;
pub mod surface;
pub mod throttle;

pub use color::Rgb;
pub use config::*;
pub use content::Portfolio;
pub use emphasis::TextEmphasis;
pub use grid::GridField;
pub use spark::SparkBurst;
pub use surface::DrawSurface;
