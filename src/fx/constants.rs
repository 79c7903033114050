// Effect tuning constants.
//
// These are the defaults every effect instance starts from; per-instance
// overrides come from the mounted element's `data-*` attributes.

// Dot grid layout
pub const DOT_SIZE: f32 = 16.0;
pub const DOT_GAP: f32 = 32.0;
pub const DOT_BASE_COLOR: &str = "#5227FF";
pub const DOT_ACTIVE_COLOR: &str = "#5227FF";

// Dot grid interaction
pub const DOT_PROXIMITY: f32 = 150.0; // px, recolor + velocity trigger radius
pub const DOT_SPEED_TRIGGER: f32 = 100.0; // px/s needed to push dots
pub const DOT_SHOCK_RADIUS: f32 = 250.0;
pub const DOT_SHOCK_STRENGTH: f32 = 5.0;
pub const POINTER_SPEED_MAX: f32 = 5000.0; // px/s
pub const DOT_RESISTANCE: f32 = 750.0; // px/s^2 deceleration of the impulse
pub const DOT_RETURN_SECS: f32 = 1.5;
pub const POINTER_VELOCITY_PUSH: f32 = 0.005; // velocity share added to the push vector

// Inertia limits
pub const INERTIA_MAX_SECS: f32 = 3.0;

// Elastic return curve (amplitude, period)
pub const ELASTIC_AMPLITUDE: f32 = 1.0;
pub const ELASTIC_PERIOD: f32 = 0.75;

// Throttle / debounce intervals (ms)
pub const GRID_POINTER_THROTTLE_MS: f64 = 50.0;
pub const EMPHASIS_POINTER_THROTTLE_MS: f64 = 30.0;
pub const RESIZE_DEBOUNCE_MS: f64 = 100.0;

// Assumed frame interval when there is no previous pointer sample
pub const NOMINAL_FRAME_MS: f64 = 16.0;

// Click sparks
pub const SPARK_COLOR: &str = "#fff";
pub const SPARK_SIZE: f32 = 10.0;
pub const SPARK_RADIUS: f32 = 15.0;
pub const SPARK_COUNT: usize = 8;
pub const SPARK_DURATION_MS: f64 = 400.0;
pub const SPARK_EASING: &str = "ease-out";
pub const SPARK_EXTRA_SCALE: f32 = 1.0;
pub const SPARK_LINE_WIDTH: f32 = 2.0;

// Text emphasis
pub const EMPHASIS_RADIUS: f32 = 120.0;
pub const EMPHASIS_SCALE_BOOST: f32 = 0.15;
pub const EMPHASIS_SHADOW_BLUR: f32 = 12.0; // px at full emphasis
pub const EMPHASIS_TEXT_COLOR: &str = "#ffffff";
pub const EMPHASIS_ACCENT_COLOR: &str = "#5227FF";
pub const EMPHASIS_IN_SECS: f32 = 0.1;
pub const EMPHASIS_OUT_SECS: f32 = 0.3;
