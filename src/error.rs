use thiserror::Error;

/// Why an effect could not be mounted. The effects are cosmetic, so callers
/// log these and carry on.
#[derive(Debug, Error)]
pub enum MountError {
    #[error("missing element {0}")]
    MissingElement(String),
    #[error("element #{0} is not a canvas")]
    NotCanvas(String),
    #[error("2D canvas context unavailable")]
    NoContext2d,
    #[error("Path2D unsupported; effect disabled")]
    NoPath2d,
    #[error("could not listen for '{0}'")]
    Listener(&'static str),
    #[error("DOM call failed: {0}")]
    Dom(&'static str),
    #[error("requestAnimationFrame failed")]
    AnimationFrame,
}

impl From<MountError> for wasm_bindgen::JsValue {
    fn from(e: MountError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
