use crate::error::MountError;
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// High-resolution timestamp in ms, same clock as event and frame timestamps.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

pub fn viewport_css_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(dim(w.inner_width()), dim(w.inner_height()))
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Result<web::HtmlCanvasElement, MountError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| MountError::MissingElement(format!("#{id}")))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| MountError::NotCanvas(id.to_string()))
}

/// Effect settings are read from `data-<key>` attributes.
pub fn data_lookup(el: &web::Element) -> impl Fn(&str) -> Option<String> + '_ {
    move |key: &str| el.get_attribute(&format!("data-{key}"))
}

/// CSS size of the canvas' parent, or of the canvas itself when detached.
pub fn container_css_size(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = match canvas.parent_element() {
        Some(parent) => parent.get_bounding_client_rect(),
        None => canvas.get_bounding_client_rect(),
    };
    Vec2::new(rect.width() as f32, rect.height() as f32)
}

/// Size the backing store to `css_size` × devicePixelRatio and pin the CSS
/// size so layout is unchanged.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, css_size: Vec2) -> f64 {
    let dpr = device_pixel_ratio();
    let w_px = (css_size.x as f64 * dpr) as u32;
    let h_px = (css_size.y as f64 * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", css_size.x));
    _ = style.set_property("height", &format!("{}px", css_size.y));
    dpr
}

/// Client coordinates to canvas-local CSS px.
#[inline]
pub fn client_to_local(canvas: &web::HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        client_x as f32 - rect.left() as f32,
        client_y as f32 - rect.top() as f32,
    )
}

/// The 2D path primitives the effects draw with are present.
pub fn supports_path2d() -> bool {
    web::window()
        .map(|w| js_sys::Reflect::has(&w, &"Path2D".into()).unwrap_or(false))
        .unwrap_or(false)
}

pub fn context_2d(
    canvas: &web::HtmlCanvasElement,
) -> Result<web::CanvasRenderingContext2d, MountError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<web::CanvasRenderingContext2d>().ok())
        .ok_or(MountError::NoContext2d)
}

/// Center of an element's bounding box in client coordinates.
#[inline]
pub fn element_center(el: &web::Element) -> Option<Vec2> {
    let rect = el.get_bounding_client_rect();
    if rect.width() <= 0.0 && rect.height() <= 0.0 {
        return None;
    }
    Some(Vec2::new(
        (rect.left() + rect.width() / 2.0) as f32,
        (rect.top() + rect.height() / 2.0) as f32,
    ))
}
