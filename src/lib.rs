#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod canvas;
mod content;
mod dom;
mod effects;
mod error;
mod frame;
pub mod fx;
mod listener;

use effects::Mounted;

// Page conventions for `mount_page`.
const DOT_GRID_SELECTOR: &str = "canvas[data-fx=\"dot-grid\"]";
const CLICK_SPARK_SELECTOR: &str = "canvas[data-fx=\"click-spark\"]";
const EMPHASIS_SELECTOR: &str = "[data-emphasis]";

/// A mounted effect. Unmounting (or freeing the handle from JS) removes its
/// listeners and stops its frame loop.
#[wasm_bindgen]
pub struct EffectHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl EffectHandle {
    pub fn unmount(&mut self) {
        self.inner.take();
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.inner.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn name(&self) -> Option<String> {
        self.inner.as_ref().map(|m| m.name().to_string())
    }
}

impl From<Mounted> for EffectHandle {
    fn from(m: Mounted) -> Self {
        Self { inner: Some(m) }
    }
}

/// Every effect found on the page by convention.
#[wasm_bindgen]
pub struct PageEffects {
    effects: Vec<Mounted>,
}

#[wasm_bindgen]
impl PageEffects {
    pub fn unmount(&mut self) {
        self.effects.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.effects.len()
    }
}

fn document() -> Result<web::Document, JsValue> {
    dom::window_document().ok_or_else(|| JsValue::from_str("no document"))
}

#[wasm_bindgen]
pub fn mount_dot_grid(canvas_id: &str) -> Result<EffectHandle, JsValue> {
    let canvas = dom::canvas_by_id(&document()?, canvas_id)?;
    Ok(effects::mount_dot_grid(canvas)?.into())
}

#[wasm_bindgen]
pub fn mount_click_spark(canvas_id: &str) -> Result<EffectHandle, JsValue> {
    let canvas = dom::canvas_by_id(&document()?, canvas_id)?;
    Ok(effects::mount_click_spark(canvas)?.into())
}

#[wasm_bindgen]
pub fn mount_text_emphasis(selector: &str) -> Result<EffectHandle, JsValue> {
    Ok(effects::mount_text_emphasis(&document()?, selector)?.into())
}

fn canvases(document: &web::Document, selector: &str) -> Vec<web::HtmlCanvasElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::HtmlCanvasElement>().ok())
        .collect()
}

fn mount_all(document: &web::Document) -> anyhow::Result<Vec<Mounted>> {
    let mut mounted = Vec::new();
    for canvas in canvases(document, DOT_GRID_SELECTOR) {
        match effects::mount_dot_grid(canvas) {
            Ok(m) => mounted.push(m),
            Err(e) => log::warn!("[dot-grid] skipped: {}", e),
        }
    }
    for canvas in canvases(document, CLICK_SPARK_SELECTOR) {
        match effects::mount_click_spark(canvas) {
            Ok(m) => mounted.push(m),
            Err(e) => log::warn!("[click-spark] skipped: {}", e),
        }
    }
    if document
        .query_selector(EMPHASIS_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .is_some()
    {
        match effects::mount_text_emphasis(document, EMPHASIS_SELECTOR) {
            Ok(m) => mounted.push(m),
            Err(e) => log::warn!("[text-emphasis] skipped: {}", e),
        }
    }
    Ok(mounted)
}

/// Mount every effect the page declares; missing ones are skipped.
#[wasm_bindgen]
pub fn mount_page() -> Result<PageEffects, JsValue> {
    let document = document()?;
    let effects = mount_all(&document).map_err(|e| JsValue::from_str(&e.to_string()))?;
    log::info!("page effects mounted: {}", effects.len());
    Ok(PageEffects { effects })
}

/// Fill the page's `[data-field]` slots below `#root_id` from a plain JS
/// object shaped like the portfolio content.
#[wasm_bindgen]
pub fn render_content(root_id: &str, data: JsValue) -> Result<(), JsValue> {
    let document = document()?;
    let root = document
        .get_element_by_id(root_id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{root_id}")))?;
    let json: String = js_sys::JSON::stringify(&data)?.into();
    let portfolio: fx::Portfolio = serde_json::from_str(&json)
        .map_err(|e| JsValue::from_str(&format!("content: {e}")))?;
    content::render(&document, &root, &portfolio)?;
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("pixel-folio-fx ready");
    Ok(())
}
