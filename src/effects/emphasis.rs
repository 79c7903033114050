use super::Mounted;
use crate::dom;
use crate::error::MountError;
use crate::frame::FrameLoop;
use crate::fx::emphasis::EmphasisStyle;
use crate::fx::{EmphasisConfig, TextEmphasis};
use crate::listener::EventListener;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn collect_elements(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[text-emphasis] bad selector '{}'", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

fn clear_style(el: &web::HtmlElement) {
    let css = el.style();
    _ = css.remove_property("transform");
    _ = css.remove_property("text-shadow");
    _ = css.remove_property("color");
}

fn apply_style(el: &web::HtmlElement, style: &EmphasisStyle) {
    if style.is_neutral() {
        clear_style(el);
        return;
    }
    let css = el.style();
    _ = css.set_property("transform", &format!("scale({:.4})", style.scale));
    _ = css.set_property(
        "text-shadow",
        &format!(
            "0 0 {:.2}px {}",
            style.shadow_blur,
            style.color.to_css_rgba(style.level)
        ),
    );
    _ = css.set_property("color", &style.color.to_string());
}

pub fn mount_text_emphasis(
    document: &web::Document,
    selector: &str,
) -> Result<Mounted, MountError> {
    let elements = collect_elements(document, selector);
    if elements.is_empty() {
        return Err(MountError::MissingElement(selector.to_string()));
    }
    let config = match document.body() {
        Some(body) => EmphasisConfig::from_lookup(dom::data_lookup(&body)),
        None => EmphasisConfig::default(),
    };
    let emphasis = Rc::new(RefCell::new(TextEmphasis::new(config, elements.len())));
    let elements = Rc::new(RefCell::new(elements));

    let move_listener = {
        let emphasis = emphasis.clone();
        let elements = elements.clone();
        let document = document.clone();
        let selector = selector.to_string();
        EventListener::on_window("pointermove", move |ev: web::PointerEvent| {
            let now = dom::now_ms();
            let mut emphasis = emphasis.borrow_mut();
            if !emphasis.accept_pointer(now) {
                return;
            }
            // Content rendered after mounting replaces or adds elements.
            let current = collect_elements(&document, &selector);
            let mut elements = elements.borrow_mut();
            if *elements != current {
                // Tracks restart from zero, so no element keeps a stale look.
                for el in elements.iter() {
                    clear_style(el);
                }
                log::debug!("[text-emphasis] tracking {} elements", current.len());
                emphasis.track_elements(current.len());
                *elements = current;
            }
            let pointer = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
            let centers: Vec<Option<Vec2>> =
                elements.iter().map(|el| dom::element_center(el)).collect();
            emphasis.retarget(pointer, &centers, now);
        })?
    };

    let frame = FrameLoop::start(move |ts| {
        for (i, style) in emphasis.borrow_mut().frame(ts) {
            if let Some(el) = elements.borrow().get(i) {
                apply_style(el, &style);
            }
        }
    })?;

    Ok(Mounted::new("text-emphasis", frame, vec![move_listener]))
}
