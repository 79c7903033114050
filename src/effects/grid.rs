use super::Mounted;
use crate::canvas::CanvasSurface;
use crate::dom;
use crate::error::MountError;
use crate::frame::FrameLoop;
use crate::fx::{GridConfig, GridField};
use crate::listener::{EventListener, ResizeWatch};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn mount_dot_grid(canvas: web::HtmlCanvasElement) -> Result<Mounted, MountError> {
    let config = GridConfig::from_lookup(dom::data_lookup(&canvas));
    let mut surface = CanvasSurface::new(canvas.clone())?;

    let size = dom::container_css_size(&canvas);
    surface.resize(size);
    let mut field = GridField::new(config);
    field.rebuild(size);
    let field = Rc::new(RefCell::new(field));

    let move_listener = {
        let field = field.clone();
        let canvas = canvas.clone();
        EventListener::on_window("pointermove", move |ev: web::PointerEvent| {
            let pos = dom::client_to_local(&canvas, ev.client_x(), ev.client_y());
            field.borrow_mut().pointer_move(pos, dom::now_ms());
        })?
    };

    let click_listener = {
        let field = field.clone();
        let canvas = canvas.clone();
        EventListener::on_window("click", move |ev: web::MouseEvent| {
            let pos = dom::client_to_local(&canvas, ev.client_x(), ev.client_y());
            let pushed = field.borrow_mut().click(pos, dom::now_ms());
            log::debug!("[dot-grid] click pushed {} dots", pushed);
        })?
    };

    let resize_listener = {
        let field = field.clone();
        let canvas = canvas.clone();
        EventListener::on_window("resize", move |_: web::Event| {
            let size = dom::container_css_size(&canvas);
            field.borrow_mut().request_resize(size, dom::now_ms());
        })?
    };

    // Layout can resize the container without a window resize.
    let container: web::Element = match canvas.parent_element() {
        Some(parent) => parent,
        None => canvas.clone().into(),
    };
    let watch = {
        let field = field.clone();
        let canvas = canvas.clone();
        ResizeWatch::new(&container, move || {
            let size = dom::container_css_size(&canvas);
            field.borrow_mut().request_resize(size, dom::now_ms());
        })
    };

    let frame = FrameLoop::start(move |ts| {
        let mut field = field.borrow_mut();
        if let Some(size) = field.take_resize(ts) {
            surface.resize(size);
        }
        field.frame(ts, &mut surface);
    })?;

    let mounted = Mounted::new(
        "dot-grid",
        frame,
        vec![move_listener, click_listener, resize_listener],
    );
    Ok(match watch {
        Ok(watch) => mounted.watching(watch),
        Err(e) => {
            log::warn!("[dot-grid] {}; resizing on window events only", e);
            mounted
        }
    })
}
