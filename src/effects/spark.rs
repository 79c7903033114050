use super::Mounted;
use crate::canvas::CanvasSurface;
use crate::dom;
use crate::error::MountError;
use crate::frame::FrameLoop;
use crate::fx::{SparkBurst, SparkConfig};
use crate::listener::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn mount_click_spark(canvas: web::HtmlCanvasElement) -> Result<Mounted, MountError> {
    let config = SparkConfig::from_lookup(dom::data_lookup(&canvas));
    let mut surface = CanvasSurface::new(canvas.clone())?;

    let size = dom::viewport_css_size();
    surface.resize(size);
    let mut burst = SparkBurst::new(config);
    burst.set_size(size);
    let burst = Rc::new(RefCell::new(burst));

    let click_listener = {
        let burst = burst.clone();
        let canvas = canvas.clone();
        EventListener::on_window("click", move |ev: web::MouseEvent| {
            let origin = dom::client_to_local(&canvas, ev.client_x(), ev.client_y());
            burst.borrow_mut().click(origin, dom::now_ms());
        })?
    };

    let resize_listener = {
        let burst = burst.clone();
        EventListener::on_window("resize", move |_: web::Event| {
            burst
                .borrow_mut()
                .request_resize(dom::viewport_css_size(), dom::now_ms());
        })?
    };

    let frame = FrameLoop::start(move |ts| {
        let mut burst = burst.borrow_mut();
        if let Some(size) = burst.take_resize(ts) {
            surface.resize(size);
        }
        burst.frame(ts, &mut surface);
    })?;

    Ok(Mounted::new(
        "click-spark",
        frame,
        vec![click_listener, resize_listener],
    ))
}
