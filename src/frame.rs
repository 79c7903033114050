use crate::error::MountError;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickClosure = Closure<dyn FnMut(f64)>;

/// A requestAnimationFrame loop that runs until dropped.
///
/// The tick closure re-schedules itself through a shared slot; dropping the
/// loop cancels the pending frame and releases the closure, which breaks
/// the self-reference.
pub struct FrameLoop {
    slot: Rc<RefCell<Option<TickClosure>>>,
    handle: Rc<Cell<Option<i32>>>,
    running: Rc<Cell<bool>>,
}

impl FrameLoop {
    /// `tick` receives the frame timestamp in ms.
    pub fn start(mut tick: impl FnMut(f64) + 'static) -> Result<Self, MountError> {
        let slot: Rc<RefCell<Option<TickClosure>>> = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));
        let running = Rc::new(Cell::new(true));

        let slot_tick = slot.clone();
        let handle_tick = handle.clone();
        let running_tick = running.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            handle_tick.set(None);
            if !running_tick.get() {
                return;
            }
            tick(ts);
            if let Some(f) = slot_tick.borrow().as_ref() {
                handle_tick.set(request_frame(f));
            }
        }) as Box<dyn FnMut(f64)>));

        let first = slot.borrow().as_ref().and_then(request_frame);
        if first.is_none() {
            slot.borrow_mut().take();
            return Err(MountError::AnimationFrame);
        }
        handle.set(first);
        Ok(Self {
            slot,
            handle,
            running,
        })
    }

    pub fn stop(&mut self) {
        self.running.set(false);
        if let Some(id) = self.handle.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // Release the closure unless it is the one currently on the stack.
        if let Ok(mut slot) = self.slot.try_borrow_mut() {
            slot.take();
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(f: &TickClosure) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(f.as_ref().unchecked_ref()).ok())
}
