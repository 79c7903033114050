use crate::error::MountError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// An event registration that is removed again when dropped.
pub struct EventListener {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl EventListener {
    pub fn new<E>(
        target: &web::EventTarget,
        event: &'static str,
        mut handler: impl FnMut(E) + 'static,
    ) -> Result<Self, MountError>
    where
        E: JsCast + 'static,
    {
        let closure = Closure::wrap(Box::new(move |ev: web::Event| {
            handler(ev.unchecked_into::<E>());
        }) as Box<dyn FnMut(web::Event)>);
        target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|_| MountError::Listener(event))?;
        Ok(Self {
            target: target.clone(),
            event,
            closure,
        })
    }

    /// Listen on the window.
    pub fn on_window<E>(
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Result<Self, MountError>
    where
        E: JsCast + 'static,
    {
        let window = web::window().ok_or(MountError::Listener(event))?;
        Self::new(&window, event, handler)
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let f: &js_sys::Function = self.closure.as_ref().unchecked_ref();
        _ = self.target.remove_event_listener_with_callback(self.event, f);
    }
}

/// A `ResizeObserver` on one element, disconnected when dropped.
pub struct ResizeWatch {
    observer: web::ResizeObserver,
    _closure: Closure<dyn FnMut(js_sys::Array)>,
}

impl ResizeWatch {
    pub fn new(target: &web::Element, mut handler: impl FnMut() + 'static) -> Result<Self, MountError> {
        let closure = Closure::wrap(Box::new(move |_entries: js_sys::Array| {
            handler();
        }) as Box<dyn FnMut(js_sys::Array)>);
        let observer = web::ResizeObserver::new(closure.as_ref().unchecked_ref())
            .map_err(|_| MountError::Listener("ResizeObserver"))?;
        observer.observe(target);
        Ok(Self {
            observer,
            _closure: closure,
        })
    }
}

impl Drop for ResizeWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
