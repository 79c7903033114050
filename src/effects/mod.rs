//! Browser mounts for the canvas effects.
//!
//! Each mount wires one engine from [`crate::fx`] to its element, window
//! listeners and a frame loop, and hands back a [`Mounted`] guard. The
//! engine state lives only inside those closures, so dropping the guard
//! releases everything.

use crate::frame::FrameLoop;
use crate::listener::{EventListener, ResizeWatch};

mod emphasis;
mod grid;
mod spark;

pub use emphasis::mount_text_emphasis;
pub use grid::mount_dot_grid;
pub use spark::mount_click_spark;

pub struct Mounted {
    name: &'static str,
    frame: Option<FrameLoop>,
    listeners: Vec<EventListener>,
    watches: Vec<ResizeWatch>,
}

impl Mounted {
    fn new(name: &'static str, frame: FrameLoop, listeners: Vec<EventListener>) -> Self {
        log::info!("[{}] mounted", name);
        Self {
            name,
            frame: Some(frame),
            listeners,
            watches: Vec::new(),
        }
    }

    fn watching(mut self, watch: ResizeWatch) -> Self {
        self.watches.push(watch);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for Mounted {
    fn drop(&mut self) {
        // Stop drawing before the input side goes away.
        self.frame.take();
        self.watches.clear();
        self.listeners.clear();
        log::info!("[{}] unmounted", self.name);
    }
}
