use crate::WebDriver;
use lava_core::{FrameHandle, FrameScheduler};
use std::cell::RefCell;
use std::rc::Weak;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` scheduling. One closure is reused for every frame
/// and only holds a weak reference to the driver.
pub struct RafScheduler {
    tick: Closure<dyn FnMut(f64)>,
}

impl RafScheduler {
    pub fn new(driver: Weak<RefCell<WebDriver>>) -> Self {
        let tick = Closure::wrap(Box::new(move |ts: f64| {
            let Some(driver) = driver.upgrade() else {
                return;
            };
            // Skip rather than panic if the driver is already borrowed.
            if let Ok(mut d) = driver.try_borrow_mut() {
                d.on_frame(ts);
            }
        }) as Box<dyn FnMut(f64)>);
        Self { tick }
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self) -> FrameHandle {
        let id = web::window()
            .and_then(|w| w.request_animation_frame(self.tick.as_ref().unchecked_ref()).ok())
            .unwrap_or_else(|| {
                log::warn!("[frame] requestAnimationFrame unavailable");
                0
            });
        FrameHandle(id as u64)
    }

    fn cancel(&mut self, handle: FrameHandle) {
        // Cancelling an id that already fired is a no-op in the browser.
        if let Some(w) = web::window() {
            let _ = w.cancel_animation_frame(handle.0 as i32);
        }
    }
}
