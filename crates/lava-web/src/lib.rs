#![cfg(target_arch = "wasm32")]
//! Browser front-end: mounts the lava lamp into a container element.
//!
//! Visibility comes from an `IntersectionObserver` on the container, frames
//! from `requestAnimationFrame`, resize and pointer input from DOM listeners
//! that live exactly as long as one session.

use lava_core::{EffectConfig, LavaDriver, Rgb};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod backend;
mod dom;
mod frame;
mod input;

use backend::{GpuSlot, WebBackend};
use frame::RafScheduler;

pub(crate) type WebDriver = LavaDriver<WebBackend, RafScheduler>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lava-web ready");
    Ok(())
}

/// Handle to one mounted effect. Every setter rebuilds the running session.
#[wasm_bindgen]
pub struct LavaLamp {
    driver: Rc<RefCell<WebDriver>>,
    observer: Option<web::IntersectionObserver>,
    _on_visibility: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

#[wasm_bindgen]
impl LavaLamp {
    /// Mount into `container` with default settings. Rendering starts once
    /// the container scrolls into view. GPU failures are logged and leave
    /// the container empty.
    pub async fn mount(container: web::HtmlElement) -> Result<LavaLamp, JsValue> {
        let gpu = match backend::init_gpu().await {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                log::error!("[gpu] init failed: {:#}", e);
                None
            }
        };
        let slot = GpuSlot::new(gpu);
        let driver = Rc::new_cyclic(|weak| {
            RefCell::new(LavaDriver::new(
                WebBackend::new(container.clone(), slot, weak.clone()),
                RafScheduler::new(weak.clone()),
                EffectConfig::default(),
            ))
        });

        let weak = Rc::downgrade(&driver);
        let on_visibility = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _: web::IntersectionObserver| {
                let Some(entry) = entries
                    .iter()
                    .last()
                    .and_then(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                else {
                    return;
                };
                if let Some(driver) = weak.upgrade() {
                    if let Ok(mut d) = driver.try_borrow_mut() {
                        d.set_visible(entry.is_intersecting());
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
        let observer = web::IntersectionObserver::new(on_visibility.as_ref().unchecked_ref())?;
        observer.observe(&container);

        Ok(LavaLamp {
            driver,
            observer: Some(observer),
            _on_visibility: on_visibility,
        })
    }

    #[wasm_bindgen(js_name = setColor)]
    pub fn set_color(&self, hex: &str) {
        self.update_color(hex, |c| &mut c.color);
    }

    #[wasm_bindgen(js_name = setCursorColor)]
    pub fn set_cursor_color(&self, hex: &str) {
        self.update_color(hex, |c| &mut c.cursor_color);
    }

    #[wasm_bindgen(js_name = setSpeed)]
    pub fn set_speed(&self, speed: f32) {
        self.update(|c| c.speed = speed);
    }

    /// Negative counts clamp to zero; anything above 50 renders 50.
    #[wasm_bindgen(js_name = setBallCount)]
    pub fn set_ball_count(&self, count: i32) {
        self.update(|c| c.ball_count = count.max(0) as usize);
    }

    #[wasm_bindgen(js_name = setClumpFactor)]
    pub fn set_clump_factor(&self, clump: f32) {
        self.update(|c| c.clump_factor = clump);
    }

    #[wasm_bindgen(js_name = setHoverSmoothness)]
    pub fn set_hover_smoothness(&self, k: f32) {
        self.update(|c| c.hover_smoothness = k);
    }

    #[wasm_bindgen(js_name = setAnimationSize)]
    pub fn set_animation_size(&self, size: f32) {
        self.update(|c| c.animation_size = size);
    }

    #[wasm_bindgen(js_name = setCursorBallSize)]
    pub fn set_cursor_ball_size(&self, size: f32) {
        self.update(|c| c.cursor_ball_size = size);
    }

    #[wasm_bindgen(js_name = setMouseInteractionEnabled)]
    pub fn set_mouse_interaction_enabled(&self, enabled: bool) {
        self.update(|c| c.mouse_interaction_enabled = enabled);
    }

    #[wasm_bindgen(js_name = setTransparent)]
    pub fn set_transparent(&self, transparent: bool) {
        self.update(|c| c.transparent = transparent);
    }

    /// Release the canvas, GPU resources and listeners. Safe to call twice.
    pub fn destroy(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        if let Ok(mut d) = self.driver.try_borrow_mut() {
            d.teardown();
        }
    }
}

impl LavaLamp {
    fn update(&self, edit: impl FnOnce(&mut EffectConfig)) {
        match self.driver.try_borrow_mut() {
            Ok(mut d) => d.configure(edit),
            Err(_) => log::warn!("[web] setter ignored while a frame is running"),
        }
    }

    fn update_color(&self, hex: &str, pick: fn(&mut EffectConfig) -> &mut Rgb) {
        match Rgb::from_hex(hex) {
            Ok(rgb) => self.update(|c| *pick(c) = rgb),
            Err(e) => log::warn!("[web] {}", e),
        }
    }
}

impl Drop for LavaLamp {
    fn drop(&mut self) {
        self.destroy();
    }
}
