//! Browser implementation of the driver's backend seam: one canvas plus
//! wgpu surface per session, DOM listeners scoped to the session.

use crate::dom::{self, ListenerSet};
use crate::input;
use crate::WebDriver;
use lava_core::gpu::{GpuContext, GpuSurface};
use lava_core::{Backend, EffectConfig, LavaError, LavaUniforms, PointerSignal, RenderSurface};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::sync::Arc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub async fn init_gpu() -> anyhow::Result<GpuContext> {
    let instance = wgpu::Instance::default();
    let ctx = GpuContext::new(instance, None).await?;
    Ok(ctx)
}

/// Host-lifetime GPU context. Replaced in the background after device loss;
/// the next activation or config change picks up the new one.
#[derive(Clone)]
pub struct GpuSlot {
    ctx: Rc<RefCell<Option<Arc<GpuContext>>>>,
    acquiring: Rc<Cell<bool>>,
}

impl GpuSlot {
    pub fn new(ctx: Option<GpuContext>) -> Self {
        Self {
            ctx: Rc::new(RefCell::new(ctx.map(Arc::new))),
            acquiring: Rc::new(Cell::new(false)),
        }
    }

    fn get(&self) -> Result<Arc<GpuContext>, LavaError> {
        let current = self.ctx.borrow().clone();
        match current {
            Some(ctx) if !ctx.is_lost() => Ok(ctx),
            Some(_) => {
                self.ctx.borrow_mut().take();
                self.reacquire();
                Err(LavaError::ContextLost)
            }
            None => {
                self.reacquire();
                Err(LavaError::NoAdapter)
            }
        }
    }

    fn reacquire(&self) {
        if self.acquiring.replace(true) {
            return;
        }
        let slot = self.clone();
        spawn_local(async move {
            match init_gpu().await {
                Ok(ctx) => {
                    log::info!("[gpu] context reacquired");
                    *slot.ctx.borrow_mut() = Some(Arc::new(ctx));
                }
                Err(e) => log::warn!("[gpu] reacquire failed: {:#}", e),
            }
            slot.acquiring.set(false);
        });
    }
}

pub struct WebBackend {
    container: web::HtmlElement,
    gpu: GpuSlot,
    driver: Weak<RefCell<WebDriver>>,
}

impl WebBackend {
    pub fn new(container: web::HtmlElement, gpu: GpuSlot, driver: Weak<RefCell<WebDriver>>) -> Self {
        Self {
            container,
            gpu,
            driver,
        }
    }
}

/// Session surface: the wgpu surface and the canvas it draws into.
pub struct WebSurface {
    gpu: GpuSurface,
    canvas: web::HtmlCanvasElement,
}

impl RenderSurface for WebSurface {
    fn size(&self) -> (u32, u32) {
        self.gpu.size()
    }

    fn resize(&mut self, width: u32, height: u32) {
        dom::size_canvas(&self.canvas, width, height);
        self.gpu.resize(width, height);
    }

    fn draw(&mut self, uniforms: &LavaUniforms) -> Result<(), LavaError> {
        self.gpu.draw(uniforms)
    }
}

impl Drop for WebSurface {
    fn drop(&mut self) {
        // No-op if the container already dropped the canvas.
        self.canvas.remove();
    }
}

impl Backend for WebBackend {
    type Surface = WebSurface;
    type Listeners = ListenerSet;

    fn create_surface(&mut self, _config: &EffectConfig) -> Result<WebSurface, LavaError> {
        let ctx = self.gpu.get()?;
        let canvas = dom::create_canvas(&self.container)?;
        let surface = match ctx
            .instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
        {
            Ok(s) => s,
            Err(e) => {
                canvas.remove();
                return Err(LavaError::Surface(e.to_string()));
            }
        };
        let (w, h) = dom::container_size(&self.container);
        match GpuSurface::new(ctx, surface, w, h) {
            Ok(gpu) => Ok(WebSurface { gpu, canvas }),
            Err(e) => {
                canvas.remove();
                Err(e)
            }
        }
    }

    fn attach_listeners(&mut self, config: &EffectConfig) -> Result<ListenerSet, LavaError> {
        let mut set = ListenerSet::default();
        let window = web::window().ok_or_else(|| LavaError::Host("no window".into()))?;

        let driver = self.driver.clone();
        let container = self.container.clone();
        set.add(window.as_ref(), "resize", move |_| {
            let (w, h) = dom::container_size(&container);
            with_driver(&driver, |d| d.on_resize(w, h));
        })?;

        if config.mouse_interaction_enabled {
            let inside = Rc::new(Cell::new(false));
            let target: &web::EventTarget = self.container.as_ref();
            for (event, entering) in [
                ("pointerenter", Some(true)),
                ("pointerleave", Some(false)),
                ("pointermove", None),
            ] {
                let driver = self.driver.clone();
                let area: web::Element = self.container.clone().into();
                let inside = inside.clone();
                set.add(target, event, move |ev| {
                    if let Some(flag) = entering {
                        inside.set(flag);
                    }
                    let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                        return;
                    };
                    let signal: PointerSignal = input::pointer_signal(ev, &area, inside.get());
                    with_driver(&driver, |d| d.on_pointer(signal));
                })?;
            }
        }
        Ok(set)
    }
}

fn with_driver(driver: &Weak<RefCell<WebDriver>>, f: impl FnOnce(&mut WebDriver)) {
    if let Some(driver) = driver.upgrade() {
        if let Ok(mut d) = driver.try_borrow_mut() {
            f(&mut d);
        }
    }
}
