use lava_core::gpu::{GpuContext, GpuSurface};
use lava_core::{Backend, EffectConfig, FrameHandle, FrameScheduler, LavaError};
use std::sync::Arc;
use winit::window::Window;

/// The window is the drawing surface; every session configures a fresh
/// wgpu surface on it. Input arrives through the event loop, so there is
/// nothing to register per session.
pub struct NativeBackend {
    window: Arc<Window>,
    gpu: Arc<GpuContext>,
}

impl NativeBackend {
    pub fn new(window: Arc<Window>, gpu: GpuContext) -> Self {
        Self {
            window,
            gpu: Arc::new(gpu),
        }
    }
}

impl Backend for NativeBackend {
    type Surface = GpuSurface;
    type Listeners = ();

    fn create_surface(&mut self, _config: &EffectConfig) -> Result<GpuSurface, LavaError> {
        if self.gpu.is_lost() {
            return Err(LavaError::ContextLost);
        }
        let surface = self
            .gpu
            .instance
            .create_surface(self.window.clone())
            .map_err(|e| LavaError::Surface(e.to_string()))?;
        let size = self.window.inner_size();
        GpuSurface::new(self.gpu.clone(), surface, size.width, size.height)
    }

    fn attach_listeners(&mut self, _config: &EffectConfig) -> Result<(), LavaError> {
        Ok(())
    }
}

/// Frames are `RedrawRequested` events. A requested redraw cannot be
/// withdrawn, so `cancel` only forgets it and the driver drops the callback.
pub struct RedrawScheduler {
    window: Arc<Window>,
    next: u64,
}

impl RedrawScheduler {
    pub fn new(window: Arc<Window>) -> Self {
        Self { window, next: 0 }
    }
}

impl FrameScheduler for RedrawScheduler {
    fn schedule(&mut self) -> FrameHandle {
        self.next += 1;
        self.window.request_redraw();
        FrameHandle(self.next)
    }

    fn cancel(&mut self, _handle: FrameHandle) {}
}

/// Adapter and device compatible with `window`.
pub async fn init_gpu(window: Arc<Window>) -> anyhow::Result<GpuContext> {
    let instance = wgpu::Instance::default();
    let probe = instance.create_surface(window)?;
    let ctx = GpuContext::new(instance, Some(&probe)).await?;
    Ok(ctx)
}
