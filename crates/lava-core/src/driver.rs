//! Render-loop driver: owns at most one session and moves it between
//! `Idle`, `Active` and `Suspended` in response to host signals.
//!
//! Hosts plug in through three traits. GPU resources and event listener
//! registrations are plain values owned by the session; hosts release them
//! in `Drop`, so every exit path (teardown, reset, failed build) gives them
//! back exactly once.

use crate::config::EffectConfig;
use crate::error::LavaError;
use crate::shader::LavaUniforms;
use crate::sim::{PointerSignal, Simulation};
use glam::Vec2;

/// Per-session GPU resources: surface, program, uniform buffer.
pub trait RenderSurface {
    /// Backing size in pixels.
    fn size(&self) -> (u32, u32);
    fn resize(&mut self, width: u32, height: u32);
    /// Upload `uniforms` and issue one full-screen draw.
    fn draw(&mut self, uniforms: &LavaUniforms) -> Result<(), LavaError>;
}

/// Factory for the resources a session needs from its host.
pub trait Backend {
    type Surface: RenderSurface;
    /// Listener registrations; dropping the value deregisters them.
    type Listeners;

    fn create_surface(&mut self, config: &EffectConfig) -> Result<Self::Surface, LavaError>;
    fn attach_listeners(&mut self, config: &EffectConfig) -> Result<Self::Listeners, LavaError>;
}

/// Opaque id of a pending frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Display-refresh scheduling.
pub trait FrameScheduler {
    fn schedule(&mut self) -> FrameHandle;
    /// Must be a no-op for handles that already fired or were cancelled.
    fn cancel(&mut self, handle: FrameHandle);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Idle,
    Active,
    Suspended,
}

/// Elapsed-time bookkeeping anchored at the first frame of a session.
#[derive(Clone, Copy, Debug, Default)]
struct SessionClock {
    origin_ms: Option<f64>,
    carried_secs: f64,
    last_secs: f64,
}

impl SessionClock {
    fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let carried = self.carried_secs;
        let origin = *self
            .origin_ms
            .get_or_insert(timestamp_ms - carried * 1000.0);
        let secs = ((timestamp_ms - origin) * 0.001).max(self.last_secs);
        self.last_secs = secs;
        secs
    }

    fn pause(&mut self) {
        self.carried_secs = self.last_secs;
        self.origin_ms = None;
    }
}

struct Session<B: Backend> {
    id: u64,
    sim: Simulation,
    uniforms: LavaUniforms,
    clock: SessionClock,
    // Listeners drop before the surface they report on.
    _listeners: B::Listeners,
    surface: B::Surface,
}

impl<B: Backend> Session<B> {
    fn canvas(&self) -> Vec2 {
        let (w, h) = self.surface.size();
        Vec2::new(w as f32, h as f32)
    }
}

pub struct LavaDriver<B: Backend, S: FrameScheduler> {
    backend: B,
    scheduler: S,
    config: EffectConfig,
    visible: bool,
    suspended: bool,
    destroyed: bool,
    session: Option<Session<B>>,
    pending: Option<FrameHandle>,
    next_session_id: u64,
}

impl<B: Backend, S: FrameScheduler> LavaDriver<B, S> {
    pub fn new(backend: B, scheduler: S, config: EffectConfig) -> Self {
        Self {
            backend,
            scheduler,
            config,
            visible: false,
            suspended: false,
            destroyed: false,
            session: None,
            pending: None,
            next_session_id: 1,
        }
    }

    pub fn state(&self) -> DriverState {
        match (&self.session, self.suspended) {
            (None, _) => DriverState::Idle,
            (Some(_), false) => DriverState::Active,
            (Some(_), true) => DriverState::Suspended,
        }
    }

    #[inline]
    pub fn config(&self) -> &EffectConfig {
        &self.config
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    #[inline]
    pub fn has_pending_frame(&self) -> bool {
        self.pending.is_some()
    }

    /// Id of the live session, if any. Each rebuild gets a fresh id.
    pub fn session_id(&self) -> Option<u64> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn simulation(&self) -> Option<&Simulation> {
        self.session.as_ref().map(|s| &s.sim)
    }

    pub fn uniforms(&self) -> Option<&LavaUniforms> {
        self.session.as_ref().map(|s| &s.uniforms)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// Edge-triggered visibility input.
    pub fn set_visible(&mut self, visible: bool) {
        if self.destroyed || visible == self.visible {
            return;
        }
        self.visible = visible;
        if visible {
            self.activate();
        } else {
            self.deactivate();
        }
    }

    /// Replace the whole configuration; always rebuilds the session.
    pub fn set_config(&mut self, config: EffectConfig) {
        if self.destroyed {
            return;
        }
        self.config = config;
        self.reset();
    }

    /// Edit one or more fields in place; always rebuilds the session.
    pub fn configure(&mut self, edit: impl FnOnce(&mut EffectConfig)) {
        if self.destroyed {
            return;
        }
        edit(&mut self.config);
        self.reset();
    }

    /// Frame callback from the host's display refresh.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        // Only the frame we asked for may run; stale callbacks are dropped.
        if self.pending.take().is_none() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let elapsed = session.clock.tick(timestamp_ms);
        let canvas = session.canvas();
        session.sim.step(elapsed, &self.config, canvas);
        session.uniforms.set_frame(
            elapsed as f32,
            canvas,
            session.sim.cursor(),
            session.sim.positions(),
        );
        match session.surface.draw(&session.uniforms) {
            Ok(()) => self.pending = Some(self.scheduler.schedule()),
            Err(e) => {
                log::warn!("[driver] draw failed, dropping session: {}", e);
                self.release_session();
            }
        }
    }

    pub fn on_pointer(&mut self, signal: PointerSignal) {
        if !self.config.mouse_interaction_enabled {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            let canvas = session.canvas();
            session.sim.apply_pointer(signal, canvas);
        }
    }

    /// New container size in layout pixels (device pixel ratio 1).
    pub fn on_resize(&mut self, width: u32, height: u32) {
        if let Some(session) = self.session.as_mut() {
            session.surface.resize(width.max(1), height.max(1));
        }
    }

    /// Terminal: release everything and ignore further signals.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.release_session();
        if !self.destroyed {
            log::info!("[driver] destroyed");
        }
        self.destroyed = true;
        self.visible = false;
    }

    /// Resuming a suspended session keeps its blobs and its clock, so the
    /// animation continues where it paused instead of restarting.
    fn activate(&mut self) {
        if let Some(session) = self.session.as_ref() {
            log::debug!("[session {}] resumed", session.id);
            self.suspended = false;
            self.request_frame();
            return;
        }
        match self.build_session() {
            Ok(session) => {
                log::info!(
                    "[session {}] started with {} blobs",
                    session.id,
                    session.sim.params().len()
                );
                self.session = Some(session);
                self.suspended = false;
                self.request_frame();
            }
            Err(e) => log::warn!("[driver] session build failed, staying idle: {}", e),
        }
    }

    fn deactivate(&mut self) {
        self.cancel_pending();
        if let Some(session) = self.session.as_mut() {
            session.clock.pause();
            self.suspended = true;
            log::debug!("[session {}] suspended", session.id);
        }
    }

    fn reset(&mut self) {
        self.cancel_pending();
        self.release_session();
        if self.visible {
            self.activate();
        }
    }

    fn build_session(&mut self) -> Result<Session<B>, LavaError> {
        let mut surface = self.backend.create_surface(&self.config)?;
        // On failure `surface` drops here and releases its resources.
        let listeners = self.backend.attach_listeners(&self.config)?;
        let (w, h) = surface.size();
        surface.resize(w.max(1), h.max(1));
        let id = self.next_session_id;
        self.next_session_id += 1;
        Ok(Session {
            id,
            sim: Simulation::new(&self.config),
            uniforms: LavaUniforms::from_config(&self.config),
            clock: SessionClock::default(),
            _listeners: listeners,
            surface,
        })
    }

    fn release_session(&mut self) {
        if let Some(session) = self.session.take() {
            log::info!("[session {}] released", session.id);
        }
        self.suspended = false;
    }

    fn request_frame(&mut self) {
        if self.pending.is_none() {
            self.pending = Some(self.scheduler.schedule());
        }
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.scheduler.cancel(handle);
        }
    }
}

impl<B: Backend, S: FrameScheduler> Drop for LavaDriver<B, S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
