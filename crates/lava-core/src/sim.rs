//! Per-frame simulation: blob orbits and the eased cursor blob.

use crate::blobs::{self, BlobParams};
use crate::config::EffectConfig;
use crate::constants::{AUTO_ORBIT_FRACTION, MAX_BLOBS};
use glam::{Vec2, Vec3};

/// Pointer report from the host, normalized to the container, top-origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub inside: bool,
    pub normalized_x: f32,
    pub normalized_y: f32,
}

/// World-space `(x, y, radius)` of a blob at `elapsed` seconds.
///
/// Angles are accumulated in f64 so motion stays smooth after days of
/// uptime; only the final coordinates are narrowed to f32.
#[inline]
pub fn blob_position(p: &BlobParams, elapsed: f64, speed: f32, clump_factor: f32) -> Vec3 {
    let dt = elapsed * speed as f64 * p.rate_factor as f64;
    let theta = p.phase as f64 + dt;
    let x = theta.cos() as f32;
    let y = (theta + dt * p.direction_toggle as f64).sin() as f32;
    Vec3::new(
        x * p.orbit_radius * clump_factor,
        y * p.orbit_radius * clump_factor,
        p.radius,
    )
}

/// Cursor target used while the pointer is outside: an ellipse around the
/// canvas center with radii at 15% of the canvas size.
#[inline]
pub fn auto_orbit_target(elapsed: f64, speed: f32, canvas: Vec2) -> Vec2 {
    let center = canvas * 0.5;
    let radii = canvas * AUTO_ORBIT_FRACTION;
    let angle = elapsed * speed as f64;
    Vec2::new(
        center.x + angle.cos() as f32 * radii.x,
        center.y + angle.sin() as f32 * radii.y,
    )
}

/// One step of per-frame exponential easing toward `target`.
///
/// Contractive for `0 <= k <= 1`; callers own that range.
#[inline]
pub fn ease_toward(current: Vec2, target: Vec2, k: f32) -> Vec2 {
    Vec2::new(
        current.x + (target.x - current.x) * k,
        current.y + (target.y - current.y) * k,
    )
}

/// Convert a normalized top-origin pointer to bottom-origin canvas pixels.
#[inline]
pub fn pointer_to_canvas(normalized_x: f32, normalized_y: f32, canvas: Vec2) -> Vec2 {
    Vec2::new(normalized_x * canvas.x, (1.0 - normalized_y) * canvas.y)
}

/// Mutable state of a running session.
///
/// Positions live in a fixed array sized to the uniform capacity so stepping
/// never allocates.
#[derive(Clone, Debug)]
pub struct Simulation {
    params: Vec<BlobParams>,
    positions: [Vec3; MAX_BLOBS],
    elapsed: f64,
    pointer_inside: bool,
    pointer_px: Vec2,
    cursor: Vec2,
}

impl Simulation {
    pub fn new(config: &EffectConfig) -> Self {
        Self::with_params(blobs::generate(config))
    }

    pub fn with_params(mut params: Vec<BlobParams>) -> Self {
        params.truncate(MAX_BLOBS);
        Self {
            params,
            positions: [Vec3::ZERO; MAX_BLOBS],
            elapsed: 0.0,
            pointer_inside: false,
            pointer_px: Vec2::ZERO,
            cursor: Vec2::ZERO,
        }
    }

    #[inline]
    pub fn params(&self) -> &[BlobParams] {
        &self.params
    }

    /// Active blob states, one per parameter entry.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions[..self.params.len()]
    }

    /// Smoothed cursor blob position, bottom-origin canvas pixels.
    #[inline]
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    #[inline]
    pub fn pointer_inside(&self) -> bool {
        self.pointer_inside
    }

    #[inline]
    pub fn pointer_px(&self) -> Vec2 {
        self.pointer_px
    }

    #[inline]
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Record a pointer report; coordinates are converted with the canvas
    /// size at the time of the report.
    pub fn apply_pointer(&mut self, signal: PointerSignal, canvas: Vec2) {
        self.pointer_inside = signal.inside;
        if signal.inside {
            self.pointer_px = pointer_to_canvas(signal.normalized_x, signal.normalized_y, canvas);
        }
    }

    /// Where the cursor blob is heading this frame.
    pub fn cursor_target(&self, elapsed: f64, speed: f32, canvas: Vec2) -> Vec2 {
        if self.pointer_inside {
            self.pointer_px
        } else {
            auto_orbit_target(elapsed, speed, canvas)
        }
    }

    /// Advance to `elapsed` seconds: recompute every blob and ease the cursor.
    pub fn step(&mut self, elapsed: f64, config: &EffectConfig, canvas: Vec2) {
        self.elapsed = elapsed;
        for (slot, p) in self.positions.iter_mut().zip(&self.params) {
            *slot = blob_position(p, elapsed, config.speed, config.clump_factor);
        }
        let target = self.cursor_target(elapsed, config.speed, canvas);
        self.cursor = ease_toward(self.cursor, target, config.hover_smoothness);
    }
}
