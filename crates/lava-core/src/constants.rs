//! Shared tuning constants for the blob simulation and the lava shader.
//!
//! These mirror values baked into `shaders/lava.wgsl`; keep both in sync.

// Uniform array capacity; blobs beyond this are never rendered
pub const MAX_BLOBS: usize = 50;

// Field value at which the silhouette edge sits
pub const FIELD_THRESHOLD: f32 = 1.3;
// Lower bound for the screen-space derivative used in edge softening
pub const DERIVATIVE_EPSILON: f32 = 1e-4;
// Upper bound for the same derivative (one field unit)
pub const DERIVATIVE_MAX: f32 = 1.0;

// Hash scrambling constants
pub const HASH_SCRAMBLE: [f64; 3] = [0.1031, 0.1030, 0.0973];
pub const HASH_MIX_OFFSET: f64 = 33.33;

// Per-blob parameter ranges
pub const RATE_FACTOR_MIN: f32 = 0.1 * std::f32::consts::PI;
pub const RATE_FACTOR_MAX: f32 = 0.4 * std::f32::consts::PI;
pub const ORBIT_RADIUS_MIN: f32 = 5.0;
pub const ORBIT_RADIUS_MAX: f32 = 10.0;
pub const BLOB_RADIUS_MIN: f32 = 0.5;
pub const BLOB_RADIUS_MAX: f32 = 2.0;

// Auto-orbit of the cursor blob, as a fraction of canvas width/height
pub const AUTO_ORBIT_FRACTION: f32 = 0.15;

// Defaults for a freshly mounted effect
pub const DEFAULT_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const DEFAULT_CURSOR_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
pub const DEFAULT_SPEED: f32 = 0.2;
pub const DEFAULT_BALL_COUNT: usize = 15;
pub const DEFAULT_CLUMP_FACTOR: f32 = 1.0;
pub const DEFAULT_HOVER_SMOOTHNESS: f32 = 0.05;
pub const DEFAULT_ANIMATION_SIZE: f32 = 30.0;
pub const DEFAULT_CURSOR_BALL_SIZE: f32 = 3.0;
