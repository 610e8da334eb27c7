use crate::config::EffectConfig;
use crate::constants::*;
use crate::hash::{hash31, hash33};

/// Fixed motion parameters of one blob, derived from its 1-based index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlobParams {
    /// Starting angle on the orbit, radians in `[0, 2π)`.
    pub phase: f32,
    /// Angular rate multiplier in `[0.1π, 0.4π)`.
    pub rate_factor: f32,
    /// Orbit radius before clumping, world units in `[5, 10)`.
    pub orbit_radius: f32,
    /// 0 for a plain circle, 1 for a figure that doubles its vertical rate.
    pub direction_toggle: f32,
    /// Field radius of the blob, world units in `[0.5, 2)`.
    pub radius: f32,
}

impl BlobParams {
    /// Parameters for the blob with the given 1-based seed.
    pub fn from_seed(seed: u32) -> Self {
        let h1 = hash31(seed as f64);
        let phase = h1.x * std::f64::consts::TAU;
        let rate = h1.y as f32;
        let h2 = hash33(h1);
        Self {
            phase: phase as f32,
            rate_factor: RATE_FACTOR_MIN + rate * (RATE_FACTOR_MAX - RATE_FACTOR_MIN),
            orbit_radius: ORBIT_RADIUS_MIN + rate * (ORBIT_RADIUS_MAX - ORBIT_RADIUS_MIN),
            direction_toggle: (h2.x * 2.0).floor() as f32,
            radius: BLOB_RADIUS_MIN + h2.z as f32 * (BLOB_RADIUS_MAX - BLOB_RADIUS_MIN),
        }
    }
}

/// Build the immutable parameter set for a configuration.
///
/// Yields `min(config.ball_count, MAX_BLOBS)` entries seeded `1..=count`.
pub fn generate(config: &EffectConfig) -> Vec<BlobParams> {
    let count = config.effective_ball_count();
    (0..count as u32).map(|i| BlobParams::from_seed(i + 1)).collect()
}
