//! Stateless pseudo-random hashes used to derive per-blob parameters.
//!
//! Both hashes are pure: equal inputs give bit-identical outputs on every
//! run, which keeps the animation reproducible without carrying RNG state.

use crate::constants::{HASH_MIX_OFFSET, HASH_SCRAMBLE};
use glam::DVec3;

/// Fractional part `t - floor(t)`, clamped into `[0, 1)`.
///
/// For tiny negative inputs the subtraction rounds up to exactly `1.0`;
/// that case and any non-finite input map to `0.0`.
#[inline]
pub fn fract(t: f64) -> f64 {
    let f = t - t.floor();
    if f < 1.0 {
        f
    } else {
        0.0
    }
}

#[inline]
fn fract3(v: DVec3) -> DVec3 {
    DVec3::new(fract(v.x), fract(v.y), fract(v.z))
}

#[inline]
fn scramble(v: DVec3) -> DVec3 {
    fract3(v * DVec3::from_array(HASH_SCRAMBLE))
}

/// Hash a scalar seed to three values in `[0, 1)`.
pub fn hash31(seed: f64) -> DVec3 {
    let r = scramble(DVec3::splat(seed));
    let rotated = DVec3::new(r.y, r.z, r.x) + HASH_MIX_OFFSET;
    let mix = r.dot(rotated);
    fract3(r + mix)
}

/// Hash a 3-vector to three values in `[0, 1)`.
pub fn hash33(v: DVec3) -> DVec3 {
    let mut p = scramble(v);
    let rotated = DVec3::new(p.y, p.x, p.z) + HASH_MIX_OFFSET;
    let mix = p.dot(rotated);
    p = fract3(p + mix);

    let xxy = DVec3::new(p.x, p.x, p.y);
    let yxx = DVec3::new(p.y, p.x, p.x);
    let zyx = DVec3::new(p.z, p.y, p.x);
    fract3((xxy + yxx) * zyx)
}
