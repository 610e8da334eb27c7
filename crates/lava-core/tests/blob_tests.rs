// Host-side tests for blob parameter generation.

use lava_core::blobs::{generate, BlobParams};
use lava_core::constants::*;
use lava_core::hash::{hash31, hash33};
use lava_core::EffectConfig;

fn config_with(count: usize) -> EffectConfig {
    EffectConfig {
        ball_count: count,
        ..EffectConfig::default()
    }
}

fn bits(p: &BlobParams) -> [u32; 5] {
    [
        p.phase.to_bits(),
        p.rate_factor.to_bits(),
        p.orbit_radius.to_bits(),
        p.direction_toggle.to_bits(),
        p.radius.to_bits(),
    ]
}

#[test]
fn generation_is_bit_identical_across_calls() {
    let cfg = config_with(37);
    let a = generate(&cfg);
    let b = generate(&cfg);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(bits(x), bits(y));
    }
}

#[test]
fn count_is_capped_at_uniform_capacity() {
    assert_eq!(generate(&config_with(100)).len(), MAX_BLOBS);
    assert_eq!(generate(&config_with(50)).len(), 50);
    assert_eq!(generate(&config_with(3)).len(), 3);
    assert!(generate(&config_with(0)).is_empty());
}

#[test]
fn larger_counts_extend_smaller_ones() {
    // index i is always seeded with i + 1, whatever the count
    let small = generate(&config_with(5));
    let large = generate(&config_with(20));
    assert_eq!(&large[..5], &small[..]);
}

#[test]
fn parameters_stay_in_documented_ranges() {
    for p in generate(&config_with(MAX_BLOBS)) {
        assert!((0.0..std::f32::consts::TAU + 1e-4).contains(&p.phase));
        assert!(p.rate_factor >= RATE_FACTOR_MIN && p.rate_factor <= RATE_FACTOR_MAX);
        assert!(p.orbit_radius >= ORBIT_RADIUS_MIN && p.orbit_radius <= ORBIT_RADIUS_MAX);
        assert!(p.direction_toggle == 0.0 || p.direction_toggle == 1.0);
        assert!(p.radius >= BLOB_RADIUS_MIN && p.radius <= BLOB_RADIUS_MAX);
    }
}

#[test]
fn first_blob_follows_hash_recipe() {
    let p = BlobParams::from_seed(1);
    let h1 = hash31(1.0);
    let h2 = hash33(h1);
    let pi = std::f32::consts::PI;
    let close = |a: f32, b: f32| (a - b).abs() < 1e-5;
    assert!(close(p.phase, (h1.x * std::f64::consts::TAU) as f32));
    assert!(close(p.rate_factor, 0.1 * pi + h1.y as f32 * (0.4 * pi - 0.1 * pi)));
    assert!(close(p.orbit_radius, 5.0 + h1.y as f32 * 5.0));
    assert_eq!(p.direction_toggle, (h2.x * 2.0).floor() as f32);
    assert!(close(p.radius, 0.5 + h2.z as f32 * 1.5));
}

#[test]
fn rate_and_orbit_share_one_hash_component() {
    // both come from h1.y, so they rise and fall together
    let mut params = generate(&config_with(MAX_BLOBS));
    params.sort_by(|a, b| a.rate_factor.total_cmp(&b.rate_factor));
    for pair in params.windows(2) {
        assert!(pair[0].orbit_radius <= pair[1].orbit_radius);
    }
}
