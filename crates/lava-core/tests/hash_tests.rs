// Host-side tests for the deterministic hashes.

use glam::DVec3;
use lava_core::hash::{fract, hash31, hash33};

fn in_unit_range(v: DVec3) -> bool {
    v.to_array().iter().all(|c| (0.0..1.0).contains(c))
}

fn sample_seeds() -> Vec<f64> {
    let mut seeds: Vec<f64> = (-500..=500).map(|i| i as f64).collect();
    seeds.extend([
        0.0,
        -0.0,
        1e-20,
        -1e-20,
        0.5,
        -0.5,
        123.456,
        -98765.4321,
        1e6,
        -1e6,
        1e12,
        -1e12,
        1e300,
        -1e300,
        f64::MAX,
        f64::MIN,
    ]);
    seeds
}

#[test]
fn hash31_output_is_in_unit_range() {
    for s in sample_seeds() {
        let h = hash31(s);
        assert!(in_unit_range(h), "hash31({s}) = {h:?} out of [0,1)");
    }
}

#[test]
fn hash33_output_is_in_unit_range() {
    for s in sample_seeds() {
        let inputs = [
            DVec3::splat(s),
            DVec3::new(s, -s, s * 0.5),
            hash31(s),
            DVec3::new(s, 1e9, -3.25),
        ];
        for v in inputs {
            let h = hash33(v);
            assert!(in_unit_range(h), "hash33({v:?}) = {h:?} out of [0,1)");
        }
    }
}

#[test]
fn hashes_tolerate_non_finite_input() {
    for s in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert!(in_unit_range(hash31(s)));
        assert!(in_unit_range(hash33(DVec3::splat(s))));
    }
}

#[test]
fn hashes_are_pure() {
    for i in 1..=200 {
        let a = hash31(i as f64);
        let b = hash31(i as f64);
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
        assert_eq!(a.z.to_bits(), b.z.to_bits());
        assert_eq!(hash33(a), hash33(b));
    }
}

#[test]
fn neighbouring_seeds_differ() {
    for i in 1..1000 {
        let a = hash31(i as f64);
        let b = hash31((i + 1) as f64);
        assert_ne!(a, b, "hash31({i}) == hash31({})", i + 1);
    }
}

#[test]
fn hash31_matches_hand_computed_value() {
    // seed 1: r = (0.1031, 0.1030, 0.0973)
    let r = DVec3::new(0.1031, 0.1030, 0.0973);
    let mix = r.x * (r.y + 33.33) + r.y * (r.z + 33.33) + r.z * (r.x + 33.33);
    let expected = DVec3::new(fract(r.x + mix), fract(r.y + mix), fract(r.z + mix));
    let got = hash31(1.0);
    assert!((got - expected).abs().max_element() < 1e-12, "{got:?} vs {expected:?}");
}

#[test]
fn hash33_applies_shuffle_step() {
    let v = DVec3::new(0.25, 0.5, 0.75);
    let s = DVec3::new(fract(0.25 * 0.1031), fract(0.5 * 0.1030), fract(0.75 * 0.0973));
    let mix = s.x * (s.y + 33.33) + s.y * (s.x + 33.33) + s.z * (s.z + 33.33);
    let p = DVec3::new(fract(s.x + mix), fract(s.y + mix), fract(s.z + mix));
    let expected = DVec3::new(
        fract((p.x + p.y) * p.z),
        fract((p.x + p.x) * p.y),
        fract((p.y + p.x) * p.x),
    );
    let got = hash33(v);
    assert!((got - expected).abs().max_element() < 1e-12, "{got:?} vs {expected:?}");
}
