// Host-side tests for the per-frame simulation.

use glam::{Vec2, Vec3};
use lava_core::sim::{auto_orbit_target, blob_position, ease_toward, pointer_to_canvas};
use lava_core::{EffectConfig, PointerSignal, Simulation};

const CANVAS: Vec2 = Vec2::new(800.0, 600.0);

#[test]
fn zero_speed_collapses_to_starting_phase() {
    let cfg = EffectConfig {
        ball_count: 3,
        speed: 0.0,
        clump_factor: 1.0,
        ..EffectConfig::default()
    };
    let mut sim = Simulation::new(&cfg);
    sim.step(0.0, &cfg, CANVAS);
    assert_eq!(sim.positions().len(), 3);
    for (pos, p) in sim.positions().iter().zip(sim.params()) {
        let phase = p.phase as f64;
        assert_eq!(pos.x, phase.cos() as f32 * p.orbit_radius);
        assert_eq!(pos.y, phase.sin() as f32 * p.orbit_radius);
        assert_eq!(pos.z, p.radius);
    }
}

#[test]
fn zero_speed_freezes_blobs_over_time() {
    let cfg = EffectConfig {
        speed: 0.0,
        ..EffectConfig::default()
    };
    let mut sim = Simulation::new(&cfg);
    sim.step(0.0, &cfg, CANVAS);
    let first: Vec<Vec3> = sim.positions().to_vec();
    sim.step(42.0, &cfg, CANVAS);
    assert_eq!(sim.positions(), &first[..]);
}

#[test]
fn clump_factor_scales_orbit_but_not_radius() {
    let cfg = EffectConfig::default();
    let p = Simulation::new(&cfg).params()[0];
    let a = blob_position(&p, 3.0, 0.2, 1.0);
    let b = blob_position(&p, 3.0, 0.2, 0.5);
    assert!((b.x - a.x * 0.5).abs() < 1e-5);
    assert!((b.y - a.y * 0.5).abs() < 1e-5);
    assert_eq!(a.z, b.z);
}

#[test]
fn toggled_blobs_double_vertical_rate() {
    let mut p = Simulation::new(&EffectConfig::default()).params()[0];
    p.direction_toggle = 1.0;
    let t = 2.0_f64;
    let pos = blob_position(&p, t, 0.5, 1.0);
    let dt = t * 0.5 * p.rate_factor as f64;
    let expected = (p.phase as f64 + 2.0 * dt).sin() as f32 * p.orbit_radius;
    assert!((pos.y - expected).abs() < 1e-4);
}

#[test]
fn orbit_stays_within_scaled_radius() {
    let cfg = EffectConfig {
        ball_count: 50,
        clump_factor: 0.7,
        ..EffectConfig::default()
    };
    let mut sim = Simulation::new(&cfg);
    for frame in 0..120 {
        sim.step(frame as f64 * 0.25, &cfg, CANVAS);
        for (pos, p) in sim.positions().iter().zip(sim.params()) {
            let limit = p.orbit_radius * 0.7 + 1e-4;
            assert!(pos.x.abs() <= limit && pos.y.abs() <= limit);
        }
    }
}

/// Step with the pointer parked at `target_px` until the cursor is within
/// 1e-3 of it on both axes, checking it never passes the target.
fn steps_to_reach(
    sim: &mut Simulation,
    cfg: &EffectConfig,
    canvas: Vec2,
    target_px: Vec2,
) -> usize {
    sim.apply_pointer(
        PointerSignal {
            inside: true,
            normalized_x: target_px.x / canvas.x,
            normalized_y: 1.0 - target_px.y / canvas.y,
        },
        canvas,
    );
    let target = sim.pointer_px();
    let from_below = sim.cursor().cmple(target);
    let mut steps = 0;
    while (target - sim.cursor()).abs().max_element() >= 1e-3 {
        let before = (target - sim.cursor()).length();
        sim.step(steps as f64 * 0.016, cfg, canvas);
        let cur = sim.cursor();
        for axis in 0..2 {
            if from_below.test(axis) {
                assert!(cur[axis] <= target[axis], "overshot from below at step {steps}");
            } else {
                assert!(cur[axis] >= target[axis], "overshot from above at step {steps}");
            }
        }
        assert!((target - cur).length() <= before);
        steps += 1;
        assert!(steps <= 200, "did not converge within 200 steps");
    }
    steps
}

#[test]
fn stepping_converges_from_below_without_overshoot() {
    let cfg = EffectConfig {
        hover_smoothness: 0.05,
        ..EffectConfig::default()
    };
    let canvas = Vec2::new(10.0, 10.0);
    let mut sim = Simulation::new(&cfg);
    assert!(steps_to_reach(&mut sim, &cfg, canvas, Vec2::new(8.0, 6.0)) > 0);
}

#[test]
fn stepping_converges_from_above_without_overshoot() {
    let canvas = Vec2::new(10.0, 10.0);
    let snap = EffectConfig {
        hover_smoothness: 1.0,
        ..EffectConfig::default()
    };
    let mut sim = Simulation::new(&snap);
    // park the cursor in the top-right corner first
    sim.apply_pointer(
        PointerSignal {
            inside: true,
            normalized_x: 1.0,
            normalized_y: 0.0,
        },
        canvas,
    );
    sim.step(0.0, &snap, canvas);
    assert_eq!(sim.cursor(), Vec2::new(10.0, 10.0));

    let cfg = EffectConfig {
        hover_smoothness: 0.05,
        ..EffectConfig::default()
    };
    assert!(steps_to_reach(&mut sim, &cfg, canvas, Vec2::new(2.0, 4.0)) > 0);
}

#[test]
fn blobs_keep_moving_after_days_of_uptime() {
    let cfg = EffectConfig::default();
    let mut sim = Simulation::new(&cfg);
    sim.step(300_000.0, &cfg, CANVAS);
    let before: Vec<Vec3> = sim.positions().to_vec();
    sim.step(300_000.015, &cfg, CANVAS);
    assert!(sim.elapsed() > 300_000.0);
    for (a, b) in before.iter().zip(sim.positions()) {
        assert_ne!(a, b, "consecutive frames produced identical blob positions");
    }
}

#[test]
fn auto_orbit_advances_after_days_of_uptime() {
    let a = auto_orbit_target(300_000.0, 0.2, CANVAS);
    let b = auto_orbit_target(300_000.015, 0.2, CANVAS);
    assert_ne!(a, b);
}

#[test]
fn smoothing_endpoints() {
    let a = Vec2::new(1.0, -2.0);
    let b = Vec2::new(5.0, 4.0);
    assert_eq!(ease_toward(a, b, 0.0), a);
    assert_eq!(ease_toward(a, b, 1.0), b);
}

#[test]
fn auto_orbit_circles_canvas_center() {
    let t0 = auto_orbit_target(0.0, 0.2, CANVAS);
    assert_eq!(t0, Vec2::new(400.0 + 120.0, 300.0));
    let quarter = std::f64::consts::FRAC_PI_2 / 0.2_f32 as f64;
    let t1 = auto_orbit_target(quarter, 0.2, CANVAS);
    assert!((t1 - Vec2::new(400.0, 300.0 + 90.0)).length() < 1e-3);
}

#[test]
fn pointer_is_flipped_to_bottom_origin() {
    assert_eq!(pointer_to_canvas(0.0, 0.0, CANVAS), Vec2::new(0.0, 600.0));
    assert_eq!(pointer_to_canvas(1.0, 1.0, CANVAS), Vec2::new(800.0, 0.0));
    assert_eq!(pointer_to_canvas(0.25, 0.5, CANVAS), Vec2::new(200.0, 300.0));
}

#[test]
fn cursor_follows_pointer_while_inside() {
    let cfg = EffectConfig {
        hover_smoothness: 1.0,
        ..EffectConfig::default()
    };
    let mut sim = Simulation::new(&cfg);
    sim.apply_pointer(
        PointerSignal {
            inside: true,
            normalized_x: 0.5,
            normalized_y: 0.25,
        },
        CANVAS,
    );
    sim.step(1.0, &cfg, CANVAS);
    assert_eq!(sim.cursor(), Vec2::new(400.0, 450.0));

    sim.apply_pointer(PointerSignal::default(), CANVAS);
    assert!(!sim.pointer_inside());
    sim.step(1.0, &cfg, CANVAS);
    let orbit = auto_orbit_target(1.0, cfg.speed, CANVAS);
    assert!((sim.cursor() - orbit).length() < 1e-3);
}

#[test]
fn cursor_starts_at_origin_and_eases() {
    let cfg = EffectConfig::default();
    let mut sim = Simulation::new(&cfg);
    assert_eq!(sim.cursor(), Vec2::ZERO);
    sim.step(0.0, &cfg, CANVAS);
    let expected = ease_toward(
        Vec2::ZERO,
        auto_orbit_target(0.0, cfg.speed, CANVAS),
        cfg.hover_smoothness,
    );
    assert_eq!(sim.cursor(), expected);
}
