// Host-side tests for the particle field: population, motion and wrapping.

mod common;

use common::core::constants::*;
use common::core::field::*;
use common::core::particle::*;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn assert_in_wrap_box(field: &ParticleField) {
    let (w, h) = (field.width(), field.height());
    for (i, p) in field.particles().iter().enumerate() {
        assert!(
            p.pos.x >= -WRAP_MARGIN && p.pos.x <= w + WRAP_MARGIN,
            "particle {i} x={} outside [-80, {}]",
            p.pos.x,
            w + WRAP_MARGIN
        );
        assert!(
            p.pos.y >= -WRAP_MARGIN && p.pos.y <= h + WRAP_MARGIN,
            "particle {i} y={} outside [-80, {}]",
            p.pos.y,
            h + WRAP_MARGIN
        );
    }
}

fn still_particle(pos: DVec2, vel: DVec2) -> Particle {
    Particle {
        pos,
        vel,
        size: 12.0,
        alpha: 0.3,
        label: 'A',
        hue: 10,
        wobble: 0.0,
        rot: 0.0,
    }
}

#[test]
fn particle_count_matches_density_formula() {
    assert_eq!(particle_count(800, 800), 40);
    assert_eq!(particle_count(2000, 2000), 40);
    assert_eq!(particle_count(4000, 4000), 133);
    assert_eq!(particle_count(6000, 4000), 200);
    assert_eq!(particle_count(1920, 1080), 40);
}

#[test]
fn particle_count_floor_applies_to_degenerate_viewports() {
    assert_eq!(particle_count(0, 0), MIN_PARTICLES);
    assert_eq!(particle_count(1, 1), MIN_PARTICLES);
    assert_eq!(particle_count(0, 10_000), MIN_PARTICLES);
}

#[test]
fn particle_count_rounds_to_nearest() {
    // 5_460_000 / 120_000 = 45.5 -> 46; 5_340_000 / 120_000 = 44.5 -> 45
    assert_eq!(particle_count(5460, 1000), 46);
    assert_eq!(particle_count(5340, 1000), 45);
    // 5_400_000 / 120_000 = 45.0
    assert_eq!(particle_count(5400, 1000), 45);
}

#[test]
fn custom_config_controls_population() {
    let config = FieldConfig {
        min_particles: 3,
        area_per_particle: 1000.0,
        phase_step: 0.5,
    };
    assert_eq!(config.particle_count(100, 100), 10);
    assert_eq!(config.particle_count(10, 10), 3);

    let mut field = ParticleField::with_config(100, 100, config, StdRng::seed_from_u64(1));
    assert_eq!(field.len(), 10);
    field.update();
    field.update();
    assert!((field.phase() - 1.0).abs() < 1e-12);
}

#[test]
fn new_field_draws_from_documented_ranges() {
    let field = ParticleField::new(1280, 720, 42);
    assert_eq!(field.len(), particle_count(1280, 720));
    assert!(!field.is_empty());
    assert_eq!(field.phase(), 0.0);
    for p in field.particles() {
        assert!(p.pos.x >= -SPAWN_MARGIN && p.pos.x < 1280.0 + SPAWN_MARGIN);
        assert!(p.pos.y >= -SPAWN_MARGIN && p.pos.y < 720.0 + SPAWN_MARGIN);
        assert!(p.vel.x >= VELOCITY_X_RANGE.0 && p.vel.x < VELOCITY_X_RANGE.1);
        assert!(p.vel.y >= VELOCITY_Y_RANGE.0 && p.vel.y < VELOCITY_Y_RANGE.1);
        assert!(p.size >= SIZE_RANGE.0 && p.size < SIZE_RANGE.1);
        assert!(p.alpha >= ALPHA_RANGE.0 && p.alpha < ALPHA_RANGE.1);
        assert!(p.wobble >= WOBBLE_RANGE.0 && p.wobble < WOBBLE_RANGE.1);
        assert!(p.rot >= 0.0 && p.rot < std::f64::consts::TAU);
        assert!(p.hue < HUE_MAX);
        assert!(GLYPHS.contains(&(p.label as u8)), "unexpected label {:?}", p.label);
    }
}

#[test]
fn same_seed_gives_same_field() {
    let mut a = ParticleField::new(900, 600, 7);
    let mut b = ParticleField::new(900, 600, 7);
    for _ in 0..50 {
        a.update();
        b.update();
    }
    assert_eq!(a.particles(), b.particles());
}

#[test]
fn update_advances_phase_by_fixed_step() {
    let mut field = ParticleField::new(800, 600, 3);
    for _ in 0..100 {
        field.update();
    }
    assert!((field.phase() - 100.0 * PHASE_STEP).abs() < 1e-9);
}

#[test]
fn update_applies_drift_plus_wobble() {
    let mut field = ParticleField::new(800, 600, 11);
    let before = field.particles().to_vec();
    field.update();
    let phase = field.phase();
    for (old, new) in before.iter().zip(field.particles()) {
        let angle = phase * old.wobble + old.rot;
        let expect_x = wrap_coord(
            old.pos.x + old.vel.x + angle.sin() * WOBBLE_AMPLITUDE_X,
            800.0,
        );
        let expect_y = wrap_coord(
            old.pos.y + old.vel.y + angle.cos() * WOBBLE_AMPLITUDE_Y,
            600.0,
        );
        assert!((new.pos.x - expect_x).abs() < 1e-9);
        assert!((new.pos.y - expect_y).abs() < 1e-9);
        assert_eq!(new.vel, old.vel);
        assert_eq!(new.size, old.size);
        assert_eq!(new.label, old.label);
        assert_eq!(new.hue, old.hue);
    }
}

#[test]
fn particles_stay_in_wrap_box_over_time() {
    for &(w, h) in &[(800, 600), (1920, 1080), (320, 480), (1, 1), (0, 0)] {
        let mut field = ParticleField::new(w, h, 99);
        assert_in_wrap_box(&field);
        for _ in 0..5000 {
            field.update();
            assert_in_wrap_box(&field);
        }
    }
}

#[test]
fn wrap_coord_teleports_to_opposite_margin() {
    assert_eq!(wrap_coord(-80.5, 800.0), 880.0);
    assert_eq!(wrap_coord(880.5, 800.0), -80.0);
    // boundaries are inside the band
    assert_eq!(wrap_coord(-80.0, 800.0), -80.0);
    assert_eq!(wrap_coord(880.0, 800.0), 880.0);
    assert_eq!(wrap_coord(400.0, 800.0), 400.0);
}

#[test]
fn wrapping_is_independent_per_axis() {
    // wobble=0, rot=0: x moves by vel.x, y by vel.y + 0.35
    let mut p = still_particle(DVec2::new(-79.9, 50.0), DVec2::new(-1.0, 0.0));
    p.step(0.01, 800.0, 600.0);
    assert_eq!(p.pos.x, 880.0);
    assert!((p.pos.y - 50.35).abs() < 1e-12);

    let mut q = still_particle(DVec2::new(300.0, 679.9), DVec2::new(0.0, 1.0));
    q.step(0.01, 800.0, 600.0);
    assert!((q.pos.x - 300.0).abs() < 1e-12);
    assert_eq!(q.pos.y, -80.0);
}

#[test]
fn resize_rebuilds_collection_for_new_viewport() {
    let mut field = ParticleField::new(800, 800, 5);
    for _ in 0..10 {
        field.update();
    }
    let phase = field.phase();
    let old_positions: Vec<DVec2> = field.particles().iter().map(|p| p.pos).collect();

    field.resize(4000, 4000);
    assert_eq!(field.len(), 133);
    assert_eq!(field.width(), 4000.0);
    assert_eq!(field.height(), 4000.0);
    assert_eq!(field.phase(), phase);
    for p in field.particles() {
        assert!(!old_positions.contains(&p.pos));
        assert!(p.pos.x < 4000.0 + SPAWN_MARGIN && p.pos.y < 4000.0 + SPAWN_MARGIN);
    }

    field.resize(800, 800);
    assert_eq!(field.len(), 40);
}

#[test]
fn resize_to_same_size_still_respawns() {
    let mut field = ParticleField::new(1024, 768, 8);
    let before = field.particles().to_vec();
    field.resize(1024, 768);
    assert_eq!(field.len(), before.len());
    assert_ne!(field.particles(), &before[..]);
}

#[test]
fn randomize_labels_only_touches_label_and_hue() {
    let mut field = ParticleField::new(1600, 1200, 21);
    field.update();
    let before = field.particles().to_vec();

    field.randomize_labels();
    let after = field.particles();
    assert_eq!(after.len(), before.len());
    for (old, new) in before.iter().zip(after) {
        assert_eq!(new.pos, old.pos);
        assert_eq!(new.vel, old.vel);
        assert_eq!(new.size, old.size);
        assert_eq!(new.alpha, old.alpha);
        assert_eq!(new.wobble, old.wobble);
        assert_eq!(new.rot, old.rot);
        assert!(GLYPHS.contains(&(new.label as u8)));
        assert!(new.hue < HUE_MAX);
    }

    let old_labels: Vec<(char, u32)> = before.iter().map(|p| (p.label, p.hue)).collect();
    let new_labels: Vec<(char, u32)> = after.iter().map(|p| (p.label, p.hue)).collect();
    assert_ne!(old_labels, new_labels);
    // a redraw can land on the same value; most should not
    let unchanged = old_labels
        .iter()
        .zip(&new_labels)
        .filter(|(a, b)| a == b)
        .count();
    assert!(unchanged < before.len() / 4, "{unchanged} particles kept label and hue");
}

#[test]
fn glyph_sizing_helpers() {
    let mut p = still_particle(DVec2::ZERO, DVec2::ZERO);
    p.size = 20.0;
    assert_eq!(p.font_px(), 20.0);
    assert_eq!(p.shadow_blur(), 16.0);
    assert!((p.glow_radius() - 48.0).abs() < 1e-12);

    p.size = 5.0;
    assert_eq!(p.font_px(), GLYPH_MIN_FONT_PX);
    assert_eq!(p.shadow_blur(), SHADOW_BLUR_MIN);

    p.size = 12.6;
    assert_eq!(p.font_px(), 13.0);
}

#[test]
fn tilt_is_bounded() {
    let field = ParticleField::new(800, 600, 17);
    for p in field.particles() {
        for i in 0..200 {
            let t = p.tilt(i as f64 * 0.1);
            assert!(t.abs() <= GLYPH_TILT_MAX + 1e-12);
        }
    }
}
