#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;
use crate::consts::{DRIFTING_OPACITY, STATIC_OPACITY};
use crate::geom::Vec2;

fn heart(x: f64, y: f64, vx: f64, vy: f64, is_static: bool) -> Heart {
    Heart {
        position: Vec2::new(x, y),
        velocity: Vec2::new(vx, vy),
        size: 15.0,
        opacity: if is_static { STATIC_OPACITY } else { DRIFTING_OPACITY },
        is_static,
    }
}

fn bounds() -> Size {
    Size::new(800.0, 600.0)
}

// =============================================================
// Population
// =============================================================

#[test]
fn new_field_has_fixed_population_with_static_prefix() {
    let mut rng = SmallRng::seed_from_u64(1);
    let field = HeartField::new(&mut rng, bounds());
    assert_eq!(field.hearts().len(), HEART_COUNT);
    let statics = field.hearts().iter().filter(|h| h.is_static).count();
    assert_eq!(statics, STATIC_HEART_COUNT);
    assert!(field.hearts()[..STATIC_HEART_COUNT].iter().all(|h| h.is_static));
}

#[test]
fn same_seed_produces_same_field() {
    let a = HeartField::new(&mut SmallRng::seed_from_u64(9), bounds());
    let b = HeartField::new(&mut SmallRng::seed_from_u64(9), bounds());
    assert_eq!(a.hearts(), b.hearts());
}

// =============================================================
// Collisions
// =============================================================

#[test]
fn colliding_movers_exchange_velocities() {
    let mut field = HeartField::with_hearts(
        vec![heart(100.0, 100.0, 0.2, 0.0, false), heart(110.0, 100.0, -0.1, 0.05, false)],
        bounds(),
    );
    field.step();
    assert_eq!(field.hearts()[0].velocity, Vec2::new(-0.1, 0.05));
    assert_eq!(field.hearts()[1].velocity, Vec2::new(0.2, 0.0));
}

#[test]
fn static_heart_reflects_mover() {
    let mut field = HeartField::with_hearts(
        vec![heart(100.0, 100.0, 0.0, 0.0, true), heart(105.0, 100.0, -0.2, 0.1, false)],
        bounds(),
    );
    field.step();
    assert_eq!(field.hearts()[0].velocity, Vec2::default());
    assert_eq!(field.hearts()[1].velocity, Vec2::new(0.2, -0.1));
}

#[test]
fn mover_listed_before_static_heart_is_reflected() {
    let mut field = HeartField::with_hearts(
        vec![heart(105.0, 100.0, -0.2, 0.1, false), heart(100.0, 100.0, 0.0, 0.0, true)],
        bounds(),
    );
    field.step();
    assert_eq!(field.hearts()[0].velocity, Vec2::new(0.2, -0.1));
    assert_eq!(field.hearts()[1].position, Vec2::new(100.0, 100.0));
}

#[test]
fn distant_hearts_keep_their_velocities() {
    let mut field = HeartField::with_hearts(
        vec![heart(100.0, 100.0, 0.2, 0.0, false), heart(400.0, 300.0, -0.1, 0.05, false)],
        bounds(),
    );
    field.step();
    assert_eq!(field.hearts()[0].velocity, Vec2::new(0.2, 0.0));
    assert_eq!(field.hearts()[1].velocity, Vec2::new(-0.1, 0.05));
}

#[test]
fn positions_update_before_collision_check() {
    // 20.2 apart before the step, 19.8 after both move inward.
    let mut field = HeartField::with_hearts(
        vec![heart(100.0, 100.0, 0.2, 0.0, false), heart(120.2, 100.0, -0.2, 0.0, false)],
        bounds(),
    );
    field.step();
    assert_eq!(field.hearts()[0].velocity, Vec2::new(-0.2, 0.0));
    assert_eq!(field.hearts()[1].velocity, Vec2::new(0.2, 0.0));
}

// =============================================================
// Resize
// =============================================================

#[test]
fn resize_keeps_positions() {
    let mut field = HeartField::with_hearts(vec![heart(700.0, 500.0, 0.0, 0.0, true)], bounds());
    field.resize(Size::new(320.0, 240.0));
    assert_eq!(field.bounds(), Size::new(320.0, 240.0));
    assert_eq!(field.hearts()[0].position, Vec2::new(700.0, 500.0));
}

#[test]
fn long_run_keeps_population_and_static_hearts_fixed() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut field = HeartField::new(&mut rng, bounds());
    let pinned = field.hearts()[..STATIC_HEART_COUNT].to_vec();
    for _ in 0..1_000 {
        field.step();
    }
    assert_eq!(field.hearts().len(), HEART_COUNT);
    for (before, after) in pinned.iter().zip(field.hearts()) {
        assert_eq!(before.position, after.position);
    }
}
