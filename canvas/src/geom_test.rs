#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn vec2_arithmetic() {
    let a = Vec2::new(1.0, 2.0);
    let b = Vec2::new(4.0, 6.0);
    assert_eq!(a + b, Vec2::new(5.0, 8.0));
    assert_eq!(b - a, Vec2::new(3.0, 4.0));
    assert_eq!(-a, Vec2::new(-1.0, -2.0));
}

#[test]
fn vec2_distance_is_euclidean() {
    let a = Vec2::new(0.0, 0.0);
    let b = Vec2::new(3.0, 4.0);
    assert_eq!(a.distance(b), 5.0);
    assert_eq!(b.distance(a), 5.0);
}

#[test]
fn size_clamps_negative_dimensions() {
    let size = Size::new(-10.0, 20.0);
    assert_eq!(size.width, 0.0);
    assert_eq!(size.height, 20.0);
}
