//! The heart field: a fixed population stepped once per animation frame.
//!
//! Separated from [`crate::engine::Engine`] so the whole simulation can be
//! tested without a browser.

#[cfg(test)]
#[path = "field_test.rs"]
mod field_test;

use rand::Rng;

use crate::consts::{HEART_COUNT, STATIC_HEART_COUNT};
use crate::geom::Size;
use crate::heart::Heart;

#[derive(Debug, Clone, Default)]
pub struct HeartField {
    hearts: Vec<Heart>,
    bounds: Size,
}

impl HeartField {
    /// Populate a field of [`HEART_COUNT`] hearts, the first
    /// [`STATIC_HEART_COUNT`] of them pinned in place.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, bounds: Size) -> Self {
        let hearts = (0..HEART_COUNT)
            .map(|i| Heart::random(rng, bounds, i < STATIC_HEART_COUNT))
            .collect();
        Self::with_hearts(hearts, bounds)
    }

    /// Build a field from explicit hearts.
    #[must_use]
    pub fn with_hearts(hearts: Vec<Heart>, bounds: Size) -> Self {
        Self { hearts, bounds }
    }

    #[must_use]
    pub fn hearts(&self) -> &[Heart] {
        &self.hearts
    }

    #[must_use]
    pub fn bounds(&self) -> Size {
        self.bounds
    }

    /// Change the drawing surface. Heart positions are not rescaled.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Advance one frame: move every heart, then resolve collisions.
    pub fn step(&mut self) {
        let bounds = self.bounds;
        for heart in &mut self.hearts {
            heart.advance(bounds);
        }
        self.resolve_collisions();
    }

    /// Pairwise collision pass over all hearts.
    ///
    /// A static heart reverses the mover that touches it; two movers swap
    /// velocities. Two static hearts are left alone.
    fn resolve_collisions(&mut self) {
        let count = self.hearts.len();
        for i in 0..count {
            for j in (i + 1)..count {
                let (head, tail) = self.hearts.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];
                if a.overlaps(b) {
                    bounce(a, b);
                }
            }
        }
    }
}

fn bounce(a: &mut Heart, b: &mut Heart) {
    match (a.is_static, b.is_static) {
        (true, true) => {}
        (true, false) => b.velocity = -b.velocity,
        (false, true) => a.velocity = -a.velocity,
        (false, false) => std::mem::swap(&mut a.velocity, &mut b.velocity),
    }
}
