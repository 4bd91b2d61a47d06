#[cfg(test)]
#[path = "heart_test.rs"]
mod heart_test;

use rand::Rng;

use crate::consts::{
    COLLISION_DIVISOR, DRIFTING_OPACITY, HEART_RGB, HEART_SIZE_SPAN, MIN_HEART_SIZE, STATIC_OPACITY, VELOCITY_SPAN,
};
use crate::geom::{Size, Vec2};

/// One heart in the background field.
///
/// `position` is the top-center point of the shape; the heart extends
/// `size` pixels downward and `size / 2` to each side.
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f64,
    pub opacity: f64,
    pub is_static: bool,
}

impl Heart {
    /// Spawn a heart at a random point inside `bounds`.
    ///
    /// Static hearts get zero velocity and a stronger fill.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, bounds: Size, is_static: bool) -> Self {
        let position = Vec2::new(rng.random::<f64>() * bounds.width, rng.random::<f64>() * bounds.height);
        let size = rng.random::<f64>() * HEART_SIZE_SPAN + MIN_HEART_SIZE;
        let velocity = if is_static {
            Vec2::default()
        } else {
            Vec2::new(
                (rng.random::<f64>() - 0.5) * VELOCITY_SPAN,
                (rng.random::<f64>() - 0.5) * VELOCITY_SPAN,
            )
        };
        let opacity = if is_static { STATIC_OPACITY } else { DRIFTING_OPACITY };
        Self { position, velocity, size, opacity, is_static }
    }

    /// Move one frame and reflect off the edges of `bounds`.
    ///
    /// Reflection points the velocity back inward rather than flipping it,
    /// so a heart left outside after the surface shrinks walks back in
    /// instead of oscillating on the edge.
    pub fn advance(&mut self, bounds: Size) {
        if self.is_static {
            return;
        }
        self.position = self.position + self.velocity;

        if self.position.x < 0.0 {
            self.velocity.x = self.velocity.x.abs();
        } else if self.position.x > bounds.width {
            self.velocity.x = -self.velocity.x.abs();
        }
        if self.position.y < 0.0 {
            self.velocity.y = self.velocity.y.abs();
        } else if self.position.y > bounds.height {
            self.velocity.y = -self.velocity.y.abs();
        }
    }

    #[must_use]
    pub fn collision_radius(&self) -> f64 {
        self.size / COLLISION_DIVISOR
    }

    /// Whether the collision circles of two hearts intersect.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.position.distance(other.position) < self.collision_radius() + other.collision_radius()
    }

    /// CSS fill color including this heart's opacity.
    #[must_use]
    pub fn fill_style(&self) -> String {
        let (r, g, b) = HEART_RGB;
        format!("rgba({r}, {g}, {b}, {})", self.opacity)
    }
}
