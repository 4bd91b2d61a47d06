//! Shared numeric constants for the canvas crate.

// ── Population ──────────────────────────────────────────────────

/// Total number of hearts in the field.
pub const HEART_COUNT: usize = 30;

/// The first `STATIC_HEART_COUNT` hearts never move.
pub const STATIC_HEART_COUNT: usize = 5;

// ── Shape ───────────────────────────────────────────────────────

/// Smallest heart size in CSS pixels.
pub const MIN_HEART_SIZE: f64 = 10.0;

/// Random size span added on top of [`MIN_HEART_SIZE`].
pub const HEART_SIZE_SPAN: f64 = 20.0;

/// Fraction of the heart size taken by the top lobes.
pub const TOP_CURVE_RATIO: f64 = 0.3;

// ── Motion ──────────────────────────────────────────────────────

/// Maximum speed per axis is half of this value, in pixels per frame.
pub const VELOCITY_SPAN: f64 = 0.5;

/// Collision radius is `size / COLLISION_DIVISOR`.
pub const COLLISION_DIVISOR: f64 = 1.5;

// ── Color ───────────────────────────────────────────────────────

pub const STATIC_OPACITY: f64 = 0.3;
pub const DRIFTING_OPACITY: f64 = 0.15;

/// RGB channels of the heart fill.
pub const HEART_RGB: (u8, u8, u8) = (224, 74, 149);
