//! Decorative heart-field animation for the questionnaire background.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The
//! simulation itself ([`field::HeartField`]) is plain Rust and is tested on
//! the host; only [`render`] and [`engine`] touch `web-sys`. The host UI owns
//! a [`engine::FrameLoop`] handle and drops it to stop the animation.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-bound engine and the cancellable frame loop |
//! | [`field`] | Heart collection, per-frame stepping, collision response |
//! | [`heart`] | A single heart: spawn, motion, edge reflection |
//! | [`geom`] | Vector and viewport size types |
//! | [`render`] | Draws the field to a 2D context |
//! | [`consts`] | Heart counts, size ranges, colors |

pub mod consts;
pub mod engine;
pub mod field;
pub mod geom;
pub mod heart;
pub mod render;
