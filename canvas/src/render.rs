//! Rendering: draws the heart field to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It reads the field and produces pixels; it never mutates simulation state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The caller ([`crate::engine::Engine::frame`]) converts them.

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::TOP_CURVE_RATIO;
use crate::field::HeartField;
use crate::heart::Heart;

/// Clear the surface and draw every heart.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, field: &HeartField) -> Result<(), JsValue> {
    let bounds = field.bounds();
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height);
    for heart in field.hearts() {
        draw_heart(ctx, heart);
    }
    Ok(())
}

/// Trace a heart from four bezier segments: left lobe, left flank, right
/// flank, right lobe.
fn draw_heart(ctx: &CanvasRenderingContext2d, heart: &Heart) {
    let x = heart.position.x;
    let y = heart.position.y;
    let size = heart.size;
    let half = size / 2.0;
    let top = size * TOP_CURVE_RATIO;
    let waist = y + (size + top) / 2.0;

    ctx.save();
    ctx.begin_path();
    ctx.move_to(x, y + top);
    ctx.bezier_curve_to(x, y, x - half, y, x - half, y + top);
    ctx.bezier_curve_to(x - half, waist, x, waist, x, y + size);
    ctx.bezier_curve_to(x, waist, x + half, waist, x + half, y + top);
    ctx.bezier_curve_to(x + half, y, x, y, x, y + top);
    ctx.close_path();
    ctx.set_fill_style_str(&heart.fill_style());
    ctx.fill();
    ctx.restore();
}
