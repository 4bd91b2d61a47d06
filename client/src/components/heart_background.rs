//! Bridge between the page and the imperative heart-field animation.
//!
//! The canvas crate owns simulation and drawing. This host only creates the
//! element, starts a [`FrameLoop`] once the node exists, and cancels it when
//! the owning page is torn down.

use canvas::engine::{Engine, FrameLoop};
use leptos::prelude::*;

/// Seed the simulation from the browser RNG.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn random_seed() -> u64 {
    (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64
}

#[component]
pub fn HeartBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let frame_loop = StoredValue::new_local(None::<FrameLoop>);

    Effect::new(move || {
        let Some(element) = canvas_ref.get() else {
            return;
        };
        if frame_loop.with_value(Option::is_some) {
            return;
        }
        let started = Engine::new(element, random_seed()).and_then(FrameLoop::start);
        match started {
            Ok(running) => frame_loop.set_value(Some(running)),
            Err(err) => log::warn!("heart animation disabled: {err}"),
        }
    });

    on_cleanup(move || {
        frame_loop.update_value(|slot| {
            if let Some(running) = slot.take() {
                running.cancel();
            }
        });
    });

    view! { <canvas id="background-canvas" class="background-canvas" node_ref=canvas_ref></canvas> }
}
