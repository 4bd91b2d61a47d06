use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::field::HeartField;
use crate::geom::Size;
use crate::render;

/// Errors raised while binding to or drawing on the browser canvas.
#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("2d rendering context is unavailable")]
    NoContext,
    #[error("canvas call failed: {0}")]
    Js(String),
}

impl From<JsValue> for CanvasError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

/// The canvas engine: a heart field bound to a `<canvas>` element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub field: HeartField,
}

impl Engine {
    /// Bind to `canvas`, size it to the viewport and seed a new field.
    ///
    /// # Errors
    ///
    /// Fails when there is no window or the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, seed: u64) -> Result<Self, CanvasError> {
        let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or(CanvasError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::NoContext)?;

        let bounds = viewport_size(&window);
        apply_surface_size(&canvas, bounds);
        let mut rng = SmallRng::seed_from_u64(seed);
        let field = HeartField::new(&mut rng, bounds);
        Ok(Self { canvas, ctx, field })
    }

    /// Re-fit the drawing surface to the current viewport.
    pub fn fit_to_window(&mut self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let bounds = viewport_size(&window);
        apply_surface_size(&self.canvas, bounds);
        self.field.resize(bounds);
    }

    /// Step the simulation once and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if drawing fails.
    pub fn frame(&mut self) -> Result<(), CanvasError> {
        self.field.step();
        render::draw(&self.ctx, &self.field)?;
        Ok(())
    }
}

fn viewport_size(window: &Window) -> Size {
    let width = window.inner_width().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    let height = window.inner_height().map_or(0.0, |v| v.as_f64().unwrap_or(0.0));
    Size::new(width, height)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn apply_surface_size(canvas: &HtmlCanvasElement, bounds: Size) {
    canvas.set_width(bounds.width.round() as u32);
    canvas.set_height(bounds.height.round() as u32);
}

type FrameCallback = Closure<dyn FnMut(f64)>;
type ResizeCallback = Closure<dyn FnMut()>;

struct LoopShared {
    engine: RefCell<Engine>,
    frame_id: Cell<Option<i32>>,
    cancelled: Cell<bool>,
    on_frame: RefCell<Option<FrameCallback>>,
    on_resize: RefCell<Option<ResizeCallback>>,
}

impl LoopShared {
    fn schedule(&self) {
        if self.cancelled.get() {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let on_frame = self.on_frame.borrow();
        let Some(cb) = on_frame.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => self.frame_id.set(Some(id)),
            Err(e) => log::warn!("heart animation could not schedule a frame: {e:?}"),
        }
    }

    fn tick(&self) {
        if self.cancelled.get() {
            return;
        }
        if let Err(e) = self.engine.borrow_mut().frame() {
            log::warn!("heart animation frame failed: {e}");
        }
        self.schedule();
    }
}

/// A running animation: one frame per `requestAnimationFrame` tick until
/// cancelled.
///
/// The loop stops scheduling, cancels any pending frame and removes its
/// resize listener on [`FrameLoop::cancel`] or when the handle is dropped.
pub struct FrameLoop {
    shared: Rc<LoopShared>,
}

impl FrameLoop {
    /// Start animating `engine`.
    ///
    /// # Errors
    ///
    /// Fails when there is no window or the resize listener cannot be added.
    pub fn start(engine: Engine) -> Result<Self, CanvasError> {
        let window = web_sys::window().ok_or(CanvasError::NoWindow)?;
        let shared = Rc::new(LoopShared {
            engine: RefCell::new(engine),
            frame_id: Cell::new(None),
            cancelled: Cell::new(false),
            on_frame: RefCell::new(None),
            on_resize: RefCell::new(None),
        });

        let weak: Weak<LoopShared> = Rc::downgrade(&shared);
        let on_frame = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(shared) = weak.upgrade() {
                shared.tick();
            }
        }) as Box<dyn FnMut(f64)>);
        *shared.on_frame.borrow_mut() = Some(on_frame);

        let weak: Weak<LoopShared> = Rc::downgrade(&shared);
        let on_resize = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                shared.engine.borrow_mut().fit_to_window();
            }
        }) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
        *shared.on_resize.borrow_mut() = Some(on_resize);

        shared.schedule();
        Ok(Self { shared })
    }

    /// Stop the loop and release its browser callbacks. Idempotent.
    pub fn cancel(&self) {
        if self.shared.cancelled.replace(true) {
            return;
        }
        if let Some(window) = web_sys::window() {
            if let Some(id) = self.shared.frame_id.take() {
                if let Err(e) = window.cancel_animation_frame(id) {
                    log::warn!("heart animation could not cancel frame {id}: {e:?}");
                }
            }
            if let Some(cb) = self.shared.on_resize.borrow().as_ref() {
                if let Err(e) = window.remove_event_listener_with_callback("resize", cb.as_ref().unchecked_ref()) {
                    log::warn!("heart animation could not remove resize listener: {e:?}");
                }
            }
        }
        self.shared.on_frame.borrow_mut().take();
        self.shared.on_resize.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
