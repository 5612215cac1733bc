//! Browser adapter
//!
//! Everything here talks to the DOM and only exists on `wasm32`. The
//! simulation types it drives are plain Rust and are tested natively.

mod counter;
mod glow;
mod intro;
mod style;

pub use counter::{animate_counter, increment_counter};
pub use glow::start_ambient_glow;
pub use intro::start_scatter_intro;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Window};

pub(crate) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no window"))
}

pub(crate) fn document(window: &Window) -> Result<Document, JsValue> {
    window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// `innerWidth` / `innerHeight`
pub(crate) fn viewport_size(window: &Window) -> Result<(f32, f32), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as f32, height as f32))
}

pub(crate) fn request_animation_frame(window: &Window, f: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window.request_animation_frame(f.as_ref().unchecked_ref())
}

/// Call `frame` once per display frame until it returns false
pub(crate) fn run_frame_loop<F>(window: &Window, mut frame: F) -> Result<(), JsValue>
where
    F: FnMut() -> bool + 'static,
{
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let win = window.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame() {
            // Dropping the closure breaks the Rc cycle and ends the loop
            drop(next.borrow_mut().take());
            return;
        }
        if let Some(cb) = next.borrow().as_ref() {
            if let Err(e) = request_animation_frame(&win, cb) {
                console_warn!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }) as Box<dyn FnMut()>));

    let first = slot.borrow();
    match first.as_ref() {
        Some(cb) => request_animation_frame(window, cb).map(|_| ()),
        None => Ok(()),
    }
}

/// Run `f` once after `delay_ms`
pub(crate) fn set_timeout<F>(window: &Window, delay_ms: i32, f: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let callback = Closure::once_into_js(f);
    window.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
}

/// `performance.now()`, falling back to `Date.now()` where it is missing
pub(crate) fn now_ms(window: &Window) -> f64 {
    window
        .performance()
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}
