use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::systems::counter::{parse_count, render_count, CounterAnimation};

fn counter_element(element_id: &str) -> Result<HtmlElement, JsValue> {
    let window = super::window()?;
    let document = super::document(&window)?;
    let el = document
        .get_element_by_id(element_id)
        .ok_or_else(|| JsValue::from_str(&format!("counter #{} not found", element_id)))?;
    el.dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("counter #{} is not an HTML element", element_id)))
}

fn current_count(el: &HtmlElement) -> Result<u64, JsValue> {
    let text = el.text_content().unwrap_or_default();
    parse_count(&text).map_err(|e| JsValue::from_str(&e))
}

fn run_counter(el: HtmlElement, anim: CounterAnimation) -> Result<(), JsValue> {
    let window = super::window()?;
    let clock = window.clone();
    let started_at = super::now_ms(&window);

    super::run_frame_loop(&window, move || {
        let elapsed = super::now_ms(&clock) - started_at;
        el.set_inner_html(&render_count(anim.value(elapsed)));
        !anim.is_finished(elapsed)
    })
}

/// Roll the displayed count from its current value to `end`
#[wasm_bindgen]
pub fn animate_counter(element_id: &str, end: u32) -> Result<(), JsValue> {
    let el = counter_element(element_id)?;
    let start = current_count(&el)?;
    run_counter(el, CounterAnimation::new(start, end as u64))
}

/// Bump the displayed count by one, as after a successful signup
#[wasm_bindgen]
pub fn increment_counter(element_id: &str) -> Result<(), JsValue> {
    let el = counter_element(element_id)?;
    let start = current_count(&el)?;
    run_counter(el, CounterAnimation::new(start, start + 1))
}
