use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use crate::domain::config::IntroConfig;
use crate::simulation::VisualState;

/// Every inline property the intro writes; cleared again on handoff
const FLIGHT_PROPERTIES: [&str; 7] = [
    "position",
    "left",
    "top",
    "transform",
    "opacity",
    "z-index",
    "transition",
];

/// Detach an icon from flow layout so it can be moved every frame
pub(crate) fn prepare_for_flight(el: &HtmlElement, config: &IntroConfig) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("position", "fixed")?;
    style.set_property("opacity", "1")?;
    style.set_property("z-index", &config.z_index.to_string())?;
    style.set_property("transition", "none")?;
    Ok(())
}

pub(crate) fn apply_visual(el: &HtmlElement, visual: &VisualState) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("left", &format!("{}px", visual.left))?;
    style.set_property("top", &format!("{}px", visual.top))?;
    style.set_property("transform", &visual.transform())?;
    style.set_property("opacity", &visual.opacity.to_string())?;
    Ok(())
}

pub(crate) fn start_fade_out(el: &HtmlElement, fade_out_ms: i32) -> Result<(), JsValue> {
    let style = el.style();
    style.set_property("transition", &format!("opacity {}ms ease", fade_out_ms))?;
    style.set_property("opacity", "0")?;
    Ok(())
}

/// Hand the icon back to CSS layout and switch on the idle float
pub(crate) fn return_to_layout(el: &HtmlElement, float_class: &str) -> Result<(), JsValue> {
    let style = el.style();
    for name in FLIGHT_PROPERTIES {
        style.remove_property(name)?;
    }
    el.class_list().add_1(float_class)?;
    Ok(())
}
