use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::domain::config::IntroConfig;
use crate::domain::particle::IconSlot;
use crate::domain::phase::Phase;
use crate::simulation::{FrameReport, IntroCore};

use super::style;

/// One running intro: the simulation plus the elements it drives, in the same order
struct IntroRun {
    core: IntroCore,
    elements: Vec<HtmlElement>,
}

impl IntroRun {
    fn tick(&mut self) -> Result<FrameReport, JsValue> {
        let report = self.core.advance_frame();
        if report.phase != Phase::Complete {
            self.push_visuals()?;
        }
        Ok(report)
    }

    fn push_visuals(&self) -> Result<(), JsValue> {
        for (el, visual) in self.elements.iter().zip(self.core.visual_states()) {
            style::apply_visual(el, &visual)?;
        }
        Ok(())
    }

    /// Fade every icon out, then give each back to layout on a stagger
    fn hand_off(&self, window: &Window) -> Result<(), JsValue> {
        let config = self.core.config();
        for (i, el) in self.elements.iter().enumerate() {
            style::start_fade_out(el, config.fade_out_ms)?;

            let delay = config.fade_out_ms + config.cleanup_stagger_ms * i as i32;
            let el = el.clone();
            let float_class = config.float_class.clone();
            super::set_timeout(window, delay, move || {
                if let Err(e) = style::return_to_layout(&el, &float_class) {
                    console_warn!("intro cleanup failed: {:?}", e);
                }
            })?;
        }
        Ok(())
    }
}

/// Scatter every element matching `selector` in from the viewport edges and
/// settle it onto its layout slot. `config_json` optionally overrides tuning.
#[wasm_bindgen]
pub fn start_scatter_intro(selector: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let window = super::window()?;
    let document = super::document(&window)?;

    let config = match config_json.as_deref() {
        Some(json) => IntroConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?,
        None => IntroConfig::default(),
    };

    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(node) = nodes.item(i) else { continue };
        match node.dyn_into::<HtmlElement>() {
            Ok(el) => elements.push(el),
            Err(node) => console_warn!(
                "scatter intro: skipping {:?} match #{}, not an HTML element",
                node.node_name(),
                i
            ),
        }
    }
    if elements.is_empty() {
        console_warn!("scatter intro: no elements match {:?}", selector);
        return Ok(());
    }

    let (width, height) = super::viewport_size(&window)?;
    let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
    let mut core = IntroCore::with_config(config, width, height, seed).map_err(|e| JsValue::from_str(&e))?;

    // Measure every slot before any element leaves flow layout
    for el in elements.iter() {
        let rect = el.get_bounding_client_rect();
        core.add_icon(IconSlot::new(
            (rect.left() + rect.width() / 2.0) as f32,
            (rect.top() + rect.height() / 2.0) as f32,
            rect.width() as f32,
            rect.height() as f32,
        ));
    }
    for el in elements.iter() {
        style::prepare_for_flight(el, core.config())?;
    }

    let start_delay_ms = core.config().start_delay_ms;
    let run = IntroRun { core, elements };
    // Park icons off screen until the first frame
    run.push_visuals()?;

    console_log!(
        "scatter intro: {} icons, viewport {}x{}",
        run.elements.len(),
        width,
        height
    );

    let run = Rc::new(RefCell::new(run));
    let loop_window = window.clone();
    super::set_timeout(&window, start_delay_ms, move || {
        if let Err(e) = start_loop(run, loop_window) {
            console_warn!("scatter intro failed to start: {:?}", e);
        }
    })?;
    Ok(())
}

fn start_loop(run: Rc<RefCell<IntroRun>>, window: Window) -> Result<(), JsValue> {
    let frame_window = window.clone();
    super::run_frame_loop(&window, move || {
        let report = run.borrow_mut().tick();
        match report {
            Ok(report) if report.phase == Phase::Complete => {
                if let Err(e) = run.borrow().hand_off(&frame_window) {
                    console_warn!("intro handoff failed: {:?}", e);
                }
                false
            }
            Ok(_) => true,
            Err(e) => {
                console_warn!("intro frame failed: {:?}", e);
                false
            }
        }
    })
}
