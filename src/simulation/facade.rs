use wasm_bindgen::prelude::*;

use crate::domain::particle::IconSlot;
use crate::domain::phase::Phase;

use super::perf_stats::IntroStats;
use super::IntroCore;

/// JS handle for a headless intro run. The page can drive it from its own
/// `requestAnimationFrame` loop and read back `visual_states()` each frame.
#[wasm_bindgen]
pub struct IntroSimulation {
    core: IntroCore,
    visual_buffer: Vec<f32>,
}

#[wasm_bindgen]
impl IntroSimulation {
    /// Create an intro for the given viewport with the shipped tuning
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f32, viewport_height: f32, seed: u32) -> Self {
        Self::from_core(IntroCore::new(viewport_width, viewport_height, seed))
    }

    /// Create an intro with a camelCase JSON override of the tuning
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(
        viewport_width: f32,
        viewport_height: f32,
        seed: u32,
        json: &str,
    ) -> Result<IntroSimulation, JsValue> {
        let core = IntroCore::with_config_json(json, viewport_width, viewport_height, seed)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(Self::from_core(core))
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn phase(&self) -> Phase { self.core.phase() }

    #[wasm_bindgen(getter)]
    pub fn is_complete(&self) -> bool { self.core.is_complete() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    /// Register an icon by its layout-slot center and rendered size.
    /// Returns false once the intro has started.
    pub fn add_icon(&mut self, center_x: f32, center_y: f32, width: f32, height: f32) -> bool {
        self.core.add_icon(IconSlot::new(center_x, center_y, width, height))
    }

    /// Advance one frame and return the phase it ran in
    pub fn advance_frame(&mut self) -> Phase {
        self.core.advance_frame().phase
    }

    /// Flat [left, top, rotationDeg, scale, opacity] per icon
    pub fn visual_states(&mut self) -> Vec<f32> {
        self.core.write_visual_buffer(&mut self.visual_buffer);
        self.visual_buffer.clone()
    }

    pub fn config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Enable or disable per-frame stats (adds timing overhead when enabled)
    pub fn enable_stats(&mut self, enabled: bool) {
        self.core.enable_stats(enabled);
    }

    /// Last frame's stats (zeros when disabled)
    pub fn get_stats(&self) -> IntroStats {
        self.core.stats()
    }
}

impl IntroSimulation {
    fn from_core(core: IntroCore) -> Self {
        let capacity = core.particle_count() * super::VISUAL_STRIDE;
        Self {
            core,
            visual_buffer: Vec::with_capacity(capacity),
        }
    }

    pub fn core(&self) -> &IntroCore {
        &self.core
    }
}
