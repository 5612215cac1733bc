//! Scatter Intro Engine - waitlist page intro physics in WASM
//!
//! Icons fly in from past the viewport edges, bounce and jostle, then glide
//! onto their layout slots before CSS takes over again.
//!
//! Architecture:
//! - core/        - Vec2, easing, xorshift RNG, console macros
//! - domain/      - config, particles, phase windows
//! - systems/     - physics, settle interpolation, glow follower, counter
//! - simulation/  - IntroCore frame driver + JS facade
//! - dom/         - browser adapter (wasm32 only)

// Console macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
#[cfg(target_arch = "wasm32")]
pub mod dom;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("scatter intro engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use domain::config::IntroConfig;
pub use domain::particle::{IconSlot, Particle};
pub use domain::phase::{Phase, PhaseWindows};
pub use simulation::{FrameReport, IntroCore, IntroSimulation, IntroStats, VisualState};

#[cfg(target_arch = "wasm32")]
pub use dom::{animate_counter, increment_counter, start_ambient_glow, start_scatter_intro};
