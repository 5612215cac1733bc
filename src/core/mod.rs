//! Core math and utilities shared by the simulation and the browser adapter

// Macros first so every later module can use them
#[macro_use]
pub mod utils {
    #[macro_use]
    pub mod log;
}

pub mod easing;
pub mod random;
pub mod vec2;

pub use vec2::Vec2;
