pub mod config;
pub mod particle;
pub mod phase;
