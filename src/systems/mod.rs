pub mod counter;
pub mod glow;
pub mod physics;
pub mod settle;
