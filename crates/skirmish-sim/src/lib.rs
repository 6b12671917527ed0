//! Simulation engine for SKIRMISH.
//!
//! Owns the hecs ECS world, runs the combat systems in a fixed order
//! each frame, and produces FrameSnapshots for the driver.

pub mod engine;
pub mod levels;
pub mod systems;
pub mod targeting;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skirmish_core as core;
