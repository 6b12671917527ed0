//! SKIRMISH headless driver.
//!
//! Wires the simulation to file-backed ship configs and frame tables,
//! a named sound bank and a fixed-rate game loop thread.

pub mod config;
pub mod game_loop;
pub mod providers;
pub mod sound;
pub mod state;
pub mod telemetry;

pub use skirmish_core as core;
