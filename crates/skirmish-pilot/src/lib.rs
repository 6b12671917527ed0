//! Pilot AI for SKIRMISH.
//!
//! Computer-controlled ships run a three-state machine (idle, engage,
//! evade) re-evaluated every frame from the range to the nearest hostile.

pub mod fsm;
pub mod steering;

pub use skirmish_core as core;

#[cfg(test)]
mod tests;
