//! Core types and definitions for the SKIRMISH combat simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, weapons, configuration records, commands, snapshots,
//! events, constants and the ports through which the simulation talks
//! to its external collaborators (assets, audio, ship catalogs).
//! It has no dependency on any runtime framework.

pub mod camera;
pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod geometry;
pub mod ports;
pub mod state;
pub mod types;
pub mod weapons;

#[cfg(test)]
mod tests;
