//! Per-frame snapshot handed back to the driver.
//!
//! Everything a renderer needs to draw the frame, plus the frame's events.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{AudioEvent, CombatEvent};
use crate::types::{Position, Rgb, SimTime, Velocity};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub paused: bool,
    pub ships: Vec<ShipView>,
    pub projectiles: Vec<ProjectileView>,
    pub beams: Vec<BeamView>,
    pub explosions: Vec<ExplosionView>,
    pub particles: Vec<ParticleView>,
    pub audio_events: Vec<AudioEvent>,
    pub combat_events: Vec<CombatEvent>,
}

/// A live ship, in roster order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipView {
    pub race: String,
    pub ship_type: String,
    pub relationship: Relationship,
    pub position: Position,
    pub velocity: Velocity,
    pub angle: f64,
    pub health: f64,
    pub size_scale: f64,
    pub frame_index: usize,
    pub player: bool,
    /// `None` for the player ship.
    pub ai_state: Option<AiState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub projectile_type: String,
    pub class: ProjectileClass,
    pub position: Position,
    pub angle: f64,
    pub size_scale: f64,
    pub frame_index: usize,
    /// Rectangle dimensions for beam bolts.
    pub beam: Option<(f64, f64, Rgb)>,
}

/// A beam attached to a ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamView {
    pub kind: BeamKind,
    pub start: Position,
    pub end: Position,
    pub width: f64,
    pub color: Rgb,
    /// Zig-zag phase of targeted beams; zero for tethers.
    pub animation_phase: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    pub kind: ExplosionKind,
    pub position: Position,
    pub size_scale: f64,
    pub frame_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub position: Position,
    /// Colour after fading.
    pub color: Rgb,
}
