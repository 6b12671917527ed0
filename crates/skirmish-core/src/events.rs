//! Events emitted by the simulation for audio and UI feedback.

use serde::{Deserialize, Serialize};

use crate::constants::SHIP_DESTROYED_SOUND;
use crate::enums::*;
use crate::types::Position;

/// Audio cues collected during a frame, played by the driver's sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AudioEvent {
    /// A weapon fired (or a continuous weapon re-cued its loop).
    WeaponFired { sound: String },
    /// A projectile struck a ship.
    ProjectileHit { sound: String },
    /// A ship was destroyed. Always the shared destruction cue.
    ShipDestroyed,
}

impl AudioEvent {
    pub fn sound(&self) -> &str {
        match self {
            AudioEvent::WeaponFired { sound } | AudioEvent::ProjectileHit { sound } => sound,
            AudioEvent::ShipDestroyed => SHIP_DESTROYED_SOUND,
        }
    }
}

/// Combat outcomes of a frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CombatEvent {
    ShipDestroyed {
        race: String,
        ship_type: String,
        relationship: Relationship,
        position: Position,
        /// True when the destroyed ship was the player's.
        player: bool,
    },
}
