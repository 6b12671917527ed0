//! Player commands sent from the driver to the simulation.

use serde::{Deserialize, Serialize};

use crate::enums::MountSlot;

/// Input applied to the player ship at the start of the next tick.
///
/// Held controls are sent once per frame they are held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    RotateLeft,
    RotateRight,
    Accelerate,
    Decelerate,
    /// Pull the trigger of one mount for this frame.
    Fire { slot: MountSlot },
    Pause,
    Resume,
}
