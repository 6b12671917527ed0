//! Pilot finite state machine.
//!
//! Pure function from a `PilotContext` to a `PilotDecision`. No ECS
//! dependency; the simulation applies the decision to the ship.

use glam::DVec2;

use skirmish_core::constants::{AI_ENGAGE_RANGE, AI_EVADE_RANGE};
use skirmish_core::enums::AiState;
use skirmish_core::geometry::bearing;

use crate::steering::{reciprocal, steer_toward};

/// Input to the pilot FSM for a single ship.
#[derive(Debug, Clone, Copy)]
pub struct PilotContext {
    pub position: DVec2,
    pub angle: f64,
    pub rotation_speed: f64,
    /// Position of the nearest ship with a different relationship.
    pub target: Option<DVec2>,
}

/// Engine command for this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Throttle {
    Accelerate,
    Decelerate,
}

/// Output from the pilot FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PilotDecision {
    pub state: AiState,
    /// Heading after this frame's turn.
    pub angle: f64,
    pub throttle: Throttle,
    /// Aim for all mounts, when the pilot wants to fire.
    pub fire_at: Option<f64>,
}

/// Pick the state for a given range to the nearest hostile.
pub fn classify(distance: Option<f64>) -> AiState {
    match distance {
        None => AiState::Idle,
        Some(d) if d > AI_ENGAGE_RANGE => AiState::Engage,
        Some(d) if d < AI_EVADE_RANGE => AiState::Evade,
        Some(_) => AiState::Engage,
    }
}

/// Evaluate the FSM for one ship.
pub fn evaluate(ctx: &PilotContext) -> PilotDecision {
    let Some(target) = ctx.target else {
        return PilotDecision {
            state: AiState::Idle,
            angle: ctx.angle,
            throttle: Throttle::Accelerate,
            fire_at: None,
        };
    };

    let distance = ctx.position.distance(target);
    let to_target = bearing(ctx.position, target);

    match classify(Some(distance)) {
        AiState::Evade => PilotDecision {
            state: AiState::Evade,
            angle: steer_toward(ctx.angle, reciprocal(to_target), ctx.rotation_speed),
            throttle: Throttle::Accelerate,
            fire_at: None,
        },
        _ => PilotDecision {
            state: AiState::Engage,
            angle: steer_toward(ctx.angle, to_target, ctx.rotation_speed),
            throttle: if distance > AI_EVADE_RANGE {
                Throttle::Accelerate
            } else {
                Throttle::Decelerate
            },
            fire_at: Some(to_target),
        },
    }
}
