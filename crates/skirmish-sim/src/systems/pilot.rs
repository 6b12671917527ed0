//! Pilot system: runs the pilot FSM for every computer-controlled ship.
//!
//! Bridges ECS components to the pure FSM in `skirmish-pilot`.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::*;
use skirmish_core::enums::MountSlot;
use skirmish_core::events::AudioEvent;
use skirmish_core::types::{Position, Velocity};
use skirmish_pilot::fsm::{self, PilotContext, Throttle};

use super::{kinematics, weapons};
use crate::targeting::{nearest_hostile, Contact};
use crate::world_setup::ShotRequest;

pub fn run(
    world: &mut World,
    roster: &[Entity],
    contacts: &[Contact],
    rng: &mut ChaCha8Rng,
    shots: &mut Vec<ShotRequest>,
    audio: &mut Vec<AudioEvent>,
) {
    for &entity in roster {
        let Ok((pos, vel, helm, ship, pilot, life)) = world.query_one_mut::<(
            &Position,
            &mut Velocity,
            &mut Helm,
            &Ship,
            &mut AiPilot,
            &Lifespan,
        )>(entity) else {
            continue;
        };
        if !life.alive {
            continue;
        }

        let target = nearest_hostile(contacts, pos.0, ship.relationship).map(|(c, _)| c.position);
        let decision = fsm::evaluate(&PilotContext {
            position: pos.0,
            angle: helm.angle,
            rotation_speed: helm.rotation_speed,
            target,
        });

        pilot.state = decision.state;
        helm.angle = decision.angle;
        match decision.throttle {
            Throttle::Accelerate => kinematics::accelerate(helm, vel),
            Throttle::Decelerate => kinematics::decelerate(helm, vel),
        }

        if let Some(aim) = decision.fire_at {
            for slot in MountSlot::ALL {
                weapons::fire_slot(world, entity, slot, Some(aim), contacts, rng, shots, audio);
            }
        }
    }
}
