//! Ship destruction: any live ship at or below zero health dies this frame.

use hecs::{Entity, World};
use tracing::info;

use skirmish_core::components::*;
use skirmish_core::enums::ExplosionKind;
use skirmish_core::events::{AudioEvent, CombatEvent};
use skirmish_core::types::Position;

use crate::world_setup::{spawn_explosion, EffectLibrary};

pub fn run(
    world: &mut World,
    roster: &[Entity],
    effects: &EffectLibrary,
    audio: &mut Vec<AudioEvent>,
    combat: &mut Vec<CombatEvent>,
) {
    let mut explosions = Vec::new();
    for &entity in roster {
        let Ok((pos, ship, hull, life, player)) = world
            .query_one_mut::<(&Position, &Ship, &Hull, &mut Lifespan, Option<&PlayerShip>)>(entity)
        else {
            continue;
        };
        if !life.alive || hull.health > 0.0 {
            continue;
        }
        life.alive = false;
        info!(
            race = %ship.race,
            ship_type = %ship.ship_type,
            relationship = ?ship.relationship,
            "ship destroyed"
        );
        audio.push(AudioEvent::ShipDestroyed);
        combat.push(CombatEvent::ShipDestroyed {
            race: ship.race.clone(),
            ship_type: ship.ship_type.clone(),
            relationship: ship.relationship,
            position: *pos,
            player: player.is_some(),
        });
        explosions.push((pos.0, hull.size_scale));
    }

    for (position, size_scale) in explosions {
        spawn_explosion(world, effects, ExplosionKind::ShipDestroyed, position, size_scale);
    }
}
