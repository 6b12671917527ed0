//! Cleanup system: despawns every entity marked dead during the frame.

use hecs::{Entity, World};

use skirmish_core::components::Lifespan;

/// Remove dead entities and drop them from the roster.
/// Uses a pre-allocated buffer to avoid per-frame allocation.
pub fn run(world: &mut World, roster: &mut Vec<Entity>, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, life) in world.query_mut::<&Lifespan>() {
        if !life.alive {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    roster.retain(|entity| world.contains(*entity));
}
