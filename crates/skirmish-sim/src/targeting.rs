//! Nearest-hostile lookup shared by pilots, homing missiles and targeted beams.

use glam::DVec2;
use hecs::{Entity, World};

use skirmish_core::components::{Lifespan, Ship};
use skirmish_core::enums::Relationship;
use skirmish_core::types::Position;

/// Where a live ship is and whose side it is on.
#[derive(Debug, Clone, Copy)]
pub struct Contact {
    pub entity: Entity,
    pub position: DVec2,
    pub relationship: Relationship,
}

/// Live ships in roster order.
pub fn contacts(world: &World, roster: &[Entity]) -> Vec<Contact> {
    roster
        .iter()
        .filter_map(|&entity| {
            let mut query = world
                .query_one::<(&Position, &Ship, &Lifespan)>(entity)
                .ok()?;
            let (pos, ship, life) = query.get()?;
            life.alive.then_some(Contact {
                entity,
                position: pos.0,
                relationship: ship.relationship,
            })
        })
        .collect()
}

/// Strictly nearest contact with another relationship. Ties go to the
/// first in roster order.
pub fn nearest_hostile(
    contacts: &[Contact],
    from: DVec2,
    relationship: Relationship,
) -> Option<(Contact, f64)> {
    let mut best: Option<(Contact, f64)> = None;
    for contact in contacts {
        if !contact.relationship.is_hostile_to(relationship) {
            continue;
        }
        let distance = from.distance(contact.position);
        match best {
            Some((_, nearest)) if nearest <= distance => {}
            _ => best = Some((*contact, distance)),
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(world: &mut World, x: f64, relationship: Relationship) -> Contact {
        Contact {
            entity: world.spawn(()),
            position: DVec2::new(x, 0.0),
            relationship,
        }
    }

    #[test]
    fn ties_go_to_first_in_order() {
        let mut world = World::new();
        let a = contact(&mut world, 10.0, Relationship::Foe);
        let b = contact(&mut world, -10.0, Relationship::Foe);
        let contacts = [a, b];
        let (found, distance) =
            nearest_hostile(&contacts, DVec2::ZERO, Relationship::Friend).unwrap();
        assert_eq!(found.entity, a.entity);
        assert_eq!(distance, 10.0);
    }

    #[test]
    fn same_side_is_never_a_target() {
        let mut world = World::new();
        let friend = contact(&mut world, 1.0, Relationship::Friend);
        let foe = contact(&mut world, 50.0, Relationship::Foe);
        let contacts = [friend, foe];
        let (found, _) = nearest_hostile(&contacts, DVec2::ZERO, Relationship::Friend).unwrap();
        assert_eq!(found.entity, foe.entity);
        assert!(nearest_hostile(&[friend], DVec2::ZERO, Relationship::Friend).is_none());
    }
}
