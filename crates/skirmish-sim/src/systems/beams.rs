//! Continuous beam damage from tethers and targeted beams.
//!
//! Damage is per second of contact, applied every frame as `damage * dt`.
//! Each beam throws a particle burst at the contact point at most once per
//! `BEAM_PARTICLE_COOLDOWN`.

use glam::DVec2;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skirmish_core::components::*;
use skirmish_core::constants::BEAM_PARTICLE_COOLDOWN;
use skirmish_core::enums::Relationship;
use skirmish_core::ports::{HitShape, HitTester, ShipHitbox};
use skirmish_core::types::Position;
use skirmish_core::weapons::WeaponBehavior;

use super::hits::ship_hitboxes;
use crate::world_setup::spawn_particles;

/// Apply one beam against every hostile hitbox.
#[allow(clippy::too_many_arguments)]
fn sweep(
    shape: HitShape,
    beam_damage: f64,
    particle_cooldown: &mut f64,
    owner: Entity,
    relationship: Relationship,
    targets: &[(Entity, ShipHitbox, Relationship)],
    tester: &dyn HitTester,
    dt: f64,
    damage: &mut Vec<(Entity, f64)>,
    bursts: &mut Vec<DVec2>,
) {
    for (target, hitbox, target_relationship) in targets {
        if *target == owner || !target_relationship.is_hostile_to(relationship) {
            continue;
        }
        let Some(contact) = tester.contact(hitbox, &shape) else {
            continue;
        };
        damage.push((*target, beam_damage * dt));
        if *particle_cooldown <= 0.0 {
            bursts.push(contact);
            *particle_cooldown = BEAM_PARTICLE_COOLDOWN;
        }
    }
}

pub fn run(
    world: &mut World,
    roster: &[Entity],
    tester: &dyn HitTester,
    rng: &mut ChaCha8Rng,
    dt: f64,
) {
    let targets = ship_hitboxes(world, roster);
    let mut damage: Vec<(Entity, f64)> = Vec::new();
    let mut bursts: Vec<DVec2> = Vec::new();

    for &owner in roster {
        let Ok((pos, helm, ship, armament, life)) = world
            .query_one_mut::<(&Position, &Helm, &Ship, &mut Armament, &Lifespan)>(owner)
        else {
            continue;
        };
        if !life.alive {
            continue;
        }
        for weapon in armament.mounts.iter_mut().flatten() {
            match &mut weapon.behavior {
                WeaponBehavior::Tethers(pool) => {
                    let kind = pool.kind;
                    for tether in &mut pool.tethers {
                        let (start, end) = tether.segment(kind, pos.0, helm.angle);
                        let shape = HitShape::Strip {
                            start,
                            end,
                            half_width: tether.width / 2.0,
                        };
                        sweep(
                            shape,
                            tether.damage,
                            &mut tether.particle_cooldown,
                            owner,
                            ship.relationship,
                            &targets,
                            tester,
                            dt,
                            &mut damage,
                            &mut bursts,
                        );
                    }
                }
                WeaponBehavior::TargetedBeam(Some(beam)) => {
                    let (start, end) = beam.segment(pos.0);
                    let shape = HitShape::Strip {
                        start,
                        end,
                        half_width: beam.width / 2.0,
                    };
                    sweep(
                        shape,
                        beam.damage,
                        &mut beam.particle_cooldown,
                        owner,
                        ship.relationship,
                        &targets,
                        tester,
                        dt,
                        &mut damage,
                        &mut bursts,
                    );
                }
                WeaponBehavior::TargetedBeam(None) | WeaponBehavior::Launcher(_) => {}
            }
        }
    }

    for (target, amount) in damage {
        if let Ok(hull) = world.query_one_mut::<&mut Hull>(target) {
            hull.health -= amount;
        }
    }
    for point in bursts {
        spawn_particles(world, rng, point);
    }
}
