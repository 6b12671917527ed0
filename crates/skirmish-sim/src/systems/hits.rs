//! Projectile-ship hits.
//!
//! Ships are visited in roster order and, for each, every projectile still
//! in flight. A projectile lands at most once; only ships of a different
//! relationship than the shooter can be hit.

use glam::DVec2;
use hecs::{Entity, World};
use tracing::debug;

use skirmish_core::components::*;
use skirmish_core::enums::{ExplosionKind, Relationship};
use skirmish_core::events::AudioEvent;
use skirmish_core::geometry::heading;
use skirmish_core::ports::{HitShape, HitTester, ShipHitbox};
use skirmish_core::types::Position;

use super::kinematics::collision_radius;
use crate::world_setup::{spawn_explosion, EffectLibrary};

struct InFlight {
    entity: Entity,
    shape: HitShape,
    position: DVec2,
    origin: Relationship,
    damage: f64,
    size_scale: f64,
    hit_sound: Option<String>,
    explosion: ExplosionKind,
    consumed: bool,
}

/// Hit volume of a projectile.
pub fn projectile_shape(position: DVec2, projectile: &Projectile) -> HitShape {
    match projectile.body {
        ProjectileBody::Beam { length, width, .. } => {
            let half = heading(projectile.angle) * (length * projectile.size_scale / 2.0);
            HitShape::Strip {
                start: position - half,
                end: position + half,
                half_width: width * projectile.size_scale / 2.0,
            }
        }
        ProjectileBody::Ballistic { .. } | ProjectileBody::Homing { .. } => HitShape::Disc {
            center: position,
            radius: projectile.hit_radius,
        },
    }
}

/// Hitbox of every live roster ship.
pub fn ship_hitboxes(world: &World, roster: &[Entity]) -> Vec<(Entity, ShipHitbox, Relationship)> {
    roster
        .iter()
        .filter_map(|&entity| {
            let mut query = world
                .query_one::<(&Position, &Helm, &Hull, &Sprite, &Ship, &Lifespan)>(entity)
                .ok()?;
            let (pos, helm, hull, sprite, ship, life) = query.get()?;
            life.alive.then(|| {
                (
                    entity,
                    ShipHitbox {
                        center: pos.0,
                        radius: collision_radius(sprite, hull),
                        angle: helm.angle,
                    },
                    ship.relationship,
                )
            })
        })
        .collect()
}

pub fn run(
    world: &mut World,
    roster: &[Entity],
    tester: &dyn HitTester,
    effects: &EffectLibrary,
    audio: &mut Vec<AudioEvent>,
) {
    let mut in_flight: Vec<InFlight> = world
        .query::<(&Position, &Projectile, &Lifespan)>()
        .iter()
        .filter(|(_, (_, _, life))| life.alive)
        .map(|(entity, (pos, projectile, _))| InFlight {
            entity,
            shape: projectile_shape(pos.0, projectile),
            position: pos.0,
            origin: projectile.origin,
            damage: projectile.damage,
            size_scale: projectile.size_scale,
            hit_sound: projectile.hit_sound.clone(),
            explosion: projectile.explosion,
            consumed: false,
        })
        .collect();
    if in_flight.is_empty() {
        return;
    }

    let mut damage: Vec<(Entity, f64)> = Vec::new();
    let mut impacts: Vec<(ExplosionKind, DVec2, f64)> = Vec::new();
    for (ship, hitbox, relationship) in ship_hitboxes(world, roster) {
        for shot in in_flight.iter_mut().filter(|shot| !shot.consumed) {
            if !relationship.is_hostile_to(shot.origin) {
                continue;
            }
            if tester.contact(&hitbox, &shot.shape).is_none() {
                continue;
            }
            shot.consumed = true;
            damage.push((ship, shot.damage));
            if let Some(sound) = &shot.hit_sound {
                audio.push(AudioEvent::ProjectileHit {
                    sound: sound.clone(),
                });
            }
            impacts.push((shot.explosion, shot.position, shot.size_scale));
            debug!(?ship, damage = shot.damage, "projectile hit");
        }
    }

    for (ship, amount) in damage {
        if let Ok(hull) = world.query_one_mut::<&mut Hull>(ship) {
            hull.health -= amount;
        }
    }
    for shot in in_flight.iter().filter(|shot| shot.consumed) {
        if let Ok(life) = world.query_one_mut::<&mut Lifespan>(shot.entity) {
            life.alive = false;
        }
    }
    for (kind, position, size_scale) in impacts {
        spawn_explosion(world, effects, kind, position, size_scale);
    }
}
