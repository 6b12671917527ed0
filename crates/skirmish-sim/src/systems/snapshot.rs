//! Snapshot system: queries the ECS world and builds a FrameSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use skirmish_core::components::*;
use skirmish_core::enums::BeamKind;
use skirmish_core::events::{AudioEvent, CombatEvent};
use skirmish_core::state::*;
use skirmish_core::types::{Position, SimTime, Velocity};
use skirmish_core::weapons::WeaponBehavior;

use super::effects::fade_factor;

pub fn build_snapshot(
    world: &World,
    roster: &[Entity],
    time: &SimTime,
    paused: bool,
    audio_events: Vec<AudioEvent>,
    combat_events: Vec<CombatEvent>,
) -> FrameSnapshot {
    FrameSnapshot {
        time: *time,
        paused,
        ships: build_ships(world, roster),
        projectiles: build_projectiles(world),
        beams: build_beams(world, roster),
        explosions: build_explosions(world),
        particles: build_particles(world),
        audio_events,
        combat_events,
    }
}

fn build_ships(world: &World, roster: &[Entity]) -> Vec<ShipView> {
    roster
        .iter()
        .filter_map(|&entity| {
            let mut query = world
                .query_one::<(
                    &Ship,
                    &Position,
                    &Velocity,
                    &Helm,
                    &Hull,
                    &Sprite,
                    Option<&PlayerShip>,
                    Option<&AiPilot>,
                )>(entity)
                .ok()?;
            let (ship, pos, vel, helm, hull, sprite, player, pilot) = query.get()?;
            Some(ShipView {
                race: ship.race.clone(),
                ship_type: ship.ship_type.clone(),
                relationship: ship.relationship,
                position: *pos,
                velocity: *vel,
                angle: helm.angle,
                health: hull.health,
                size_scale: hull.size_scale,
                frame_index: sprite.frame_index,
                player: player.is_some(),
                ai_state: pilot.map(|p| p.state),
            })
        })
        .collect()
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    world
        .query::<(&Position, &Projectile, &Lifespan)>()
        .iter()
        .filter(|(_, (_, _, life))| life.alive)
        .map(|(_, (pos, projectile, _))| {
            let (frame_index, beam) = match projectile.body {
                ProjectileBody::Ballistic { frame_index, .. }
                | ProjectileBody::Homing { frame_index, .. } => (frame_index, None),
                ProjectileBody::Beam {
                    length,
                    width,
                    color,
                } => (0, Some((length, width, color))),
            };
            ProjectileView {
                projectile_type: projectile.projectile_type.clone(),
                class: projectile.class(),
                position: *pos,
                angle: projectile.angle,
                size_scale: projectile.size_scale,
                frame_index,
                beam,
            }
        })
        .collect()
}

fn build_beams(world: &World, roster: &[Entity]) -> Vec<BeamView> {
    let mut beams = Vec::new();
    for &entity in roster {
        let Ok(mut query) = world.query_one::<(&Position, &Helm, &Armament)>(entity) else {
            continue;
        };
        let Some((pos, helm, armament)) = query.get() else {
            continue;
        };
        for weapon in armament.mounts.iter().flatten() {
            match &weapon.behavior {
                WeaponBehavior::Tethers(pool) => {
                    for tether in &pool.tethers {
                        let (start, end) = tether.segment(pool.kind, pos.0, helm.angle);
                        beams.push(BeamView {
                            kind: BeamKind::Tether(pool.kind),
                            start: Position(start),
                            end: Position(end),
                            width: tether.width,
                            color: tether.color,
                            animation_phase: 0.0,
                        });
                    }
                }
                WeaponBehavior::TargetedBeam(Some(beam)) => {
                    let (start, end) = beam.segment(pos.0);
                    beams.push(BeamView {
                        kind: BeamKind::Targeted,
                        start: Position(start),
                        end: Position(end),
                        width: beam.width,
                        color: beam.color,
                        animation_phase: beam.animation_phase,
                    });
                }
                WeaponBehavior::TargetedBeam(None) | WeaponBehavior::Launcher(_) => {}
            }
        }
    }
    beams
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    world
        .query::<(&Position, &Explosion, &Lifespan)>()
        .iter()
        .filter(|(_, (_, _, life))| life.alive)
        .map(|(_, (pos, explosion, _))| ExplosionView {
            kind: explosion.kind,
            position: *pos,
            size_scale: explosion.size_scale,
            frame_index: explosion.current_frame,
        })
        .collect()
}

fn build_particles(world: &World) -> Vec<ParticleView> {
    world
        .query::<(&Position, &Particle, &Lifespan)>()
        .iter()
        .filter(|(_, (_, _, life))| life.alive)
        .map(|(_, (pos, particle, life))| ParticleView {
            position: *pos,
            color: particle.color.scaled(fade_factor(life)),
        })
        .collect()
}
