//! Weapon firing and per-frame weapon upkeep.
//!
//! `trigger` is called when a fire control is pulled (player command or
//! pilot decision). `run` then ticks cooldowns, ages attached beams, grows
//! tether pools and releases continuous weapons whose trigger was not
//! pulled this frame.

use glam::DVec2;
use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::warn;

use skirmish_core::components::*;
use skirmish_core::constants::*;
use skirmish_core::enums::{MountSlot, Relationship};
use skirmish_core::error::SpawnError;
use skirmish_core::events::AudioEvent;
use skirmish_core::geometry::{bearing, heading, normalize_angle};
use skirmish_core::types::{FrameTable, Position, Velocity};
use skirmish_core::weapons::*;

use crate::targeting::{nearest_hostile, Contact};
use crate::world_setup::ShotRequest;

/// Snapshot of the firing ship.
#[derive(Debug, Clone)]
pub struct Shooter {
    pub position: DVec2,
    pub velocity: DVec2,
    pub angle: f64,
    pub relationship: Relationship,
    pub race: String,
}

/// Pull the trigger of one mount. `aim` defaults to the ship's heading.
#[allow(clippy::too_many_arguments)]
pub fn fire_slot(
    world: &mut World,
    entity: Entity,
    slot: MountSlot,
    aim: Option<f64>,
    contacts: &[Contact],
    rng: &mut ChaCha8Rng,
    shots: &mut Vec<ShotRequest>,
    audio: &mut Vec<AudioEvent>,
) {
    let Ok((pos, vel, helm, ship, armament, life)) = world
        .query_one_mut::<(&Position, &Velocity, &Helm, &Ship, &mut Armament, &Lifespan)>(entity)
    else {
        return;
    };
    if !life.alive {
        return;
    }
    let Some(weapon) = armament.mounts[slot.index()].as_mut() else {
        return;
    };
    let shooter = Shooter {
        position: pos.0,
        velocity: vel.0,
        angle: helm.angle,
        relationship: ship.relationship,
        race: ship.race.clone(),
    };
    let aim = aim.unwrap_or(helm.angle);
    trigger(weapon, &shooter, aim, contacts, rng, shots, audio);
}

/// Fire one weapon if its gate allows.
pub fn trigger(
    weapon: &mut Weapon,
    shooter: &Shooter,
    aim: f64,
    contacts: &[Contact],
    rng: &mut ChaCha8Rng,
    shots: &mut Vec<ShotRequest>,
    audio: &mut Vec<AudioEvent>,
) {
    weapon.triggered = true;
    match weapon.behavior {
        WeaponBehavior::Tethers(_) => trigger_tethers(weapon, rng, audio),
        WeaponBehavior::TargetedBeam(_) => trigger_targeted_beam(weapon, shooter, aim, contacts, audio),
        WeaponBehavior::Launcher(_) => trigger_launcher(weapon, shooter, aim, shots, audio),
    }
}

fn play_fire_sound(stats: &WeaponStats, audio: &mut Vec<AudioEvent>) {
    if let Some(sound) = &stats.fire_sound {
        audio.push(AudioEvent::WeaponFired {
            sound: sound.clone(),
        });
    }
}

fn trigger_launcher(
    weapon: &mut Weapon,
    shooter: &Shooter,
    aim: f64,
    shots: &mut Vec<ShotRequest>,
    audio: &mut Vec<AudioEvent>,
) {
    if !weapon.is_ready() {
        return;
    }

    let angles = weapon.shot_angles(aim);
    let origin = shooter.position + heading(aim) * MUZZLE_OFFSET;
    let mut built = Vec::with_capacity(angles.len());
    for angle in angles {
        match build_shot(weapon, shooter, origin, angle) {
            Ok(shot) => built.push(shot),
            Err(err) => {
                warn!(%err, "skipping projectile spawn");
                return;
            }
        }
    }

    let offset = weapon.next_muzzle_offset(aim);
    shots.extend(built.into_iter().map(|mut shot| {
        shot.position += offset;
        shot
    }));
    play_fire_sound(&weapon.stats, audio);
    weapon.cooldown = weapon.stats.fire_rate;
}

/// Construct one projectile leaving `origin` at `angle`.
///
/// Sprite shots carry the composed ship + muzzle velocity. Beam bolts keep
/// that speed but travel straight along their angle.
pub fn build_shot(
    weapon: &Weapon,
    shooter: &Shooter,
    origin: DVec2,
    angle: f64,
) -> Result<ShotRequest, SpawnError> {
    let stats = &weapon.stats;
    let direction = heading(angle);
    let composed = direction * stats.speed + shooter.velocity;

    let sprite_radius = |frames: Option<&FrameTable>| {
        frames
            .and_then(|table| table.get(0))
            .map_or(DEFAULT_PROJECTILE_RADIUS * stats.size_scale, |frame| {
                frame.width() * stats.size_scale / 2.0
            })
    };

    let (body, velocity, hit_radius) = match &weapon.behavior {
        WeaponBehavior::Launcher(Launcher::Ballistic { frames }) => {
            let table = frames
                .as_ref()
                .filter(|table| !table.is_empty())
                .ok_or_else(|| SpawnError::NoFrames(stats.weapon_type.clone()))?;
            (
                ProjectileBody::Ballistic {
                    frame_count: table.len(),
                    frame_index: 0,
                    frame_timer: 0.0,
                    static_sprite: weapon.has_static_sprite(),
                },
                composed,
                sprite_radius(Some(table)),
            )
        }
        WeaponBehavior::Launcher(Launcher::Homing {
            max_rotation,
            frames,
        }) => (
            ProjectileBody::Homing {
                max_rotation: *max_rotation,
                frame_count: frames.as_ref().map_or(1, |table| table.len().max(1)),
                frame_index: 0,
                frame_timer: 0.0,
            },
            composed,
            sprite_radius(frames.as_ref()),
        ),
        WeaponBehavior::Launcher(Launcher::Beam) => (
            ProjectileBody::Beam {
                length: stats.laser_length,
                width: stats.laser_width,
                color: stats.laser_color,
            },
            direction * composed.length(),
            stats.laser_width * stats.size_scale / 2.0,
        ),
        WeaponBehavior::Tethers(_) | WeaponBehavior::TargetedBeam(_) => {
            return Err(SpawnError::NoFrames(stats.weapon_type.clone()));
        }
    };

    Ok(ShotRequest {
        position: origin,
        velocity,
        lifetime: stats.lifetime,
        projectile: Projectile {
            projectile_type: stats.weapon_type.clone(),
            body,
            angle: normalize_angle(angle),
            damage: stats.damage,
            size_scale: stats.size_scale,
            mass: stats.mass,
            hit_radius,
            origin: shooter.relationship,
            origin_race: shooter.race.clone(),
            hit_sound: stats.hit_sound.clone(),
            explosion: stats.explosion,
        },
    })
}

/// Holding the trigger is the gate. An empty pool starts with a volley.
fn trigger_tethers(weapon: &mut Weapon, rng: &mut ChaCha8Rng, audio: &mut Vec<AudioEvent>) {
    let Weapon {
        stats, behavior, ..
    } = weapon;
    let WeaponBehavior::Tethers(pool) = behavior else {
        return;
    };
    pool.firing = true;
    if pool.tethers.is_empty() {
        for _ in 0..TETHER_INITIAL_COUNT {
            spawn_tether(pool, stats, rng);
        }
        play_fire_sound(stats, audio);
    }
}

fn spawn_tether(pool: &mut TetherPool, stats: &WeaponStats, rng: &mut ChaCha8Rng) {
    if pool.tethers.len() >= TETHER_POOL_MAX {
        return;
    }
    let angle = rng.gen_range(0.0..360.0);
    let lifetime = rng.gen_range(TETHER_LIFETIME_MIN..TETHER_LIFETIME_MAX);
    let length = rng.gen_range(TETHER_LENGTH_MIN..TETHER_LENGTH_MAX);
    pool.tethers.push(Tether {
        offset_angle: angle,
        laser_angle: angle,
        distance: TETHER_ANCHOR_RADIUS,
        length,
        width: stats.laser_width,
        color: stats.laser_color,
        damage: stats.damage,
        lifetime,
        elapsed: 0.0,
        particle_cooldown: 0.0,
    });
}

/// Direction and length of a targeted beam: to the nearest hostile if
/// there is one, straight along `aim` otherwise.
fn targeted_geometry(
    shooter_pos: DVec2,
    relationship: Relationship,
    contacts: &[Contact],
) -> Option<(f64, f64)> {
    nearest_hostile(contacts, shooter_pos, relationship)
        .map(|(target, distance)| (bearing(shooter_pos, target.position), distance))
}

fn trigger_targeted_beam(
    weapon: &mut Weapon,
    shooter: &Shooter,
    aim: f64,
    contacts: &[Contact],
    audio: &mut Vec<AudioEvent>,
) {
    if !weapon.is_ready() {
        return;
    }
    let (angle, length) = targeted_geometry(shooter.position, shooter.relationship, contacts)
        .unwrap_or((normalize_angle(aim), weapon.stats.laser_length));

    let stats = &weapon.stats;
    let WeaponBehavior::TargetedBeam(slot) = &mut weapon.behavior else {
        return;
    };
    match slot {
        Some(beam) => {
            beam.angle = angle;
            beam.length = length;
            beam.elapsed = 0.0;
        }
        None => {
            *slot = Some(TargetedBeam {
                angle,
                length,
                width: stats.laser_width,
                color: stats.laser_color,
                damage: stats.damage,
                lifetime: stats.lifetime,
                elapsed: 0.0,
                animation_phase: 0.0,
                particle_cooldown: 0.0,
            });
        }
    }
    play_fire_sound(stats, audio);
    weapon.cooldown = weapon.stats.fire_rate;
}

/// Per-frame upkeep of every mounted weapon on live ships.
pub fn run(
    world: &mut World,
    contacts: &[Contact],
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    dt: f64,
) {
    for (_entity, (pos, helm, ship, armament, life)) in
        world.query_mut::<(&Position, &Helm, &Ship, &mut Armament, &Lifespan)>()
    {
        if !life.alive {
            continue;
        }
        for weapon in armament.mounts.iter_mut().flatten() {
            upkeep(
                weapon,
                pos.0,
                helm.angle,
                ship.relationship,
                contacts,
                rng,
                audio,
                dt,
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn upkeep(
    weapon: &mut Weapon,
    ship_pos: DVec2,
    ship_angle: f64,
    relationship: Relationship,
    contacts: &[Contact],
    rng: &mut ChaCha8Rng,
    audio: &mut Vec<AudioEvent>,
    dt: f64,
) {
    weapon.tick_cooldown(dt);
    let triggered = std::mem::take(&mut weapon.triggered);
    let Weapon {
        stats, behavior, ..
    } = weapon;

    match behavior {
        WeaponBehavior::Launcher(_) => {}
        WeaponBehavior::Tethers(pool) => {
            pool.sound_timer += dt;
            for tether in &mut pool.tethers {
                tether.elapsed += dt;
                if tether.particle_cooldown > 0.0 {
                    tether.particle_cooldown -= dt;
                }
            }
            pool.tethers.retain(|tether| !tether.is_expired());

            if pool.firing && !triggered {
                pool.firing = false;
                pool.spawn_timer = 0.0;
                pool.next_spawn = rng.gen_range(TETHER_INTERVAL_MIN..TETHER_INTERVAL_MAX);
            }

            if pool.firing {
                pool.spawn_timer += dt;
                if pool.spawn_timer >= pool.next_spawn {
                    pool.spawn_timer = 0.0;
                    pool.next_spawn = rng.gen_range(TETHER_INTERVAL_MIN..TETHER_INTERVAL_MAX);
                    let batch = rng.gen_range(TETHER_BATCH_MIN..=TETHER_BATCH_MAX);
                    for _ in 0..batch {
                        spawn_tether(pool, stats, rng);
                    }
                    if stats.fire_sound.is_some() && pool.sound_timer >= TETHER_SOUND_INTERVAL {
                        play_fire_sound(stats, audio);
                        pool.sound_timer = 0.0;
                    }
                }
            }
        }
        WeaponBehavior::TargetedBeam(slot) => {
            let Some(beam) = slot else {
                return;
            };
            beam.elapsed += dt;
            if beam.is_expired() {
                *slot = None;
                return;
            }
            let (angle, length) = targeted_geometry(ship_pos, relationship, contacts)
                .unwrap_or((normalize_angle(ship_angle), stats.laser_length));
            beam.angle = angle;
            beam.length = length;
            beam.animation_phase =
                (beam.animation_phase + TARGETED_BEAM_ANIMATION_SPEED * dt).rem_euclid(2.0);
            if beam.particle_cooldown > 0.0 {
                beam.particle_cooldown -= dt;
            }
        }
    }
}
