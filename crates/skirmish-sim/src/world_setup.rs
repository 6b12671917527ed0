//! Entity spawn factories.
//!
//! Ships are built from blueprints at level load; shots, explosions and
//! particles are spawned by systems during the frame.

use glam::DVec2;
use hecs::{Entity, EntityBuilder, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use skirmish_core::components::*;
use skirmish_core::config::{ShipBlueprint, WeaponConfig};
use skirmish_core::constants::*;
use skirmish_core::enums::*;
use skirmish_core::error::ConfigError;
use skirmish_core::ports::{AssetKey, AssetProvider};
use skirmish_core::types::{FrameTable, Position, Rgb, Velocity};
use skirmish_core::weapons::Weapon;

use crate::systems::kinematics::frame_for_angle;

/// Explosion frame tables, fetched once per level.
#[derive(Debug, Clone, Default)]
pub struct EffectLibrary {
    weapon_hit: FrameTable,
    missile_hit: FrameTable,
    ship: FrameTable,
}

impl EffectLibrary {
    pub fn load(assets: &dyn AssetProvider) -> Result<Self, ConfigError> {
        Ok(Self {
            weapon_hit: assets.frames(&AssetKey::Explosion(ExplosionKind::WeaponHit))?,
            missile_hit: assets.frames(&AssetKey::Explosion(ExplosionKind::MissileHit))?,
            ship: assets.frames(&AssetKey::Explosion(ExplosionKind::ShipDestroyed))?,
        })
    }

    pub fn frames(&self, kind: ExplosionKind) -> &FrameTable {
        match kind {
            ExplosionKind::WeaponHit => &self.weapon_hit,
            ExplosionKind::MissileHit => &self.missile_hit,
            ExplosionKind::ShipDestroyed => &self.ship,
        }
    }
}

/// Who flies a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pilot {
    Player,
    Computer,
}

/// Spawn a ship from its blueprint. Missing ship or weapon frames fail the
/// whole ship.
pub fn spawn_ship(
    world: &mut World,
    blueprint: &ShipBlueprint,
    pilot: Pilot,
    assets: &dyn AssetProvider,
    rng: &mut ChaCha8Rng,
) -> Result<Entity, ConfigError> {
    let config = &blueprint.config;
    config.validate()?;

    let frames = assets.frames(&AssetKey::ship(&blueprint.race, &blueprint.ship_type))?;

    let mut armament = Armament::default();
    for slot in MountSlot::ALL {
        if let Some(weapon_config) = config.weapons.get(slot) {
            armament.mounts[slot.index()] =
                Some(load_weapon(weapon_config, &blueprint.race, assets, rng)?);
        }
    }

    let mut builder = EntityBuilder::new();
    builder
        .add(Ship {
            race: blueprint.race.clone(),
            ship_type: blueprint.ship_type.clone(),
            relationship: config.relationship,
        })
        .add(Position(DVec2::new(blueprint.x, blueprint.y)))
        .add(Velocity::default())
        .add(Helm {
            angle: 0.0,
            top_speed: config.top_speed,
            acceleration: config.acceleration,
            rotation_speed: config.rotation_speed,
            friction: config.friction,
        })
        .add(Hull {
            health: config.health,
            mass: config.mass,
            size_scale: config.size,
        })
        .add(Sprite {
            frame_index: frame_for_angle(0.0, frames.len()),
            frames,
        })
        .add(armament)
        .add(Lifespan::unlimited());
    match pilot {
        Pilot::Player => builder.add(PlayerShip),
        Pilot::Computer => builder.add(AiPilot::default()),
    };

    let entity = world.spawn(builder.build());
    debug!(
        race = %blueprint.race,
        ship_type = %blueprint.ship_type,
        relationship = ?config.relationship,
        ?pilot,
        "spawned ship"
    );
    Ok(entity)
}

/// Build one mounted weapon. Sprite-based types need a frame table.
pub fn load_weapon(
    config: &WeaponConfig,
    race: &str,
    assets: &dyn AssetProvider,
    rng: &mut ChaCha8Rng,
) -> Result<Weapon, ConfigError> {
    let frames = if config.needs_frames() {
        let table = assets.frames(&AssetKey::weapon(race, &config.weapon_type))?;
        debug!(weapon = %config.weapon_type, frames = table.len(), "loaded weapon frames");
        Some(table)
    } else {
        None
    };
    let first_interval = if config.is_tether() {
        rng.gen_range(TETHER_INTERVAL_MIN..TETHER_INTERVAL_MAX)
    } else {
        TETHER_INTERVAL_MIN
    };
    Ok(Weapon::from_config(config, frames, first_interval))
}

/// A free-flying shot waiting to be spawned.
#[derive(Debug, Clone)]
pub struct ShotRequest {
    pub position: DVec2,
    pub velocity: DVec2,
    pub lifetime: f64,
    pub projectile: Projectile,
}

pub fn spawn_shot(world: &mut World, shot: ShotRequest) -> Entity {
    let rule = shot.projectile.class().expiry_rule();
    world.spawn((
        Position(shot.position),
        Velocity(shot.velocity),
        Lifespan::timed(shot.lifetime, rule),
        shot.projectile,
    ))
}

fn explosion_timing(kind: ExplosionKind) -> (f64, f64) {
    match kind {
        ExplosionKind::WeaponHit => (WEAPON_HIT_DURATION, 1.0),
        ExplosionKind::MissileHit => (MISSILE_HIT_DURATION, 1.0),
        ExplosionKind::ShipDestroyed => (SHIP_EXPLOSION_DURATION, SHIP_EXPLOSION_ANIMATION_SPEED),
    }
}

pub fn spawn_explosion(
    world: &mut World,
    effects: &EffectLibrary,
    kind: ExplosionKind,
    position: DVec2,
    size_scale: f64,
) -> Entity {
    let (duration, animation_speed) = explosion_timing(kind);
    let frame_count = effects.frames(kind).len().max(1);
    world.spawn((
        Position(position),
        Explosion {
            kind,
            size_scale,
            frame_count,
            frame_duration: duration / frame_count as f64 / animation_speed,
            current_frame: 0,
        },
        Lifespan::timed(duration, ExpiryRule::Inclusive),
    ))
}

/// Spawn a small burst of fading red sparks at a beam contact point.
pub fn spawn_particles(world: &mut World, rng: &mut ChaCha8Rng, position: DVec2) {
    let count = rng.gen_range(PARTICLE_BURST_MIN..=PARTICLE_BURST_MAX);
    for _ in 0..count {
        let velocity = DVec2::new(
            rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
            rng.gen_range(-PARTICLE_SPEED..PARTICLE_SPEED),
        );
        let lifetime = rng.gen_range(PARTICLE_LIFETIME_MIN..PARTICLE_LIFETIME_MAX);
        let color = Rgb(
            rng.gen_range(200..=255),
            rng.gen_range(0..=50),
            rng.gen_range(0..=50),
        );
        world.spawn((
            Position(position),
            Velocity(velocity),
            Particle { color },
            Lifespan::timed(lifetime, ExpiryRule::Inclusive),
        ));
    }
}
