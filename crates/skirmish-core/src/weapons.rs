//! Weapon state owned by a ship mount.
//!
//! A `Weapon` is a cooldown gate plus a firing strategy. Free-flying shots
//! are spawned by the simulation as separate entities; tethered and
//! targeted beams stay inside the weapon because they follow their ship.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::config::WeaponConfig;
use crate::constants::STATIC_SPRITE_TYPE;
use crate::enums::{ExpiryRule, ExplosionKind, TetherKind};
use crate::geometry::{heading, rotate_deg};
use crate::types::{FrameTable, Rgb};

/// Resolved numeric stats.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponStats {
    pub weapon_type: String,
    pub damage: f64,
    pub fire_rate: f64,
    pub speed: f64,
    pub lifetime: f64,
    pub size_scale: f64,
    pub mass: f64,
    pub laser_color: Rgb,
    pub laser_length: f64,
    pub laser_width: f64,
    pub fire_sound: Option<String>,
    pub hit_sound: Option<String>,
    pub explosion: ExplosionKind,
}

/// Where successive shots leave the ship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FirePattern {
    /// Always from the muzzle point.
    Single,
    /// Left and right of the muzzle in turn.
    Alternating { offsets: [DVec2; 2], next: usize },
}

/// Fan of simultaneous shots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurretSpread {
    pub count: usize,
    /// Total fan width in degrees.
    pub spread: f64,
}

/// Free-flying projectile family a launcher produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Launcher {
    Ballistic { frames: Option<FrameTable> },
    Beam,
    Homing {
        max_rotation: f64,
        frames: Option<FrameTable>,
    },
}

/// One beam of a tether pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tether {
    /// Direction from the ship center to the anchor, degrees.
    pub offset_angle: f64,
    /// Direction the beam points, degrees.
    pub laser_angle: f64,
    /// Anchor distance from the ship center.
    pub distance: f64,
    pub length: f64,
    pub width: f64,
    pub color: Rgb,
    /// Damage per second of contact.
    pub damage: f64,
    pub lifetime: f64,
    pub elapsed: f64,
    pub particle_cooldown: f64,
}

impl Tether {
    /// World-space segment, centered on the anchor.
    ///
    /// Rotating tethers read their angles relative to the ship; fixed tethers
    /// keep the world angles they were spawned with.
    pub fn segment(&self, kind: TetherKind, ship_pos: DVec2, ship_angle: f64) -> (DVec2, DVec2) {
        let (offset, beam) = match kind {
            TetherKind::Rotating => (ship_angle + self.offset_angle, ship_angle + self.laser_angle),
            TetherKind::Fixed => (self.offset_angle, self.laser_angle),
        };
        let anchor = ship_pos + heading(offset) * self.distance;
        let half = heading(beam) * (self.length / 2.0);
        (anchor - half, anchor + half)
    }

    pub fn is_expired(&self) -> bool {
        ExpiryRule::Inclusive.is_expired(self.elapsed, self.lifetime)
    }
}

/// State of a continuous tethered-beam weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TetherPool {
    pub kind: TetherKind,
    pub tethers: Vec<Tether>,
    /// Time since the last spawn batch while firing.
    pub spawn_timer: f64,
    /// Interval until the next batch.
    pub next_spawn: f64,
    pub sound_timer: f64,
    pub firing: bool,
}

impl TetherPool {
    pub fn new(kind: TetherKind, first_interval: f64) -> Self {
        Self {
            kind,
            tethers: Vec::new(),
            spawn_timer: 0.0,
            next_spawn: first_interval,
            sound_timer: 0.0,
            firing: false,
        }
    }
}

/// The single beam of a targeted-beam weapon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetedBeam {
    /// Direction from the ship toward the target, degrees.
    pub angle: f64,
    pub length: f64,
    pub width: f64,
    pub color: Rgb,
    /// Damage per second of contact.
    pub damage: f64,
    pub lifetime: f64,
    pub elapsed: f64,
    /// Zig-zag phase in `[0, 2)`.
    pub animation_phase: f64,
    pub particle_cooldown: f64,
}

impl TargetedBeam {
    /// World-space segment from the ship outwards.
    pub fn segment(&self, ship_pos: DVec2) -> (DVec2, DVec2) {
        (ship_pos, ship_pos + heading(self.angle) * self.length)
    }

    pub fn is_expired(&self) -> bool {
        ExpiryRule::Inclusive.is_expired(self.elapsed, self.lifetime)
    }
}

/// Firing strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WeaponBehavior {
    Launcher(Launcher),
    Tethers(TetherPool),
    TargetedBeam(Option<TargetedBeam>),
}

/// A weapon in one ship mount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weapon {
    pub stats: WeaponStats,
    /// Seconds until the weapon may fire again.
    pub cooldown: f64,
    pub pattern: FirePattern,
    pub turret: Option<TurretSpread>,
    pub behavior: WeaponBehavior,
    /// Set when the trigger is pulled during the current frame.
    pub triggered: bool,
}

impl Weapon {
    /// Build a weapon from its record. `frames` is the projectile sprite
    /// table for sprite-based types, `first_tether_interval` seeds the
    /// spawn timer of tether weapons.
    pub fn from_config(
        config: &WeaponConfig,
        frames: Option<FrameTable>,
        first_tether_interval: f64,
    ) -> Self {
        let stats = WeaponStats {
            weapon_type: config.weapon_type.clone(),
            damage: config.damage(),
            fire_rate: config.fire_rate(),
            speed: config.speed,
            lifetime: config.lifetime,
            size_scale: config.size,
            mass: config.mass,
            laser_color: config.laser_color(),
            laser_length: config.laser_length,
            laser_width: config.laser_width(),
            fire_sound: config.fire_sound.clone(),
            hit_sound: config.hit_sound.clone(),
            explosion: config.explosion_type,
        };

        let behavior = if config.is_tether() {
            WeaponBehavior::Tethers(TetherPool::new(config.tether, first_tether_interval))
        } else if config.is_targeted_beam() {
            WeaponBehavior::TargetedBeam(None)
        } else if config.is_beam() {
            WeaponBehavior::Launcher(Launcher::Beam)
        } else if let Some(max_rotation) = config.homing_turn() {
            WeaponBehavior::Launcher(Launcher::Homing {
                max_rotation,
                frames,
            })
        } else {
            WeaponBehavior::Launcher(Launcher::Ballistic { frames })
        };

        let pattern = if config.alternate_fire {
            FirePattern::Alternating {
                offsets: [
                    DVec2::new(-config.alternate_offset, 0.0),
                    DVec2::new(config.alternate_offset, 0.0),
                ],
                next: 0,
            }
        } else {
            FirePattern::Single
        };

        let turret = (config.turret && config.turret_projectiles > 1).then_some(TurretSpread {
            count: config.turret_projectiles,
            spread: config.turret_spread,
        });

        Self {
            stats,
            cooldown: 0.0,
            pattern,
            turret,
            behavior,
            triggered: false,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.cooldown <= 0.0
    }

    pub fn tick_cooldown(&mut self, dt: f64) {
        if self.cooldown > 0.0 {
            self.cooldown -= dt;
        }
    }

    /// Firing angles of one trigger pull, evenly spread around `aim`.
    pub fn shot_angles(&self, aim: f64) -> Vec<f64> {
        match self.turret {
            Some(TurretSpread { count, spread }) if count > 1 => {
                let start = aim - spread / 2.0;
                let increment = spread / (count - 1) as f64;
                (0..count).map(|i| start + increment * i as f64).collect()
            }
            _ => vec![aim],
        }
    }

    /// Offset of this shot from the muzzle point, advancing the alternation.
    pub fn next_muzzle_offset(&mut self, aim: f64) -> DVec2 {
        match &mut self.pattern {
            FirePattern::Single => DVec2::ZERO,
            FirePattern::Alternating { offsets, next } => {
                let offset = rotate_deg(offsets[*next], aim);
                *next = (*next + 1) % offsets.len();
                offset
            }
        }
    }

    /// Whether sprites of this weapon's projectiles stay on their first frame.
    pub fn has_static_sprite(&self) -> bool {
        self.stats.weapon_type == STATIC_SPRITE_TYPE
    }
}
