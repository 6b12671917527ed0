//! Ship and weapon stat records.
//!
//! These deserialize from the JSON files a ship catalog serves. Every
//! field is optional in the file; missing values take the game defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{BEAM_TYPE, HOMING_TYPES, TARGETED_BEAM_WEAPON_TYPE, TETHER_WEAPON_TYPE};
use crate::enums::{ExplosionKind, MountSlot, Relationship, TetherKind};
use crate::error::ConfigError;
use crate::types::Rgb;

fn default_health() -> f64 {
    100.0
}
fn default_top_speed() -> f64 {
    5.0
}
fn default_acceleration() -> f64 {
    0.1
}
fn default_rotation_speed() -> f64 {
    3.0
}
fn default_friction() -> f64 {
    0.05
}
fn default_one() -> f64 {
    1.0
}
fn default_speed() -> f64 {
    10.0
}
fn default_lifetime() -> f64 {
    2.0
}
fn default_laser_length() -> f64 {
    100.0
}
fn default_alternate_offset() -> f64 {
    10.0
}
fn default_turret_projectiles() -> usize {
    1
}
fn default_turret_spread() -> f64 {
    15.0
}

/// Per-ship stat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipConfig {
    #[serde(default = "default_health")]
    pub health: f64,
    #[serde(default = "default_top_speed")]
    pub top_speed: f64,
    #[serde(default = "default_acceleration")]
    pub acceleration: f64,
    #[serde(default = "default_rotation_speed")]
    pub rotation_speed: f64,
    #[serde(default = "default_friction")]
    pub friction: f64,
    /// Size multiplier for both rendering and collision radius.
    #[serde(default = "default_one")]
    pub size: f64,
    #[serde(default = "default_one")]
    pub mass: f64,
    #[serde(default)]
    pub relationship: Relationship,
    #[serde(default)]
    pub weapons: MountConfig,
}

impl Default for ShipConfig {
    fn default() -> Self {
        Self {
            health: default_health(),
            top_speed: default_top_speed(),
            acceleration: default_acceleration(),
            rotation_speed: default_rotation_speed(),
            friction: default_friction(),
            size: default_one(),
            mass: default_one(),
            relationship: Relationship::default(),
            weapons: MountConfig::default(),
        }
    }
}

impl ShipConfig {
    /// Reject stats the simulation cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mass.is_finite() && self.mass > 0.0) {
            return Err(ConfigError::InvalidStat {
                field: "mass",
                value: self.mass,
            });
        }
        if !(self.size.is_finite() && self.size > 0.0) {
            return Err(ConfigError::InvalidStat {
                field: "size",
                value: self.size,
            });
        }
        if !(self.friction.is_finite() && self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ConfigError::InvalidStat {
                field: "friction",
                value: self.friction,
            });
        }
        if !self.health.is_finite() {
            return Err(ConfigError::InvalidStat {
                field: "health",
                value: self.health,
            });
        }
        for slot in MountSlot::ALL {
            if let Some(weapon) = self.weapons.get(slot) {
                weapon.validate()?;
            }
        }
        Ok(())
    }
}

/// Weapon records for the three mounts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MountConfig {
    #[serde(default)]
    pub primary: Option<WeaponConfig>,
    #[serde(default)]
    pub secondary: Option<WeaponConfig>,
    #[serde(default)]
    pub special: Option<WeaponConfig>,
}

impl MountConfig {
    pub fn get(&self, slot: MountSlot) -> Option<&WeaponConfig> {
        match slot {
            MountSlot::Primary => self.primary.as_ref(),
            MountSlot::Secondary => self.secondary.as_ref(),
            MountSlot::Special => self.special.as_ref(),
        }
    }
}

/// Per-weapon stat record. The weapon type doubles as the projectile type.
///
/// A few defaults depend on the type (the targeted beam hits harder, fires
/// faster and is narrower), so those fields stay optional and are resolved
/// through accessors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponConfig {
    #[serde(rename = "type")]
    pub weapon_type: String,
    #[serde(default)]
    pub damage: Option<f64>,
    /// Seconds between shots.
    #[serde(default)]
    pub fire_rate: Option<f64>,
    #[serde(default = "default_speed")]
    pub speed: f64,
    #[serde(default = "default_lifetime")]
    pub lifetime: f64,
    #[serde(default = "default_one")]
    pub size: f64,
    #[serde(default)]
    pub mass: f64,
    #[serde(default)]
    pub fire_sound: Option<String>,
    #[serde(default)]
    pub hit_sound: Option<String>,
    #[serde(default)]
    pub explosion_type: ExplosionKind,
    #[serde(default)]
    pub laser_color: Option<Rgb>,
    #[serde(default = "default_laser_length")]
    pub laser_length: f64,
    #[serde(default)]
    pub laser_width: Option<f64>,
    #[serde(default)]
    pub alternate_fire: bool,
    #[serde(default = "default_alternate_offset")]
    pub alternate_offset: f64,
    #[serde(default)]
    pub turret: bool,
    #[serde(default = "default_turret_projectiles")]
    pub turret_projectiles: usize,
    #[serde(default = "default_turret_spread")]
    pub turret_spread: f64,
    #[serde(default)]
    pub tether: TetherKind,
}

impl WeaponConfig {
    /// A record of the given type with every other field at its default.
    pub fn of_type(weapon_type: &str) -> Self {
        Self {
            weapon_type: weapon_type.to_string(),
            damage: None,
            fire_rate: None,
            speed: default_speed(),
            lifetime: default_lifetime(),
            size: default_one(),
            mass: 0.0,
            fire_sound: None,
            hit_sound: None,
            explosion_type: ExplosionKind::default(),
            laser_color: None,
            laser_length: default_laser_length(),
            laser_width: None,
            alternate_fire: false,
            alternate_offset: default_alternate_offset(),
            turret: false,
            turret_projectiles: default_turret_projectiles(),
            turret_spread: default_turret_spread(),
            tether: TetherKind::default(),
        }
    }

    pub fn is_targeted_beam(&self) -> bool {
        self.weapon_type == TARGETED_BEAM_WEAPON_TYPE
    }

    pub fn is_tether(&self) -> bool {
        self.weapon_type == TETHER_WEAPON_TYPE
    }

    pub fn is_beam(&self) -> bool {
        self.weapon_type == BEAM_TYPE
    }

    /// Per-update turn cap if this weapon launches homing missiles.
    pub fn homing_turn(&self) -> Option<f64> {
        HOMING_TYPES
            .iter()
            .find(|(name, _)| *name == self.weapon_type)
            .map(|(_, turn)| *turn)
    }

    /// Drawn beams have no sprite sheet; everything else needs one.
    pub fn needs_frames(&self) -> bool {
        !(self.is_beam() || self.is_tether() || self.is_targeted_beam())
    }

    pub fn damage(&self) -> f64 {
        self.damage
            .unwrap_or(if self.is_targeted_beam() { 30.0 } else { 10.0 })
    }

    pub fn fire_rate(&self) -> f64 {
        self.fire_rate
            .unwrap_or(if self.is_targeted_beam() { 0.1 } else { 0.5 })
    }

    pub fn laser_color(&self) -> Rgb {
        self.laser_color.unwrap_or(if self.is_targeted_beam() {
            Rgb(165, 78, 186)
        } else {
            Rgb(255, 0, 0)
        })
    }

    pub fn laser_width(&self) -> f64 {
        self.laser_width
            .unwrap_or(if self.is_targeted_beam() { 3.0 } else { 5.0 })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fire_rate = self.fire_rate();
        if !(fire_rate.is_finite() && fire_rate >= 0.0) {
            return Err(ConfigError::InvalidStat {
                field: "fire_rate",
                value: fire_rate,
            });
        }
        if !(self.lifetime.is_finite() && self.lifetime >= 0.0) {
            return Err(ConfigError::InvalidStat {
                field: "lifetime",
                value: self.lifetime,
            });
        }
        Ok(())
    }
}

/// One ship placement in a level table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelEntry {
    pub race: String,
    #[serde(rename = "type")]
    pub ship_type: String,
    pub x: f64,
    pub y: f64,
    /// Overrides the relationship in the ship's stat record.
    #[serde(default)]
    pub relationship: Option<Relationship>,
}

/// A level entry merged with its ship's stat record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipBlueprint {
    pub race: String,
    pub ship_type: String,
    pub x: f64,
    pub y: f64,
    pub config: ShipConfig,
}

impl ShipBlueprint {
    pub fn new(race: &str, ship_type: &str, x: f64, y: f64, config: ShipConfig) -> Self {
        Self {
            race: race.to_string(),
            ship_type: ship_type.to_string(),
            x,
            y,
            config,
        }
    }

    /// Merge a placement with the stat record for its race and type.
    pub fn from_entry(entry: &LevelEntry, mut config: ShipConfig) -> Self {
        if let Some(relationship) = entry.relationship {
            config.relationship = relationship;
        }
        Self::new(&entry.race, &entry.ship_type, entry.x, entry.y, config)
    }
}
