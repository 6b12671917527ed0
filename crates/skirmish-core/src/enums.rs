//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Combat allegiance. Decides who may damage whom; independent of race.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Relationship {
    Friend,
    #[default]
    Foe,
}

impl Relationship {
    /// Whether a ship of `self` may be harmed by fire from `other`.
    pub fn is_hostile_to(self, other: Relationship) -> bool {
        self != other
    }
}

/// Behavior state of a computer-controlled ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiState {
    /// No opposing ship exists: cruise on the current heading.
    #[default]
    Idle,
    /// Close on the nearest opposing ship and fire.
    Engage,
    /// Too close: turn away and open the range.
    Evade,
}

/// The three weapon mounts every ship carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MountSlot {
    Primary,
    Secondary,
    Special,
}

impl MountSlot {
    pub const ALL: [MountSlot; 3] = [MountSlot::Primary, MountSlot::Secondary, MountSlot::Special];

    pub fn index(self) -> usize {
        match self {
            MountSlot::Primary => 0,
            MountSlot::Secondary => 1,
            MountSlot::Special => 2,
        }
    }
}

/// Explosion effect family.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplosionKind {
    /// Standard weapon impact.
    #[default]
    WeaponHit,
    /// Missile impact (longer, distinct asset).
    MissileHit,
    /// Ship destruction.
    ShipDestroyed,
}

impl ExplosionKind {
    /// Asset key used to fetch this explosion's frame table.
    pub fn asset_name(self) -> &'static str {
        match self {
            ExplosionKind::WeaponHit => "weapon_hit_explosion",
            ExplosionKind::MissileHit => "missile_hit_explosion",
            ExplosionKind::ShipDestroyed => "ship_explosion",
        }
    }
}

/// How a tethered beam follows its ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TetherKind {
    /// Anchor offset and beam angle turn with the ship.
    #[default]
    Rotating,
    /// World angles are fixed at spawn; only the anchor follows the ship.
    Fixed,
}

/// Comparison used when checking a lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpiryRule {
    /// Expired once `elapsed >= lifetime`.
    #[default]
    Inclusive,
    /// Expired once `elapsed > lifetime` (one extra frame of life on exact multiples).
    Exclusive,
}

impl ExpiryRule {
    pub fn is_expired(self, elapsed: f64, lifetime: f64) -> bool {
        match self {
            ExpiryRule::Inclusive => elapsed >= lifetime,
            ExpiryRule::Exclusive => elapsed > lifetime,
        }
    }
}

/// Free-flying projectile families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectileClass {
    /// Sprite-animated straight shot.
    Ballistic,
    /// Rectangular laser bolt.
    Beam,
    /// Self-steering missile.
    Homing,
}

impl ProjectileClass {
    pub fn expiry_rule(self) -> ExpiryRule {
        match self {
            ProjectileClass::Beam => ExpiryRule::Inclusive,
            ProjectileClass::Ballistic | ProjectileClass::Homing => ExpiryRule::Exclusive,
        }
    }
}

/// Which beam family a rendered beam belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeamKind {
    Tether(TetherKind),
    Targeted,
}
