//! ECS components for hecs entities.
//!
//! Components are plain data structs. Game logic lives in systems.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{FrameTable, Rgb};
use crate::weapons::Weapon;

/// Identity of a ship: its faction family and hull type, plus allegiance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    /// Faction tag used for asset and sound lookup. Cosmetic only.
    pub race: String,
    pub ship_type: String,
    pub relationship: Relationship,
}

/// Orientation and handling characteristics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Helm {
    /// Degrees in `[0, 360)`, 0 = up, clockwise positive.
    pub angle: f64,
    pub top_speed: f64,
    /// Velocity added per `accelerate` call.
    pub acceleration: f64,
    /// Degrees turned per rotate call.
    pub rotation_speed: f64,
    /// Fraction of velocity removed per `decelerate` call.
    pub friction: f64,
}

/// Structural state of a ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Hull {
    pub health: f64,
    /// Always > 0.
    pub mass: f64,
    pub size_scale: f64,
}

/// Orientation sprite frames and the frame currently selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub frames: FrameTable,
    pub frame_index: usize,
}

/// The three weapon mounts, indexed by `MountSlot::index`.
#[derive(Debug, Clone, Default)]
pub struct Armament {
    pub mounts: [Option<Weapon>; 3],
}

/// Marker for the input-driven ship.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerShip;

/// Computer-controlled pilot state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AiPilot {
    pub state: AiState,
}

/// Lifecycle shared by every entity. `lifetime: None` lives until killed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Lifespan {
    pub elapsed: f64,
    pub lifetime: Option<f64>,
    pub rule: ExpiryRule,
    /// Once false the entity is skipped by every system and despawned at frame end.
    pub alive: bool,
}

impl Lifespan {
    pub fn unlimited() -> Self {
        Self {
            elapsed: 0.0,
            lifetime: None,
            rule: ExpiryRule::Inclusive,
            alive: true,
        }
    }

    pub fn timed(lifetime: f64, rule: ExpiryRule) -> Self {
        Self {
            elapsed: 0.0,
            lifetime: Some(lifetime),
            rule,
            alive: true,
        }
    }
}

/// Variant-specific projectile state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ProjectileBody {
    /// Sprite-animated straight shot.
    Ballistic {
        frame_count: usize,
        frame_index: usize,
        frame_timer: f64,
        /// Sprites of this type never animate.
        static_sprite: bool,
    },
    /// Straight rectangular laser bolt.
    Beam { length: f64, width: f64, color: Rgb },
    /// Missile that turns toward the nearest hostile ship.
    Homing {
        /// Degrees per update.
        max_rotation: f64,
        frame_count: usize,
        frame_index: usize,
        frame_timer: f64,
    },
}

/// A free-flying shot. Owned by the world, not by the ship that fired it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub projectile_type: String,
    pub body: ProjectileBody,
    /// Facing in degrees.
    pub angle: f64,
    pub damage: f64,
    pub size_scale: f64,
    pub mass: f64,
    /// Radius of the hit disc for sprite projectiles.
    pub hit_radius: f64,
    /// Allegiance of the firing ship. Hits only land on other relationships.
    pub origin: Relationship,
    pub origin_race: String,
    pub hit_sound: Option<String>,
    pub explosion: ExplosionKind,
}

impl Projectile {
    pub fn class(&self) -> ProjectileClass {
        match self.body {
            ProjectileBody::Ballistic { .. } => ProjectileClass::Ballistic,
            ProjectileBody::Beam { .. } => ProjectileClass::Beam,
            ProjectileBody::Homing { .. } => ProjectileClass::Homing,
        }
    }
}

/// Animated explosion effect.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub kind: ExplosionKind,
    pub size_scale: f64,
    pub frame_count: usize,
    /// Seconds each frame is shown.
    pub frame_duration: f64,
    pub current_frame: usize,
}

/// Cosmetic spark with a linear fade to black.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Particle {
    pub color: Rgb,
}
