//! Simulation constants and tuning parameters.

// --- Frame pacing ---

/// Frame rate the driver aims for (Hz).
pub const TARGET_FPS: u32 = 60;

/// Largest timestep the engine will integrate in one frame (seconds).
pub const DEFAULT_MAX_DT: f64 = 0.1;

// --- Ships ---

/// Sprite orientation frames are spaced this many degrees apart.
pub const SHIP_FRAME_STEP_DEG: f64 = 15.0;

/// Distance ahead of the ship center where shots spawn.
pub const MUZZLE_OFFSET: f64 = 10.0;

// --- AI ---

/// Beyond this distance a pilot closes at full thrust.
pub const AI_ENGAGE_RANGE: f64 = 200.0;

/// Inside this distance a pilot breaks away.
pub const AI_EVADE_RANGE: f64 = 100.0;

// --- Collision ---

/// Coefficient of restitution for ship-ship impacts.
pub const SHIP_RESTITUTION: f64 = 0.5;

/// Velocity multiplier applied to both ships after an impulse.
pub const SHIP_COLLISION_DAMPING: f64 = 0.98;

// --- Projectiles ---

/// Hit radius of a sprite projectile whose frames are unknown.
pub const DEFAULT_PROJECTILE_RADIUS: f64 = 5.0;

/// Seconds per animation frame for ballistic sprites.
pub const PROJECTILE_ANIMATION_STEP: f64 = 0.1;

/// Projectile type that always renders its first frame.
pub const STATIC_SPRITE_TYPE: &str = "missile";

/// Homing turn cap for light missiles (degrees per update).
pub const HOMING_TURN_LIGHT: f64 = 0.6;

/// Homing turn cap for heavy missiles (degrees per update).
pub const HOMING_TURN_HEAVY: f64 = 1.5;

/// Projectile types that steer toward targets, with their turn cap.
pub const HOMING_TYPES: [(&str, f64); 4] = [
    ("cm", HOMING_TURN_LIGHT),
    ("amissile", HOMING_TURN_LIGHT),
    ("atomic", HOMING_TURN_HEAVY),
    ("magno", HOMING_TURN_HEAVY),
];

/// Projectile type that fires straight rectangular bolts.
pub const BEAM_TYPE: &str = "laser";

/// Weapon type of the continuous tethered-beam weapon.
pub const TETHER_WEAPON_TYPE: &str = "trazer";

/// Weapon type of the targeted-beam weapon.
pub const TARGETED_BEAM_WEAPON_TYPE: &str = "tspace";

// --- Tethered beams ---

/// Most tethers a single weapon keeps alive.
pub const TETHER_POOL_MAX: usize = 12;

/// Tethers spawned when the trigger is pulled with an empty pool.
pub const TETHER_INITIAL_COUNT: usize = 3;

/// Range of tethers added at each spawn interval.
pub const TETHER_BATCH_MIN: usize = 1;
pub const TETHER_BATCH_MAX: usize = 3;

/// Spawn interval range while the trigger is held (seconds).
pub const TETHER_INTERVAL_MIN: f64 = 0.5;
pub const TETHER_INTERVAL_MAX: f64 = 1.0;

/// Tether lifetime range (seconds).
pub const TETHER_LIFETIME_MIN: f64 = 1.0;
pub const TETHER_LIFETIME_MAX: f64 = 2.0;

/// Tether length range (world units).
pub const TETHER_LENGTH_MIN: f64 = 50.0;
pub const TETHER_LENGTH_MAX: f64 = 100.0;

/// Distance from the ship center to the tether anchor.
pub const TETHER_ANCHOR_RADIUS: f64 = 35.0;

/// Minimum gap between continuous-fire sound cues.
pub const TETHER_SOUND_INTERVAL: f64 = 0.5;

/// Minimum gap between particle bursts from one beam.
pub const BEAM_PARTICLE_COOLDOWN: f64 = 0.2;

/// Zig-zag animation speed of targeted beams (phase units per second).
pub const TARGETED_BEAM_ANIMATION_SPEED: f64 = 300.0;

// --- Particles ---

pub const PARTICLE_BURST_MIN: usize = 1;
pub const PARTICLE_BURST_MAX: usize = 2;

/// Per-axis particle speed bound (world units per second).
pub const PARTICLE_SPEED: f64 = 120.0;

pub const PARTICLE_LIFETIME_MIN: f64 = 0.5;
pub const PARTICLE_LIFETIME_MAX: f64 = 1.0;

// --- Explosions ---

pub const WEAPON_HIT_DURATION: f64 = 0.3;
pub const MISSILE_HIT_DURATION: f64 = 0.6;
pub const SHIP_EXPLOSION_DURATION: f64 = 1.0;
pub const SHIP_EXPLOSION_ANIMATION_SPEED: f64 = 0.3;

// --- Audio ---

/// Shared cue played whenever a ship is destroyed.
pub const SHIP_DESTROYED_SOUND: &str = "explosion";
