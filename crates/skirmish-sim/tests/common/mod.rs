//! Shared fixtures for engine-level scenario tests.

#![allow(dead_code)]

use skirmish_sim::core::commands::PlayerCommand;
use skirmish_sim::core::config::{MountConfig, ShipBlueprint, ShipConfig, WeaponConfig};
use skirmish_sim::core::enums::{MountSlot, Relationship};
use skirmish_sim::core::events::AudioEvent;
use skirmish_sim::core::ports::{AssetKey, MemoryAssets};
use skirmish_sim::core::state::FrameSnapshot;
use skirmish_sim::core::types::FrameTable;
use skirmish_sim::{SimConfig, SimulationEngine};

pub const DT: f64 = 1.0 / 60.0;

/// Ship frames are 40 wide (radius 20), weapon frames 10 wide (radius 5).
pub fn assets() -> MemoryAssets {
    let mut assets = MemoryAssets::new().with_explosions(8, 64);
    for (race, ship_type) in [("aud", "fighter"), ("ish", "carrier"), ("ish", "fighter")] {
        assets.insert(AssetKey::ship(race, ship_type), FrameTable::uniform(24, 40));
    }
    for weapon_type in ["bullet", "cm"] {
        assets.insert(AssetKey::weapon("aud", weapon_type), FrameTable::uniform(4, 10));
    }
    assets
}

pub fn bullet(damage: f64) -> WeaponConfig {
    WeaponConfig {
        damage: Some(damage),
        speed: 600.0,
        fire_sound: Some("shot".to_string()),
        hit_sound: Some("hit".to_string()),
        ..WeaponConfig::of_type("bullet")
    }
}

pub fn primary(weapon: WeaponConfig) -> MountConfig {
    MountConfig {
        primary: Some(weapon),
        ..Default::default()
    }
}

/// A ship that never moves and carries the given mounts.
pub fn hulk(relationship: Relationship, health: f64, weapons: MountConfig) -> ShipConfig {
    ShipConfig {
        relationship,
        health,
        top_speed: 0.0,
        weapons,
        ..Default::default()
    }
}

pub fn engine(blueprints: &[ShipBlueprint]) -> SimulationEngine {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine
        .load_blueprints(blueprints, &assets())
        .expect("fixture blueprints load");
    engine
}

pub fn fire_primary(engine: &mut SimulationEngine) {
    engine.queue_command(PlayerCommand::Fire {
        slot: MountSlot::Primary,
    });
}

pub fn count_fired(snapshot: &FrameSnapshot) -> usize {
    snapshot
        .audio_events
        .iter()
        .filter(|event| matches!(event, AudioEvent::WeaponFired { .. }))
        .count()
}
