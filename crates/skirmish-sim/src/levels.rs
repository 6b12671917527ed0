//! Level definitions: hardcoded ship placements per level.
//!
//! A placement names a race and ship type; its stats come from the ship
//! catalog. The first placement of a level is the player ship.

use skirmish_core::config::{LevelEntry, ShipBlueprint};
use skirmish_core::enums::Relationship;
use skirmish_core::error::ConfigError;
use skirmish_core::ports::ShipCatalog;

/// Level ids with a built-in table.
pub const LEVEL_IDS: [u32; 2] = [1, 2];

fn entry(race: &str, ship_type: &str, x: f64, y: f64, relationship: Relationship) -> LevelEntry {
    LevelEntry {
        race: race.to_string(),
        ship_type: ship_type.to_string(),
        x,
        y,
        relationship: Some(relationship),
    }
}

/// Placements for a level, in roster order.
pub fn level_entries(level: u32) -> Result<Vec<LevelEntry>, ConfigError> {
    match level {
        1 => Ok(build_level_one()),
        2 => Ok(build_level_two()),
        other => Err(ConfigError::UnknownLevel(other)),
    }
}

/// Level 1: five `aud` ships against a lone `ish` carrier.
fn build_level_one() -> Vec<LevelEntry> {
    use Relationship::{Foe, Friend};
    vec![
        entry("aud", "carrier", 200.0, 150.0, Friend),
        entry("aud", "cruiser", 500.0, 150.0, Friend),
        entry("aud", "carrier", 100.0, 150.0, Friend),
        entry("aud", "gunship", 250.0, 150.0, Friend),
        entry("aud", "fighter", 250.0, 200.0, Friend),
        entry("ish", "carrier", 400.0, 300.0, Foe),
    ]
}

/// Level 2: a `uns` pair against an `aud` pair.
fn build_level_two() -> Vec<LevelEntry> {
    use Relationship::{Foe, Friend};
    vec![
        entry("uns", "hvc", 100.0, 200.0, Friend),
        entry("uns", "carrier", 500.0, 400.0, Friend),
        entry("aud", "cruiser", 300.0, 350.0, Foe),
        entry("aud", "fighter", 600.0, 450.0, Foe),
    ]
}

/// Merge every placement of a level with its catalog record.
pub fn blueprints(level: u32, catalog: &dyn ShipCatalog) -> Result<Vec<ShipBlueprint>, ConfigError> {
    level_entries(level)?
        .iter()
        .map(|entry| {
            let config = catalog.ship_config(&entry.race, &entry.ship_type)?;
            Ok(ShipBlueprint::from_entry(entry, config))
        })
        .collect()
}
