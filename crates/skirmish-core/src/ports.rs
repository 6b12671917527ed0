//! Narrow interfaces to the simulation's external collaborators.
//!
//! The simulation never parses sprite sheets, plays sound or reads level
//! files itself. It asks these traits instead, and ships in-memory
//! implementations for tests and headless runs.

use std::collections::HashMap;
use std::fmt;

use glam::DVec2;

use crate::config::ShipConfig;
use crate::enums::ExplosionKind;
use crate::error::{AssetError, ConfigError};
use crate::events::AudioEvent;
use crate::geometry::{closest_point_on_segment, heading};
use crate::types::FrameTable;

/// Identifies one sprite sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetKey {
    Ship { race: String, ship_type: String },
    Weapon { race: String, weapon_type: String },
    Explosion(ExplosionKind),
}

impl AssetKey {
    pub fn ship(race: &str, ship_type: &str) -> Self {
        AssetKey::Ship {
            race: race.to_string(),
            ship_type: ship_type.to_string(),
        }
    }

    pub fn weapon(race: &str, weapon_type: &str) -> Self {
        AssetKey::Weapon {
            race: race.to_string(),
            weapon_type: weapon_type.to_string(),
        }
    }
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKey::Ship { race, ship_type } => write!(f, "ship {race}/{ship_type}"),
            AssetKey::Weapon { race, weapon_type } => write!(f, "weapon {race}/{weapon_type}"),
            AssetKey::Explosion(kind) => write!(f, "explosion {}", kind.asset_name()),
        }
    }
}

/// Supplies frame tables for sprite sheets.
pub trait AssetProvider {
    fn frames(&self, key: &AssetKey) -> Result<FrameTable, AssetError>;
}

/// Plays named sounds. Unknown names are tolerated by implementations.
pub trait AudioSink {
    fn play(&mut self, name: &str);
}

/// Recording sink, handy for tests.
impl AudioSink for Vec<String> {
    fn play(&mut self, name: &str) {
        self.push(name.to_string());
    }
}

/// Forward a frame's audio events to a sink.
pub fn dispatch_audio(events: &[AudioEvent], sink: &mut dyn AudioSink) {
    for event in events {
        sink.play(event.sound());
    }
}

/// Supplies the stat record for a race and ship type.
pub trait ShipCatalog {
    fn ship_config(&self, race: &str, ship_type: &str) -> Result<ShipConfig, ConfigError>;
}

/// Asset provider backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    tables: HashMap<AssetKey, FrameTable>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: AssetKey, frames: FrameTable) {
        self.tables.insert(key, frames);
    }

    pub fn with(mut self, key: AssetKey, frames: FrameTable) -> Self {
        self.insert(key, frames);
        self
    }

    /// Register all three explosion sheets with `count` square frames.
    pub fn with_explosions(mut self, count: usize, size: i32) -> Self {
        for kind in [
            ExplosionKind::WeaponHit,
            ExplosionKind::MissileHit,
            ExplosionKind::ShipDestroyed,
        ] {
            self.insert(AssetKey::Explosion(kind), FrameTable::uniform(count, size));
        }
        self
    }
}

impl AssetProvider for MemoryAssets {
    fn frames(&self, key: &AssetKey) -> Result<FrameTable, AssetError> {
        match self.tables.get(key) {
            Some(table) if table.is_empty() => Err(AssetError::Empty(key.clone())),
            Some(table) => Ok(table.clone()),
            None => Err(AssetError::Missing(key.clone())),
        }
    }
}

/// Ship catalog backed by a map.
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    configs: HashMap<(String, String), ShipConfig>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, race: &str, ship_type: &str, config: ShipConfig) {
        self.configs
            .insert((race.to_string(), ship_type.to_string()), config);
    }
}

impl ShipCatalog for MemoryCatalog {
    fn ship_config(&self, race: &str, ship_type: &str) -> Result<ShipConfig, ConfigError> {
        self.configs
            .get(&(race.to_string(), ship_type.to_string()))
            .cloned()
            .ok_or_else(|| ConfigError::UnknownShip {
                race: race.to_string(),
                ship_type: ship_type.to_string(),
            })
    }
}

/// Shape of a damaging object for hit testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitShape {
    Disc { center: DVec2, radius: f64 },
    /// A beam: segment with a half-width.
    Strip {
        start: DVec2,
        end: DVec2,
        half_width: f64,
    },
}

/// What the hit tester knows about a ship.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipHitbox {
    pub center: DVec2,
    pub radius: f64,
    pub angle: f64,
}

/// Shape-accurate intersection test between a ship and a damaging shape.
///
/// Returns the world-space contact point when they overlap.
pub trait HitTester {
    fn contact(&self, ship: &ShipHitbox, shape: &HitShape) -> Option<DVec2>;
}

/// Treats each ship as a disc of its collision radius.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeometricHitTester;

impl HitTester for GeometricHitTester {
    fn contact(&self, ship: &ShipHitbox, shape: &HitShape) -> Option<DVec2> {
        match *shape {
            HitShape::Disc { center, radius } => {
                let delta = center - ship.center;
                let reach = ship.radius + radius;
                if delta.length_squared() >= reach * reach {
                    return None;
                }
                let dir = if delta.length_squared() > 0.0 {
                    delta.normalize()
                } else {
                    heading(ship.angle)
                };
                Some(ship.center + dir * ship.radius.min(delta.length()))
            }
            HitShape::Strip {
                start,
                end,
                half_width,
            } => {
                let closest = closest_point_on_segment(ship.center, start, end);
                let reach = ship.radius + half_width;
                (closest.distance_squared(ship.center) < reach * reach).then_some(closest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hitbox(x: f64, y: f64, radius: f64) -> ShipHitbox {
        ShipHitbox {
            center: DVec2::new(x, y),
            radius,
            angle: 0.0,
        }
    }

    #[test]
    fn disc_contact_sits_on_ship_surface() {
        let tester = GeometricHitTester;
        let shape = HitShape::Disc {
            center: DVec2::new(12.0, 0.0),
            radius: 3.0,
        };
        let point = tester.contact(&hitbox(0.0, 0.0, 10.0), &shape);
        assert_eq!(point, Some(DVec2::new(10.0, 0.0)));
        assert!(tester.contact(&hitbox(0.0, 0.0, 8.0), &shape).is_none());
    }

    #[test]
    fn strip_contact_is_closest_point() {
        let tester = GeometricHitTester;
        let shape = HitShape::Strip {
            start: DVec2::new(-50.0, 5.0),
            end: DVec2::new(50.0, 5.0),
            half_width: 2.5,
        };
        let point = tester.contact(&hitbox(0.0, 0.0, 10.0), &shape);
        assert_eq!(point, Some(DVec2::new(0.0, 5.0)));
        assert!(tester.contact(&hitbox(0.0, -20.0, 10.0), &shape).is_none());
    }

    #[test]
    fn memory_assets_reject_missing_and_empty() {
        let assets = MemoryAssets::new().with(AssetKey::ship("aud", "fighter"), FrameTable::default());
        assert!(matches!(
            assets.frames(&AssetKey::ship("aud", "fighter")),
            Err(AssetError::Empty(_))
        ));
        assert!(matches!(
            assets.frames(&AssetKey::ship("aud", "carrier")),
            Err(AssetError::Missing(_))
        ));
    }
}
