//! File-backed ship catalog and asset manifest.
//!
//! Ship stats live one file per ship at `<ships>/<race>/<type>.json`.
//! Frame tables and the loaded sound names come from a single JSON
//! manifest:
//!
//! ```json
//! {
//!   "ships":      { "aud/fighter": [{ "left": 0, "top": 0, "right": 40, "bottom": 40 }] },
//!   "weapons":    { "aud/bullet":  [{ "left": 0, "top": 0, "right": 10, "bottom": 10 }] },
//!   "explosions": { "ship_explosion": [{ "left": 0, "top": 0, "right": 64, "bottom": 64 }] },
//!   "sounds":     ["explosion", "bullet_fire"]
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use skirmish_core::config::ShipConfig;
use skirmish_core::enums::ExplosionKind;
use skirmish_core::error::ConfigError;
use skirmish_core::ports::{AssetKey, MemoryAssets, ShipCatalog};
use skirmish_core::types::{FrameRect, FrameTable};

const EXPLOSION_KINDS: [ExplosionKind; 3] = [
    ExplosionKind::WeaponHit,
    ExplosionKind::MissileHit,
    ExplosionKind::ShipDestroyed,
];

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Ship catalog reading one JSON stat record per race and type.
#[derive(Debug, Clone)]
pub struct DirCatalog {
    root: PathBuf,
}

impl DirCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, race: &str, ship_type: &str) -> PathBuf {
        self.root.join(race).join(format!("{ship_type}.json"))
    }
}

impl ShipCatalog for DirCatalog {
    fn ship_config(&self, race: &str, ship_type: &str) -> Result<ShipConfig, ConfigError> {
        let path = self.path_for(race, ship_type);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(ConfigError::UnknownShip {
                    race: race.to_string(),
                    ship_type: ship_type.to_string(),
                });
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        let config: ShipConfig = serde_json::from_str(&text)?;
        debug!(race, ship_type, path = %path.display(), "loaded ship config");
        Ok(config)
    }
}

/// Frame tables keyed `race/type`, explosion sheets keyed by asset name,
/// and the sound names the driver has loaded.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetManifest {
    #[serde(default)]
    pub ships: BTreeMap<String, Vec<FrameRect>>,
    #[serde(default)]
    pub weapons: BTreeMap<String, Vec<FrameRect>>,
    #[serde(default)]
    pub explosions: BTreeMap<String, Vec<FrameRect>>,
    #[serde(default)]
    pub sounds: Vec<String>,
}

impl AssetManifest {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::parse(&read(path)?)
    }

    pub fn parse(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the in-memory provider. Keys that are not `race/type`, and
    /// unknown explosion names, are skipped with a warning.
    pub fn assets(&self) -> MemoryAssets {
        let mut assets = MemoryAssets::new();
        let mut insert_keyed = |section: &str, tables: &BTreeMap<String, Vec<FrameRect>>| {
            for (key, frames) in tables {
                let Some((race, name)) = key.split_once('/') else {
                    warn!(section, %key, "manifest key is not race/type");
                    continue;
                };
                let asset_key = if section == "ships" {
                    AssetKey::ship(race, name)
                } else {
                    AssetKey::weapon(race, name)
                };
                assets.insert(asset_key, FrameTable::new(frames.clone()));
            }
        };
        insert_keyed("ships", &self.ships);
        insert_keyed("weapons", &self.weapons);

        for (name, frames) in &self.explosions {
            match EXPLOSION_KINDS.iter().find(|kind| kind.asset_name() == name) {
                Some(&kind) => assets.insert(AssetKey::Explosion(kind), FrameTable::new(frames.clone())),
                None => warn!(%name, "unknown explosion sheet"),
            }
        }
        assets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::enums::Relationship;
    use skirmish_core::error::AssetError;
    use skirmish_core::ports::AssetProvider;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("skirmish-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_catalog_reads_ship_files() {
        let root = scratch_dir("catalog");
        fs::create_dir_all(root.join("aud")).unwrap();
        fs::write(
            root.join("aud").join("fighter.json"),
            r#"{ "health": 60, "relationship": "friend",
                 "weapons": { "primary": { "type": "bullet", "fire_rate": 0.25 } } }"#,
        )
        .unwrap();

        let catalog = DirCatalog::new(&root);
        let config = catalog.ship_config("aud", "fighter").unwrap();
        assert_eq!(config.health, 60.0);
        assert_eq!(config.relationship, Relationship::Friend);
        assert_eq!(config.top_speed, 5.0);
        let primary = config.weapons.primary.unwrap();
        assert_eq!(primary.weapon_type, "bullet");
        assert_eq!(primary.fire_rate(), 0.25);

        assert!(matches!(
            catalog.ship_config("aud", "carrier"),
            Err(ConfigError::UnknownShip { .. })
        ));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_catalog_reports_malformed_json() {
        let root = scratch_dir("malformed");
        fs::create_dir_all(root.join("ish")).unwrap();
        fs::write(root.join("ish").join("carrier.json"), "{ health: }").unwrap();
        let result = DirCatalog::new(&root).ship_config("ish", "carrier");
        assert!(matches!(result, Err(ConfigError::Json(_))));
        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn test_manifest_builds_provider() {
        let manifest = AssetManifest::parse(
            r#"{
                "ships": { "aud/fighter": [{ "left": 0, "top": 0, "right": 40, "bottom": 40 }],
                           "broken": [] },
                "weapons": { "aud/bullet": [] },
                "explosions": {
                    "ship_explosion": [{ "left": 0, "top": 0, "right": 64, "bottom": 64 }],
                    "mystery": []
                },
                "sounds": ["explosion"]
            }"#,
        )
        .unwrap();
        let assets = manifest.assets();

        let ship = assets.frames(&AssetKey::ship("aud", "fighter")).unwrap();
        assert_eq!(ship.len(), 1);
        assert_eq!(ship.get(0).unwrap().width(), 40.0);
        assert!(assets
            .frames(&AssetKey::Explosion(ExplosionKind::ShipDestroyed))
            .is_ok());
        assert!(matches!(
            assets.frames(&AssetKey::weapon("aud", "bullet")),
            Err(AssetError::Empty(_))
        ));
        assert!(matches!(
            assets.frames(&AssetKey::Explosion(ExplosionKind::WeaponHit)),
            Err(AssetError::Missing(_))
        ));
        assert_eq!(manifest.sounds, vec!["explosion".to_string()]);
    }

    #[test]
    fn test_missing_manifest_is_io_error() {
        let result = AssetManifest::load(Path::new("/nonexistent/skirmish/assets.json"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
