//! Error types for asset lookup, configuration loading and spawning.

use std::fmt;

use crate::ports::AssetKey;

/// Frame data could not be provided for an asset key.
#[derive(Debug)]
pub enum AssetError {
    Missing(AssetKey),
    Empty(AssetKey),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Missing(key) => write!(f, "no frames registered for {key}"),
            AssetError::Empty(key) => write!(f, "frame table for {key} is empty"),
        }
    }
}

impl std::error::Error for AssetError {}

/// Load-time failure. Fatal for the entity or level being built.
#[derive(Debug)]
pub enum ConfigError {
    UnknownLevel(u32),
    UnknownShip { race: String, ship_type: String },
    Json(serde_json::Error),
    Io { path: String, source: std::io::Error },
    Asset(AssetError),
    InvalidStat { field: &'static str, value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownLevel(level) => write!(f, "unknown level {level}"),
            ConfigError::UnknownShip { race, ship_type } => {
                write!(f, "no ship config for {race}/{ship_type}")
            }
            ConfigError::Json(err) => write!(f, "malformed config: {err}"),
            ConfigError::Io { path, source } => write!(f, "failed to read {path}: {source}"),
            ConfigError::Asset(err) => fmt::Display::fmt(err, f),
            ConfigError::InvalidStat { field, value } => write!(f, "invalid {field}: {value}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Json(err) => Some(err),
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::Asset(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

impl From<AssetError> for ConfigError {
    fn from(err: AssetError) -> Self {
        ConfigError::Asset(err)
    }
}

/// A projectile could not be constructed when its weapon fired.
///
/// Never escapes a frame: the spawn is logged and skipped.
#[derive(Debug)]
pub enum SpawnError {
    NoFrames(String),
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpawnError::NoFrames(weapon) => write!(f, "weapon '{weapon}' has no frames loaded"),
        }
    }
}

impl std::error::Error for SpawnError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::ExplosionKind;
    use std::error::Error;

    #[test]
    fn test_messages_name_the_asset() {
        let err = ConfigError::from(AssetError::Missing(AssetKey::ship("aud", "fighter")));
        assert!(err.to_string().contains("aud"));
        let err = AssetError::Empty(AssetKey::Explosion(ExplosionKind::ShipDestroyed));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn test_io_error_keeps_its_source() {
        let err = ConfigError::Io {
            path: "ships/aud/fighter.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("failed to read ships/aud/fighter.json"));
    }
}
