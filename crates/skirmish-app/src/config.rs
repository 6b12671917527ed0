//! Runtime settings read from the environment (and `.env`, when present).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use skirmish_core::constants::{DEFAULT_MAX_DT, TARGET_FPS};
use skirmish_sim::SimConfig;

use crate::game_loop::LoopSettings;

const DEFAULT_LEVEL: u32 = 1;
const DEFAULT_SEED: u64 = 42;
const DEFAULT_CONFIG_DIR: &str = "configs";
/// One minute at the default frame rate. 0 runs until shut down.
const DEFAULT_FRAMES: u64 = 3600;

/// Driver settings.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeConfig {
    pub level: u32,
    pub seed: u64,
    /// Holds `ships/<race>/<type>.json` and `assets.json`.
    pub config_dir: PathBuf,
    /// Frames to run before stopping; 0 means no limit.
    pub frames: u64,
    pub target_fps: u32,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            seed: DEFAULT_SEED,
            config_dir: PathBuf::from(DEFAULT_CONFIG_DIR),
            frames: DEFAULT_FRAMES,
            target_fps: TARGET_FPS,
        }
    }
}

fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

impl RuntimeConfig {
    /// Read `SKIRMISH_LEVEL`, `SKIRMISH_SEED`, `SKIRMISH_CONFIG_DIR`,
    /// `SKIRMISH_FRAMES` and `SKIRMISH_TARGET_FPS`. Unset or unparsable
    /// values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            level: parse_or(lookup("SKIRMISH_LEVEL"), defaults.level),
            seed: parse_or(lookup("SKIRMISH_SEED"), defaults.seed),
            config_dir: lookup("SKIRMISH_CONFIG_DIR")
                .filter(|dir| !dir.trim().is_empty())
                .map_or(defaults.config_dir, PathBuf::from),
            frames: parse_or(lookup("SKIRMISH_FRAMES"), defaults.frames),
            target_fps: parse_or(lookup("SKIRMISH_TARGET_FPS"), defaults.target_fps).max(1),
        }
    }

    pub fn ships_dir(&self) -> PathBuf {
        self.config_dir.join("ships")
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.config_dir.join("assets.json")
    }

    /// Wall-clock duration of one frame at the target rate.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.target_fps.max(1)))
    }

    pub fn loop_settings(&self) -> LoopSettings {
        LoopSettings {
            frame_duration: self.frame_duration(),
            frame_limit: self.frames,
        }
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            seed: self.seed,
            max_dt: DEFAULT_MAX_DT,
        }
    }
}
