//! Named sound bank: the driver's audio sink.

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, warn};

use skirmish_core::ports::AudioSink;

/// Plays cues from a fixed set of loaded names. Headless, so "playing"
/// means counting and tracing. Unknown names warn once and are skipped.
#[derive(Debug, Clone, Default)]
pub struct SoundBank {
    loaded: HashSet<String>,
    plays: BTreeMap<String, u64>,
    warned: HashSet<String>,
}

impl SoundBank {
    pub fn new(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            loaded: names.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn is_loaded(&self, name: &str) -> bool {
        self.loaded.contains(name)
    }

    /// How often a loaded sound has played.
    pub fn play_count(&self, name: &str) -> u64 {
        self.plays.get(name).copied().unwrap_or(0)
    }

    pub fn total_plays(&self) -> u64 {
        self.plays.values().sum()
    }
}

impl AudioSink for SoundBank {
    fn play(&mut self, name: &str) {
        if !self.loaded.contains(name) {
            if self.warned.insert(name.to_string()) {
                warn!(sound = name, "sound not loaded");
            }
            return;
        }
        debug!(sound = name, "play");
        *self.plays.entry(name.to_string()).or_default() += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::events::AudioEvent;
    use skirmish_core::ports::dispatch_audio;

    #[test]
    fn test_plays_loaded_and_skips_unknown() {
        let mut bank = SoundBank::new(["explosion".to_string(), "laser".to_string()]);
        let events = vec![
            AudioEvent::WeaponFired {
                sound: "laser".to_string(),
            },
            AudioEvent::ProjectileHit {
                sound: "thud".to_string(),
            },
            AudioEvent::ShipDestroyed,
            AudioEvent::ShipDestroyed,
        ];
        dispatch_audio(&events, &mut bank);

        assert_eq!(bank.play_count("laser"), 1);
        assert_eq!(bank.play_count("explosion"), 2);
        assert_eq!(bank.play_count("thud"), 0);
        assert_eq!(bank.total_plays(), 3);
        assert!(!bank.is_loaded("thud"));
    }
}
