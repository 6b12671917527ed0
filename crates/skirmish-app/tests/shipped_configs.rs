//! The configs shipped at the workspace root load and play.

use std::path::PathBuf;

use skirmish_app::providers::{AssetManifest, DirCatalog};
use skirmish_app::sound::SoundBank;
use skirmish_core::ports::dispatch_audio;
use skirmish_sim::levels::LEVEL_IDS;
use skirmish_sim::{SimConfig, SimulationEngine};

fn config_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../configs")
}

#[test]
fn every_level_loads_from_shipped_configs() {
    let manifest = AssetManifest::load(&config_dir().join("assets.json")).unwrap();
    let assets = manifest.assets();
    let catalog = DirCatalog::new(config_dir().join("ships"));
    for level in LEVEL_IDS {
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine.load_level(level, &catalog, &assets).unwrap();
        assert!(engine.player().is_some(), "level {level} has a player");
    }
}

#[test]
fn shipped_level_plays_with_only_known_sounds() {
    let manifest = AssetManifest::load(&config_dir().join("assets.json")).unwrap();
    let catalog = DirCatalog::new(config_dir().join("ships"));
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.load_level(1, &catalog, &manifest.assets()).unwrap();

    let mut bank = SoundBank::new(manifest.sounds.iter().cloned());
    let mut heard: Vec<String> = Vec::new();
    for _ in 0..600 {
        let snapshot = engine.tick(1.0 / 60.0);
        dispatch_audio(&snapshot.audio_events, &mut bank);
        dispatch_audio(&snapshot.audio_events, &mut heard);
    }
    for name in &heard {
        assert!(bank.is_loaded(name), "{name} is not in the manifest");
    }
    assert!(!heard.is_empty(), "ten seconds of combat make noise");
}
