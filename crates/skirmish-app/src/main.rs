use anyhow::{anyhow, Context};
use tracing::info;

use skirmish_app::config::RuntimeConfig;
use skirmish_app::game_loop::spawn_game_loop;
use skirmish_app::providers::{AssetManifest, DirCatalog};
use skirmish_app::sound::SoundBank;
use skirmish_app::telemetry;
use skirmish_sim::SimulationEngine;

fn main() -> anyhow::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    telemetry::init_tracing();

    let config = RuntimeConfig::from_env();
    info!(?config, "starting skirmish");

    let manifest_path = config.manifest_path();
    let manifest = AssetManifest::load(&manifest_path)
        .with_context(|| format!("reading asset manifest {}", manifest_path.display()))?;
    let catalog = DirCatalog::new(config.ships_dir());

    let mut engine = SimulationEngine::new(config.sim_config());
    engine
        .load_level(config.level, &catalog, &manifest.assets())
        .with_context(|| format!("loading level {}", config.level))?;

    let sounds = SoundBank::new(manifest.sounds.iter().cloned());
    let app = spawn_game_loop(engine, sounds, config.loop_settings())
        .context("spawning game loop thread")?;
    let summary = app
        .join()
        .map_err(|_| anyhow!("game loop thread panicked"))?;

    info!(
        frames = summary.frames,
        elapsed_secs = summary.elapsed_secs,
        ships_destroyed = summary.ships_destroyed,
        sounds_played = summary.sounds_played,
        "done"
    );
    Ok(())
}
