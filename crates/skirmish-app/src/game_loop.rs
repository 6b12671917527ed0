//! Game loop thread: ticks the simulation at a fixed target rate.
//!
//! Commands arrive via `mpsc` channel. Each frame's audio goes to the sound
//! bank and the snapshot is stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tracing::info;

use skirmish_core::events::CombatEvent;
use skirmish_core::ports::dispatch_audio;
use skirmish_core::state::FrameSnapshot;
use skirmish_sim::SimulationEngine;

use crate::sound::SoundBank;
use crate::state::{AppState, GameLoopCommand, LoopSummary, SharedSnapshot};

/// Pacing for the loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopSettings {
    pub frame_duration: Duration,
    /// Frames to run before stopping; 0 means until shutdown.
    pub frame_limit: u64,
}

/// Spawns the game loop in a new thread around a loaded engine.
pub fn spawn_game_loop(
    engine: SimulationEngine,
    sounds: SoundBank,
    settings: LoopSettings,
) -> io::Result<AppState> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let latest_snapshot: SharedSnapshot = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest_snapshot);

    let handle = std::thread::Builder::new()
        .name("skirmish-game-loop".into())
        .spawn(move || run_game_loop(engine, sounds, settings, cmd_rx, &shared))?;

    Ok(AppState {
        command_tx: cmd_tx,
        latest_snapshot,
        handle,
    })
}

/// The game loop. Runs until Shutdown, channel disconnect or the frame limit.
fn run_game_loop(
    mut engine: SimulationEngine,
    mut sounds: SoundBank,
    settings: LoopSettings,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    latest_snapshot: &Mutex<Option<FrameSnapshot>>,
) -> LoopSummary {
    let mut summary = LoopSummary::default();
    let mut last_frame = Instant::now();
    let mut next_frame_time = last_frame;

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::PlayerCommand(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    return finish(summary, &sounds);
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance by the wall-clock time since the previous frame
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;
        let snapshot = engine.tick(dt);

        // 3. Play this frame's audio and report destroyed ships
        dispatch_audio(&snapshot.audio_events, &mut sounds);
        for CombatEvent::ShipDestroyed {
            race,
            ship_type,
            relationship,
            player,
            ..
        } in &snapshot.combat_events
        {
            info!(%race, %ship_type, ?relationship, player, "ship lost");
        }
        summary.frames += 1;
        summary.elapsed_secs = snapshot.time.elapsed_secs;
        summary.ships_destroyed += snapshot.combat_events.len();

        // 4. Store latest snapshot for polling
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        if settings.frame_limit > 0 && summary.frames >= settings.frame_limit {
            return finish(summary, &sounds);
        }

        // 5. Sleep until the next frame
        next_frame_time += settings.frame_duration;
        let now = Instant::now();
        if next_frame_time > now {
            std::thread::sleep(next_frame_time - now);
        } else if now - next_frame_time > settings.frame_duration * 2 {
            // Too far behind: reset to avoid catch-up spiral
            next_frame_time = now;
        }
    }
}

fn finish(mut summary: LoopSummary, sounds: &SoundBank) -> LoopSummary {
    summary.sounds_played = sounds.total_plays();
    info!(
        frames = summary.frames,
        elapsed_secs = summary.elapsed_secs,
        ships_destroyed = summary.ships_destroyed,
        "game loop stopped"
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::commands::PlayerCommand;
    use skirmish_core::config::{MountConfig, ShipBlueprint, ShipConfig, WeaponConfig};
    use skirmish_core::enums::{MountSlot, Relationship};
    use skirmish_core::ports::{AssetKey, MemoryAssets};
    use skirmish_core::types::FrameTable;
    use skirmish_sim::SimConfig;

    fn loaded_engine() -> SimulationEngine {
        let assets = MemoryAssets::new()
            .with_explosions(4, 64)
            .with(AssetKey::ship("aud", "fighter"), FrameTable::uniform(24, 40));
        let laser = WeaponConfig {
            fire_sound: Some("laser".to_string()),
            ..WeaponConfig::of_type("laser")
        };
        let config = ShipConfig {
            relationship: Relationship::Friend,
            weapons: MountConfig {
                primary: Some(laser),
                ..Default::default()
            },
            ..Default::default()
        };
        let mut engine = SimulationEngine::new(SimConfig::default());
        engine
            .load_blueprints(&[ShipBlueprint::new("aud", "fighter", 0.0, 0.0, config)], &assets)
            .unwrap();
        engine
    }

    fn fast() -> LoopSettings {
        LoopSettings {
            frame_duration: Duration::from_millis(1),
            frame_limit: 0,
        }
    }

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<GameLoopCommand>();

        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Accelerate))
            .unwrap();
        tx.send(GameLoopCommand::PlayerCommand(PlayerCommand::Pause))
            .unwrap();
        tx.send(GameLoopCommand::Shutdown).unwrap();

        let commands: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            commands,
            vec![
                GameLoopCommand::PlayerCommand(PlayerCommand::Accelerate),
                GameLoopCommand::PlayerCommand(PlayerCommand::Pause),
                GameLoopCommand::Shutdown,
            ]
        );
    }

    #[test]
    fn test_loop_stops_at_frame_limit() {
        let app = spawn_game_loop(
            loaded_engine(),
            SoundBank::default(),
            LoopSettings {
                frame_limit: 5,
                ..fast()
            },
        )
        .unwrap();
        let latest = app.latest_snapshot.clone();
        let summary = app.join().unwrap();
        assert_eq!(summary.frames, 5);
        let snapshot = latest.lock().unwrap().clone().unwrap();
        assert_eq!(snapshot.time.tick, 5);
    }

    #[test]
    fn test_commands_reach_engine_and_sounds_play() {
        let app = spawn_game_loop(
            loaded_engine(),
            SoundBank::new(["laser".to_string()]),
            fast(),
        )
        .unwrap();
        assert!(app.send(PlayerCommand::Fire {
            slot: MountSlot::Primary,
        }));
        let deadline = Instant::now() + Duration::from_secs(5);
        while app
            .latest()
            .map_or(true, |snapshot| snapshot.projectiles.is_empty())
        {
            assert!(Instant::now() < deadline, "shot never appeared");
            std::thread::sleep(Duration::from_millis(1));
        }
        let summary = app.shutdown().unwrap();
        assert!(summary.frames > 0);
        assert_eq!(summary.sounds_played, 1);
    }

    #[test]
    fn test_dropping_the_sender_stops_the_loop() {
        let app = spawn_game_loop(loaded_engine(), SoundBank::default(), fast()).unwrap();
        let AppState {
            command_tx, handle, ..
        } = app;
        drop(command_tx);
        assert!(handle.join().is_ok());
    }
}
