//! Handle shared between the driver and the game loop thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use skirmish_core::commands::PlayerCommand;
use skirmish_core::state::FrameSnapshot;

/// Commands sent from the driver to the game loop thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    PlayerCommand(PlayerCommand),
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// What the loop did before it stopped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoopSummary {
    pub frames: u64,
    pub elapsed_secs: f64,
    pub ships_destroyed: usize,
    pub sounds_played: u64,
}

/// Latest snapshot, written by the loop after every frame.
pub type SharedSnapshot = Arc<Mutex<Option<FrameSnapshot>>>;

/// A running game loop.
pub struct AppState {
    pub command_tx: mpsc::Sender<GameLoopCommand>,
    pub latest_snapshot: SharedSnapshot,
    pub handle: JoinHandle<LoopSummary>,
}

impl AppState {
    /// Forward a player command. Returns false once the loop has stopped.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.command_tx
            .send(GameLoopCommand::PlayerCommand(command))
            .is_ok()
    }

    /// Clone of the most recent snapshot, if a frame has run.
    pub fn latest(&self) -> Option<FrameSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|snapshot| snapshot.clone())
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Ask the loop to stop and wait for it.
    pub fn shutdown(self) -> std::thread::Result<LoopSummary> {
        let _ = self.command_tx.send(GameLoopCommand::Shutdown);
        self.handle.join()
    }

    /// Wait for the loop to stop on its own.
    pub fn join(self) -> std::thread::Result<LoopSummary> {
        self.handle.join()
    }
}
