//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `FrameSnapshot`s. Completely headless,
//! enabling deterministic testing.

use std::collections::VecDeque;

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use skirmish_core::commands::PlayerCommand;
use skirmish_core::components::{Helm, Lifespan, PlayerShip};
use skirmish_core::config::ShipBlueprint;
use skirmish_core::constants::DEFAULT_MAX_DT;
use skirmish_core::error::ConfigError;
use skirmish_core::events::{AudioEvent, CombatEvent};
use skirmish_core::ports::{AssetProvider, GeometricHitTester, HitTester, ShipCatalog};
use skirmish_core::state::FrameSnapshot;
use skirmish_core::types::{SimTime, Velocity};

use crate::levels;
use crate::systems;
use crate::targeting;
use crate::world_setup::{self, EffectLibrary, Pilot, ShotRequest};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same frames.
    pub seed: u64,
    /// Largest timestep integrated in one frame (seconds).
    pub max_dt: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_dt: DEFAULT_MAX_DT,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    paused: bool,
    max_dt: f64,
    rng: ChaCha8Rng,
    /// Ships in spawn order. The player, when alive, is first.
    roster: Vec<Entity>,
    effects: EffectLibrary,
    hit_tester: Box<dyn HitTester + Send>,
    command_queue: VecDeque<PlayerCommand>,
    shot_buffer: Vec<ShotRequest>,
    despawn_buffer: Vec<Entity>,
    audio_events: Vec<AudioEvent>,
    combat_events: Vec<CombatEvent>,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            paused: false,
            max_dt: config.max_dt,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            roster: Vec::new(),
            effects: EffectLibrary::default(),
            hit_tester: Box::new(GeometricHitTester),
            command_queue: VecDeque::new(),
            shot_buffer: Vec::new(),
            despawn_buffer: Vec::new(),
            audio_events: Vec::new(),
            combat_events: Vec::new(),
        }
    }

    /// Replace the hit test used for projectile and beam contacts.
    pub fn with_hit_tester(mut self, tester: Box<dyn HitTester + Send>) -> Self {
        self.hit_tester = tester;
        self
    }

    /// Load a built-in level, taking ship stats from `catalog`.
    pub fn load_level(
        &mut self,
        level: u32,
        catalog: &dyn ShipCatalog,
        assets: &dyn AssetProvider,
    ) -> Result<(), ConfigError> {
        let blueprints = levels::blueprints(level, catalog)?;
        self.load_blueprints(&blueprints, assets)?;
        info!(level, ships = self.roster.len(), "level loaded");
        Ok(())
    }

    /// Replace the world with the given ships. The first blueprint is the
    /// player ship. On error the current world is left untouched.
    pub fn load_blueprints(
        &mut self,
        blueprints: &[ShipBlueprint],
        assets: &dyn AssetProvider,
    ) -> Result<(), ConfigError> {
        let effects = EffectLibrary::load(assets)?;
        let mut world = World::new();
        let mut roster = Vec::with_capacity(blueprints.len());
        for (i, blueprint) in blueprints.iter().enumerate() {
            let pilot = if i == 0 { Pilot::Player } else { Pilot::Computer };
            roster.push(world_setup::spawn_ship(
                &mut world,
                blueprint,
                pilot,
                assets,
                &mut self.rng,
            )?);
        }

        self.world = world;
        self.roster = roster;
        self.effects = effects;
        self.time = SimTime::default();
        self.paused = false;
        self.command_queue.clear();
        self.audio_events.clear();
        self.combat_events.clear();
        Ok(())
    }

    /// Add one ship to the running world, at the end of the roster.
    pub fn spawn_ship(
        &mut self,
        blueprint: &ShipBlueprint,
        pilot: Pilot,
        assets: &dyn AssetProvider,
    ) -> Result<Entity, ConfigError> {
        let entity =
            world_setup::spawn_ship(&mut self.world, blueprint, pilot, assets, &mut self.rng)?;
        self.roster.push(entity);
        Ok(entity)
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by `dt` seconds and return the resulting snapshot.
    ///
    /// `dt` is clamped to `[0, max_dt]`; a non-finite `dt` advances nothing.
    pub fn tick(&mut self, dt: f64) -> FrameSnapshot {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, self.max_dt)
        } else {
            0.0
        };

        self.process_commands();

        if !self.paused {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let audio_events = std::mem::take(&mut self.audio_events);
        let combat_events = std::mem::take(&mut self.combat_events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.roster,
            &self.time,
            self.paused,
            audio_events,
            combat_events,
        )
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Live ships in roster order.
    pub fn roster(&self) -> &[Entity] {
        &self.roster
    }

    /// The player ship, while it is alive.
    pub fn player(&self) -> Option<Entity> {
        self.roster
            .iter()
            .copied()
            .find(|&entity| self.world.get::<&PlayerShip>(entity).is_ok())
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access, for scripted setups and tests.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::Pause => {
                self.paused = true;
                return;
            }
            PlayerCommand::Resume => {
                self.paused = false;
                return;
            }
            _ => {}
        }
        if self.paused {
            debug!(?command, "ignored while paused");
            return;
        }
        let Some(player) = self.player() else {
            return;
        };

        if let PlayerCommand::Fire { slot } = command {
            let contacts = targeting::contacts(&self.world, &self.roster);
            systems::weapons::fire_slot(
                &mut self.world,
                player,
                slot,
                None,
                &contacts,
                &mut self.rng,
                &mut self.shot_buffer,
                &mut self.audio_events,
            );
            return;
        }

        let Ok((helm, vel, life)) = self
            .world
            .query_one_mut::<(&mut Helm, &mut Velocity, &Lifespan)>(player)
        else {
            return;
        };
        if !life.alive {
            return;
        }
        match command {
            PlayerCommand::RotateLeft => systems::kinematics::rotate_left(helm),
            PlayerCommand::RotateRight => systems::kinematics::rotate_right(helm),
            PlayerCommand::Accelerate => systems::kinematics::accelerate(helm, vel),
            PlayerCommand::Decelerate => systems::kinematics::decelerate(helm, vel),
            PlayerCommand::Fire { .. } | PlayerCommand::Pause | PlayerCommand::Resume => {}
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f64) {
        // 1. Pilot AI (turn, throttle, fire)
        let contacts = targeting::contacts(&self.world, &self.roster);
        systems::pilot::run(
            &mut self.world,
            &self.roster,
            &contacts,
            &mut self.rng,
            &mut self.shot_buffer,
            &mut self.audio_events,
        );
        // 2. Spawn shots fired this frame
        for shot in self.shot_buffer.drain(..) {
            world_setup::spawn_shot(&mut self.world, shot);
        }
        // 3. Ship kinematics + orientation frames
        systems::kinematics::run(&mut self.world, dt);
        // 4. Weapon upkeep (cooldowns, tethers, targeted beams)
        let contacts = targeting::contacts(&self.world, &self.roster);
        systems::weapons::run(
            &mut self.world,
            &contacts,
            &mut self.rng,
            &mut self.audio_events,
            dt,
        );
        // 5. Ship-ship collisions
        systems::collision::run(&mut self.world, &self.roster);
        // 6. Projectile flight
        let contacts = targeting::contacts(&self.world, &self.roster);
        systems::projectiles::run(&mut self.world, &contacts, dt);
        // 7. Explosions and particles
        systems::effects::run(&mut self.world, dt);
        // 8. Projectile-ship hits
        systems::hits::run(
            &mut self.world,
            &self.roster,
            self.hit_tester.as_ref(),
            &self.effects,
            &mut self.audio_events,
        );
        // 9. Continuous beam damage
        systems::beams::run(
            &mut self.world,
            &self.roster,
            self.hit_tester.as_ref(),
            &mut self.rng,
            dt,
        );
        // 10. Destruction
        systems::destruction::run(
            &mut self.world,
            &self.roster,
            &self.effects,
            &mut self.audio_events,
            &mut self.combat_events,
        );
        // 11. Cleanup
        systems::cleanup::run(&mut self.world, &mut self.roster, &mut self.despawn_buffer);
    }
}
