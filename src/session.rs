//! Game session: lives, run phases and input handling
//!
//! The session owns the ship and the world, feeds input commands into them and
//! reacts to the terminal event reported by `tick`.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::consts::SHIP_HIT_PAUSE;
use crate::error::ConfigError;
use crate::settings::Settings;
use crate::sim::{HitCause, Ship, TickReport, World, tick};
use crate::snapshot::Snapshot;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Before the first run or after the last life was lost
    Inactive,
    /// Ticking every frame
    Active,
    /// Frozen after losing a life; resumes on the first update at or past the deadline
    Paused { resume_at: Instant },
}

/// Discrete input delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start (`true`) or stop (`false`) moving left
    MoveLeft(bool),
    /// Start (`true`) or stop (`false`) moving right
    MoveRight(bool),
    Fire,
    FireSpread,
    SpawnBlast,
    SpawnBeam,
    /// Start a new run (only while inactive)
    Restart,
    Quit,
}

/// Whether the driver loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Top-level game state
#[derive(Debug, Clone)]
pub struct GameSession {
    settings: Settings,
    ship: Ship,
    world: World,
    lives: u32,
    phase: SessionPhase,
    run_started: Instant,
}

impl GameSession {
    /// Validate the settings and build an inactive session with a full formation
    pub fn new(settings: Settings, seed: u64, now: Instant) -> Result<Self, ConfigError> {
        let world = World::new(&settings, seed)?;
        let layout = world.formation.layout();
        log::info!(
            "Session ready: {}x{} field, {} columns x {} rows, seed {}",
            settings.screen_width,
            settings.screen_height,
            layout.columns,
            layout.rows,
            seed
        );

        Ok(Self {
            ship: Ship::new(&settings),
            lives: settings.ship_limit,
            settings,
            world,
            phase: SessionPhase::Inactive,
            run_started: now,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    /// Time since the current run started
    pub fn elapsed(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.run_started)
    }

    /// Out of lives; the game-over overlay should be shown
    pub fn show_game_over(&self) -> bool {
        self.lives == 0
    }

    /// The restart control should be shown
    pub fn show_restart(&self) -> bool {
        self.phase == SessionPhase::Inactive
    }

    /// Apply one input command
    ///
    /// Gameplay commands are ignored unless the session is active, and restart
    /// is ignored unless it is inactive. Movement flags still track key state
    /// during the ship-hit pause. Quit is always honored.
    pub fn handle(&mut self, command: Command, now: Instant) -> Flow {
        match (command, self.phase) {
            (Command::Quit, _) => {
                log::info!("Quit requested");
                return Flow::Quit;
            }
            (Command::Restart, SessionPhase::Inactive) => self.start_run(now),
            (_, SessionPhase::Active)
            | (Command::MoveLeft(_) | Command::MoveRight(_), SessionPhase::Paused { .. }) => {
                self.apply_gameplay(command)
            }
            _ => {}
        }
        Flow::Continue
    }

    fn apply_gameplay(&mut self, command: Command) {
        let settings = &self.settings;
        match command {
            Command::MoveLeft(on) => self.ship.moving_left = on,
            Command::MoveRight(on) => self.ship.moving_right = on,
            Command::Fire => {
                self.world.fire(settings, &self.ship);
            }
            Command::FireSpread => {
                self.world.fire_spread(settings, &self.ship);
            }
            Command::SpawnBlast => {
                self.world.spawn_blast(settings, &self.ship);
            }
            Command::SpawnBeam => {
                self.world.spawn_beam(settings, &self.ship);
            }
            Command::Restart | Command::Quit => {}
        }
    }

    fn start_run(&mut self, now: Instant) {
        self.world.clear_ordnance();
        self.world.formation.rebuild(&self.settings);
        self.lives = self.settings.ship_limit;
        self.run_started = now;
        self.phase = SessionPhase::Active;
        log::info!("Run started with {} lives", self.lives);
    }

    /// Advance one frame if the session is running
    ///
    /// Returns the tick report, or `None` if nothing was simulated.
    pub fn update(&mut self, now: Instant) -> Option<TickReport> {
        match self.phase {
            SessionPhase::Inactive => return None,
            SessionPhase::Paused { resume_at } if now < resume_at => return None,
            SessionPhase::Paused { .. } => {
                log::debug!("Resuming after ship hit");
                self.phase = SessionPhase::Active;
            }
            SessionPhase::Active => {}
        }

        let report = tick(&mut self.world, &mut self.ship, &self.settings);
        if let Some(cause) = report.ship_hit {
            self.on_ship_hit(cause, now);
        }
        Some(report)
    }

    fn on_ship_hit(&mut self, cause: HitCause, now: Instant) {
        self.lives = self.lives.saturating_sub(1);

        if self.lives > 0 {
            self.world.reset_round(&self.settings);
            self.ship.center(&self.settings);
            self.phase = SessionPhase::Paused {
                resume_at: now + SHIP_HIT_PAUSE,
            };
            log::info!("Ship hit ({:?}), {} lives left", cause, self.lives);
        } else {
            self.phase = SessionPhase::Inactive;
            log::info!(
                "Ship hit ({:?}), game over after {}s",
                cause,
                self.elapsed(now).as_secs()
            );
        }
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self, now: Instant) -> Snapshot {
        Snapshot::capture(self, now)
    }
}
