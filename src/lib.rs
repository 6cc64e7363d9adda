//! Alien Invasion - frame-driven arcade shooter core
//!
//! Core modules:
//! - `sim`: Entities, formation movement, hit tests and the per-frame tick
//! - `session`: Lives, run phases and input command handling
//! - `snapshot`: Read-only view handed to the renderer each frame
//! - `settings`: Per-run configuration (JSON or defaults)

pub mod error;
pub mod session;
pub mod settings;
pub mod sim;
pub mod snapshot;

pub use error::ConfigError;
pub use session::{Command, Flow, GameSession, SessionPhase};
pub use settings::{ColorMode, Rgb, Settings};
pub use snapshot::Snapshot;

/// Fixed simulation constants (everything tunable lives in `Settings`)
pub mod consts {
    use std::time::Duration;

    /// Sideways pixels per tick for each unit of projectile `x_dir`
    pub const PROJECTILE_DRIFT_RATE: f32 = 0.3;
    /// Drift values of a spread shot, center first
    pub const SPREAD_X_DIRS: [i8; 5] = [0, -1, 1, -2, 2];

    /// Blast radius growth per tick while expanding
    pub const BLAST_GROWTH_PER_TICK: f32 = 0.2;
    /// Ticks between sideways flips of the blast decoy
    pub const DECOY_BOUNCE_PERIOD: u32 = 8;
    /// Decoy starts this far left of the ship's nose
    pub const DECOY_SPAWN_SHIFT: f32 = 4.0;

    /// Pulls the beam hit corridor back in from the tip ball's full width
    pub const BEAM_HIT_TOLERANCE: f32 = 5.0;

    /// Upper bound on formation size
    pub const MAX_FORMATION_UNITS: usize = 10_000;

    /// Freeze after losing a life
    pub const SHIP_HIT_PAUSE: Duration = Duration::from_millis(500);

    /// Frame period of the headless driver (60 Hz)
    pub const FRAME_PERIOD: Duration = Duration::from_micros(16_667);
}
