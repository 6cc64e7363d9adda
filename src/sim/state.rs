//! Simulation world state
//!
//! Everything the tick mutates except the ship, which the session owns.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::entities::{Beam, Blast, Projectile, Ship};
use super::formation::Formation;
use crate::consts::SPREAD_X_DIRS;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Entity containers advanced by `tick`
#[derive(Debug, Clone)]
pub struct World {
    /// Seed the blast RNG was created from
    pub seed: u64,
    /// Live projectiles, in firing order
    pub projectiles: Vec<Projectile>,
    /// At most one blast at a time
    pub blast: Option<Blast>,
    /// At most one beam at a time
    pub beam: Option<Beam>,
    pub formation: Formation,
    /// Ticks simulated since creation
    pub time_ticks: u64,
    rng: Pcg32,
}

impl World {
    /// Validate the settings and create a world with a full formation
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        Ok(Self {
            seed,
            projectiles: Vec::with_capacity(settings.bullets_allowed),
            blast: None,
            beam: None,
            formation: Formation::new(settings)?,
            time_ticks: 0,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// Fire a single straight projectile. No-op at the projectile cap.
    pub fn fire(&mut self, settings: &Settings, ship: &Ship) -> bool {
        if self.projectiles.len() >= settings.bullets_allowed {
            return false;
        }
        self.projectiles
            .push(Projectile::new(settings, ship, 0, settings.bullet_color));
        true
    }

    /// Fire a fan of up to five projectiles, center first, stopping at the cap
    ///
    /// Returns how many were fired.
    pub fn fire_spread(&mut self, settings: &Settings, ship: &Ship) -> usize {
        let room = settings
            .bullets_allowed
            .saturating_sub(self.projectiles.len());
        let fired = room.min(SPREAD_X_DIRS.len());
        for &x_dir in &SPREAD_X_DIRS[..fired] {
            self.projectiles
                .push(Projectile::new(settings, ship, x_dir, settings.spread_color));
        }
        fired
    }

    /// Launch a blast unless one is already live
    pub fn spawn_blast(&mut self, settings: &Settings, ship: &Ship) -> bool {
        if self.blast.is_some() {
            return false;
        }
        let offset = self
            .rng
            .random_range(settings.blast_min_offset..=settings.blast_max_offset);
        log::debug!("Blast launched, detonating {} px above the ship", offset);
        self.blast = Some(Blast::new(settings, ship, offset));
        true
    }

    /// Start a beam unless one is already live
    pub fn spawn_beam(&mut self, settings: &Settings, ship: &Ship) -> bool {
        if self.beam.is_some() {
            return false;
        }
        log::debug!("Beam started");
        self.beam = Some(Beam::new(settings, ship));
        true
    }

    /// Drop every projectile and both area weapons
    pub fn clear_ordnance(&mut self) {
        self.projectiles.clear();
        self.blast = None;
        self.beam = None;
    }

    /// Clear ordnance and regenerate the formation grid
    pub fn reset_round(&mut self, settings: &Settings) {
        self.clear_ordnance();
        self.formation.rebuild(settings);
    }
}

/// Remove items by position; indices may be in any order and may repeat
pub(crate) fn remove_indices<T>(items: &mut Vec<T>, indices: &[usize]) {
    let mut index = 0;
    items.retain(|_| {
        let keep = !indices.contains(&index);
        index += 1;
        keep
    });
}
