//! Per-frame simulation tick
//!
//! Advances every live entity exactly once, runs the hit tests and reports
//! what happened. Reacting to a ship hit is the session's job.

use serde::{Deserialize, Serialize};

use super::collision::{beam_hits, blast_hits, projectile_unit_hits, ship_contact, unit_at_bottom};
use super::entities::Ship;
use super::state::{World, remove_indices};
use crate::settings::Settings;

/// What ended the ship's life this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitCause {
    /// A unit overlapped the ship
    Collision,
    /// A unit reached the bottom of the field
    ReachedBottom,
}

/// Outcome of a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Units destroyed by projectiles, blast and beam
    pub units_destroyed: usize,
    /// Formation was empty and has been regenerated
    pub round_cleared: bool,
    /// Formation hit an edge and reversed
    pub reversed: bool,
    /// Terminal event; at most one per tick
    pub ship_hit: Option<HitCause>,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, ship: &mut Ship, settings: &Settings) -> TickReport {
    let mut report = TickReport::default();
    world.time_ticks += 1;

    ship.advance(settings);

    // --- Projectiles ---
    for projectile in &mut world.projectiles {
        projectile.advance(settings);
    }
    world.projectiles.retain(|p| !p.is_off_screen());

    let hits = projectile_unit_hits(&world.projectiles, world.formation.units());
    if !hits.is_empty() {
        let spent: Vec<usize> = hits.iter().map(|h| h.projectile).collect();
        let downed: Vec<usize> = hits.iter().map(|h| h.unit).collect();
        remove_indices(&mut world.projectiles, &spent);
        world.formation.remove_indices(&downed);
        report.units_destroyed += hits.len();
    }

    // Also catches a formation emptied by area weapons on the previous tick
    if world.formation.is_empty() {
        world.reset_round(settings);
        report.round_cleared = true;
        log::info!("Formation cleared, regenerating (tick {})", world.time_ticks);
    }

    // --- Blast ---
    if let Some(blast) = world.blast.as_mut() {
        blast.advance(settings);
        let (center, radius) = (blast.center, blast.radius);
        let before = world.formation.len();
        world
            .formation
            .retain(|unit| !blast_hits(center, radius, &unit.rect));
        report.units_destroyed += before - world.formation.len();
        if blast.is_spent() {
            world.blast = None;
        }
    }

    // --- Beam ---
    if let Some(beam) = world.beam.as_mut() {
        beam.advance(settings, ship);
        let band = beam.rect;
        let half_width = settings.beam_half_effective_width();
        let before = world.formation.len();
        world
            .formation
            .retain(|unit| !beam_hits(&band, half_width, &unit.rect));
        report.units_destroyed += before - world.formation.len();
        if beam.is_spent() {
            world.beam = None;
        }
    }

    // --- Formation ---
    report.reversed = world.formation.advance(settings);

    if ship_contact(&ship.rect, world.formation.units()).is_some() {
        report.ship_hit = Some(HitCause::Collision);
    } else if unit_at_bottom(world.formation.units(), settings.screen_height).is_some() {
        report.ship_hit = Some(HitCause::ReachedBottom);
    }

    report
}
