//! Simulation module
//!
//! All gameplay logic lives here. Nothing in this module renders, sleeps or
//! reads input devices:
//! - One `tick` per rendered frame
//! - Seeded RNG only
//! - Stable iteration order (insertion order of every container)

pub mod collision;
pub mod entities;
pub mod formation;
pub mod geom;
pub mod state;
pub mod tick;

pub use collision::{ProjectileHit, beam_hits, blast_hits, projectile_unit_hits, ship_contact, unit_at_bottom};
pub use entities::{Beam, Blast, BlastMode, FormationUnit, Projectile, Ship};
pub use formation::{Formation, FormationLayout};
pub use geom::Rect;
pub use state::World;
pub use tick::{HitCause, TickReport, tick};
