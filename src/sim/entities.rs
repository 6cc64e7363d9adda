//! Entity primitives: ship, projectiles, area weapons and formation units
//!
//! Every entity owns its geometry and exposes an `advance` step that is called
//! exactly once per tick while a run is active.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::consts::*;
use crate::settings::{Rgb, Settings};

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub rect: Rect,
    pub moving_left: bool,
    pub moving_right: bool,
}

impl Ship {
    /// Spawn centered on the bottom edge of the play field
    pub fn new(settings: &Settings) -> Self {
        Self {
            rect: Self::home_rect(settings),
            moving_left: false,
            moving_right: false,
        }
    }

    fn home_rect(settings: &Settings) -> Rect {
        Rect::from_midbottom(
            Vec2::new(settings.screen_width / 2.0, settings.screen_height),
            settings.ship_width,
            settings.ship_height,
        )
    }

    /// Put the ship back at its spawn point
    pub fn center(&mut self, settings: &Settings) {
        self.rect = Self::home_rect(settings);
    }

    /// Apply movement intent, staying inside the horizontal bounds
    pub fn advance(&mut self, settings: &Settings) {
        let mut x = self.rect.x;
        if self.moving_right {
            x += settings.ship_speed;
        }
        if self.moving_left {
            x -= settings.ship_speed;
        }
        let max_x = (settings.screen_width - self.rect.width).max(0.0);
        self.rect.x = x.clamp(0.0, max_x);
    }
}

/// A simple bullet travelling up-screen
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub rect: Rect,
    /// Sideways drift; each tick moves `x_dir * PROJECTILE_DRIFT_RATE` to the left
    pub x_dir: i8,
    pub color: Rgb,
}

impl Projectile {
    /// Spawn at the ship's nose
    pub fn new(settings: &Settings, ship: &Ship, x_dir: i8, color: Rgb) -> Self {
        Self {
            rect: Rect::from_midtop(
                ship.rect.midtop(),
                settings.bullet_width,
                settings.bullet_height,
            ),
            x_dir,
            color,
        }
    }

    pub fn advance(&mut self, settings: &Settings) {
        self.rect.y -= settings.bullet_speed;
        self.rect.x -= self.x_dir as f32 * PROJECTILE_DRIFT_RATE;
    }

    /// Whether the projectile has fully left the top of the field
    pub fn is_off_screen(&self) -> bool {
        self.rect.bottom() <= 0.0
    }
}

/// Blast progression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlastMode {
    /// Decoy projectile flying toward the detonation point
    Traveling,
    /// Radius growing around the detonation point
    Expanding,
}

/// Area weapon that detonates above the ship and grows a destruction circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Blast {
    /// Detonation point, fixed at creation
    pub center: Vec2,
    pub radius: f32,
    /// Ticks left once expanding
    pub limit: u32,
    pub mode: BlastMode,
    /// Visual stand-in while travelling
    pub decoy: Projectile,
    bounce_dir: f32,
    bounce_count: u32,
}

impl Blast {
    /// Create a blast that detonates `offset` pixels above the ship's nose
    pub fn new(settings: &Settings, ship: &Ship, offset: u32) -> Self {
        let nose = ship.rect.midtop();
        let mut decoy = Projectile::new(settings, ship, 0, settings.blast_color);
        decoy.rect.x -= DECOY_SPAWN_SHIFT;

        Self {
            center: Vec2::new(nose.x, nose.y - offset as f32),
            radius: 0.0,
            limit: (settings.blast_max_radius * 5.0 + 50.0) as u32,
            mode: BlastMode::Traveling,
            decoy,
            bounce_dir: 1.0,
            bounce_count: 0,
        }
    }

    pub fn advance(&mut self, settings: &Settings) {
        if self.mode == BlastMode::Expanding {
            self.limit = self.limit.saturating_sub(1);
            if self.radius < settings.blast_max_radius {
                self.radius = (self.radius + BLAST_GROWTH_PER_TICK).min(settings.blast_max_radius);
            }
        }

        self.decoy.advance(settings);
        self.decoy.rect.x += self.bounce_dir;
        self.bounce_count += 1;
        if self.bounce_count == DECOY_BOUNCE_PERIOD {
            self.bounce_count = 0;
            self.bounce_dir = -self.bounce_dir;
        }

        if self.mode == BlastMode::Traveling && self.decoy.rect.y < self.center.y {
            self.mode = BlastMode::Expanding;
        }
    }

    /// Countdown exhausted; the slot should be emptied
    pub fn is_spent(&self) -> bool {
        self.limit == 0
    }
}

/// Area weapon: a vertical band growing up from the ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beam {
    pub rect: Rect,
    /// Ticks left
    pub limit: u32,
}

impl Beam {
    pub fn new(settings: &Settings, ship: &Ship) -> Self {
        Self {
            rect: Rect::new(
                ship.rect.center_x() - settings.beam_width / 2.0,
                ship.rect.top(),
                settings.beam_width,
                0.0,
            ),
            limit: settings.beam_limit,
        }
    }

    /// Follow the ship and extend toward the top of the field
    pub fn advance(&mut self, settings: &Settings, ship: &Ship) {
        let anchor = ship.rect.top();
        let length = (self.rect.height + settings.beam_speed).min(anchor.max(0.0));
        self.rect = Rect::new(
            ship.rect.center_x() - settings.beam_width / 2.0,
            anchor - length,
            settings.beam_width,
            length,
        );
        self.limit = self.limit.saturating_sub(1);
    }

    pub fn is_spent(&self) -> bool {
        self.limit == 0
    }
}

/// A single enemy in the formation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormationUnit {
    pub rect: Rect,
}

impl FormationUnit {
    pub fn new(x: f32, y: f32, settings: &Settings) -> Self {
        Self {
            rect: Rect::new(x, y, settings.alien_width, settings.alien_height),
        }
    }

    /// Shift horizontally by the formation's shared direction
    pub fn advance(&mut self, direction: f32, speed: f32) {
        self.rect.x += direction * speed;
    }

    /// Touching or past either horizontal edge of the field
    pub fn touches_edge(&self, field_width: f32) -> bool {
        self.rect.right() >= field_width || self.rect.left() <= 0.0
    }
}
