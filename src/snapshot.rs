//! Per-frame render snapshot
//!
//! A plain-data copy of everything the renderer needs. The renderer never sees
//! live entities.

use std::time::Instant;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::session::GameSession;
use crate::settings::{Rgb, Settings};
use crate::sim::{BlastMode, Rect};

/// A projectile as drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub rect: Rect,
    pub color: Rgb,
}

/// Blast draw state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlastView {
    /// Still travelling: draw the decoy projectile
    Decoy { rect: Rect, color: Rgb },
    /// Detonated: draw a filled circle
    Burst { center: Vec2, radius: f32, color: Rgb },
}

/// Beam draw state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamView {
    pub rect: Rect,
    /// Radius of the ball drawn at the beam tip
    pub tip_radius: f32,
    pub color: Rgb,
}

/// HUD text and overlay placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HudView {
    pub text_color: Rgb,
    pub font_size: u32,
    /// e.g. `ship × 3`, drawn at the top-left corner
    pub lives_label: String,
    /// Zero-padded whole seconds, drawn top-right; `None` while inactive
    pub clock_label: Option<String>,
    pub clock_anchor: Vec2,
    pub game_over_anchor: Vec2,
    pub game_over_font_size: u32,
    pub game_over_color: Rgb,
}

impl HudView {
    fn new(settings: &Settings, lives: u32, elapsed_secs: u64, clock_visible: bool) -> Self {
        let font = settings.font_size as f32;
        Self {
            text_color: settings.mode.text_color(),
            font_size: settings.font_size,
            lives_label: format!("ship × {}", lives),
            clock_label: clock_visible.then(|| format!("{:03}", elapsed_secs)),
            clock_anchor: Vec2::new(settings.screen_width - font * 3.0, 0.0),
            game_over_anchor: Vec2::new(
                settings.screen_width / 2.0 - font * 5.0,
                settings.screen_height / 2.0 - font,
            ),
            game_over_font_size: settings.font_size * 2,
            game_over_color: Rgb::RED,
        }
    }
}

/// Everything the renderer draws for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub background: Rgb,
    pub ship: Rect,
    pub projectiles: Vec<ProjectileView>,
    pub blast: Option<BlastView>,
    pub beam: Option<BeamView>,
    pub units: Vec<Rect>,
    pub lives: u32,
    pub elapsed_secs: u64,
    pub show_game_over: bool,
    pub show_restart: bool,
    pub hud: HudView,
}

impl Snapshot {
    pub fn capture(session: &GameSession, now: Instant) -> Self {
        let settings = session.settings();
        let world = session.world();
        let elapsed_secs = session.elapsed(now).as_secs();

        let blast = world.blast.as_ref().map(|blast| match blast.mode {
            BlastMode::Traveling => BlastView::Decoy {
                rect: blast.decoy.rect,
                color: blast.decoy.color,
            },
            BlastMode::Expanding => BlastView::Burst {
                center: blast.center,
                radius: blast.radius,
                color: settings.blast_color,
            },
        });

        let beam = world.beam.as_ref().map(|beam| BeamView {
            rect: beam.rect,
            tip_radius: settings.beam_half_effective_width(),
            color: settings.beam_color,
        });

        Self {
            background: settings.bg_color,
            ship: session.ship().rect,
            projectiles: world
                .projectiles
                .iter()
                .map(|p| ProjectileView {
                    rect: p.rect,
                    color: p.color,
                })
                .collect(),
            blast,
            beam,
            units: world.formation.units().iter().map(|u| u.rect).collect(),
            lives: session.lives(),
            elapsed_secs,
            show_game_over: session.show_game_over(),
            show_restart: session.show_restart(),
            hud: HudView::new(settings, session.lives(), elapsed_secs, !session.show_restart()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::session::Command;

    #[test]
    fn test_snapshot_of_fresh_session() {
        let t0 = Instant::now();
        let session = GameSession::new(Settings::default(), 5, t0).expect("fits");
        let snap = session.snapshot(t0);
        assert_eq!(snap.units.len(), 36);
        assert!(snap.projectiles.is_empty());
        assert!(snap.show_restart);
        assert!(!snap.show_game_over);
        assert_eq!(snap.hud.clock_label, None);
        assert_eq!(snap.hud.lives_label, "ship × 3");
        assert_eq!(snap.hud.text_color, Rgb::BLACK);
    }

    #[test]
    fn test_snapshot_during_run() {
        let t0 = Instant::now();
        let mut session = GameSession::new(Settings::default(), 5, t0).expect("fits");
        session.handle(Command::Restart, t0);
        session.handle(Command::FireSpread, t0);
        session.handle(Command::SpawnBlast, t0);
        session.handle(Command::SpawnBeam, t0);
        session.update(t0);

        let snap = session.snapshot(t0 + Duration::from_millis(7_500));
        assert_eq!(snap.elapsed_secs, 7);
        assert_eq!(snap.hud.clock_label.as_deref(), Some("007"));
        assert_eq!(snap.projectiles.len(), 5);
        assert!(matches!(snap.blast, Some(BlastView::Decoy { .. })));
        let beam = snap.beam.expect("beam live");
        assert_eq!(beam.tip_radius, 10.0);
        assert_eq!(snap.hud.clock_anchor, Vec2::new(1200.0 - 144.0, 0.0));
    }

    #[test]
    fn test_snapshot_serializes() {
        let t0 = Instant::now();
        let session = GameSession::new(Settings::default(), 5, t0).expect("fits");
        let json = serde_json::to_string(&session.snapshot(t0)).expect("serializable");
        assert!(json.contains("\"show_restart\":true"));
    }
}
