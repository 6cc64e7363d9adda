//! Game settings
//!
//! Read once at startup (JSON file or defaults) and never mutated during a run.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// An opaque RGB color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const RED: Rgb = Rgb(255, 0, 0);
}

/// HUD color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorMode::Light => "Light",
            ColorMode::Dark => "Dark",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(ColorMode::Light),
            "dark" => Some(ColorMode::Dark),
            _ => None,
        }
    }

    /// Color used for HUD text drawn over the background
    pub fn text_color(&self) -> Rgb {
        match self {
            ColorMode::Light => Rgb::BLACK,
            ColorMode::Dark => Rgb::WHITE,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Play field ===
    pub screen_width: f32,
    pub screen_height: f32,
    pub bg_color: Rgb,
    pub mode: ColorMode,

    // === Ship ===
    /// Horizontal pixels per tick
    pub ship_speed: f32,
    pub ship_width: f32,
    pub ship_height: f32,
    /// Lives at the start of a run
    pub ship_limit: u32,

    // === Projectiles ===
    /// Vertical pixels per tick
    pub bullet_speed: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub bullet_color: Rgb,
    /// Color of projectiles fired as a spread
    pub spread_color: Rgb,
    /// Maximum number of live projectiles
    pub bullets_allowed: usize,

    // === Formation ===
    pub alien_width: f32,
    pub alien_height: f32,
    /// Horizontal pixels per tick
    pub alien_speed: f32,
    /// Vertical drop applied on every reversal
    pub fleet_drop_speed: f32,
    /// Initial direction sign (1 = right, -1 = left)
    pub fleet_direction: f32,

    // === Blast ===
    /// Radius the blast grows to
    pub blast_max_radius: f32,
    pub blast_color: Rgb,
    /// Detonation height above the ship, drawn uniformly from this range
    pub blast_min_offset: u32,
    pub blast_max_offset: u32,

    // === Beam ===
    pub beam_width: f32,
    /// Tip ball diameter as a multiple of the beam width
    pub beam_ball_width_rate: f32,
    pub beam_color: Rgb,
    /// Upward growth per tick
    pub beam_speed: f32,
    /// Lifetime in ticks
    pub beam_limit: u32,

    // === HUD ===
    pub font_size: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 1200.0,
            screen_height: 800.0,
            bg_color: Rgb(230, 230, 230),
            mode: ColorMode::Light,

            ship_speed: 1.5,
            ship_width: 60.0,
            ship_height: 48.0,
            ship_limit: 3,

            bullet_speed: 1.5,
            bullet_width: 3.0,
            bullet_height: 15.0,
            bullet_color: Rgb(60, 60, 60),
            spread_color: Rgb(0, 150, 150),
            bullets_allowed: 5,

            alien_width: 60.0,
            alien_height: 58.0,
            alien_speed: 1.0,
            fleet_drop_speed: 10.0,
            fleet_direction: 1.0,

            blast_max_radius: 100.0,
            blast_color: Rgb(255, 120, 0),
            blast_min_offset: 100,
            blast_max_offset: 700,

            beam_width: 10.0,
            beam_ball_width_rate: 2.0,
            beam_color: Rgb(200, 0, 200),
            beam_speed: 12.0,
            beam_limit: 120,

            font_size: 48,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate a settings file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject values that would make the simulation meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("ship_speed", self.ship_speed),
            ("ship_width", self.ship_width),
            ("ship_height", self.ship_height),
            ("bullet_speed", self.bullet_speed),
            ("bullet_width", self.bullet_width),
            ("bullet_height", self.bullet_height),
            ("alien_width", self.alien_width),
            ("alien_height", self.alien_height),
            ("alien_speed", self.alien_speed),
            ("blast_max_radius", self.blast_max_radius),
            ("beam_width", self.beam_width),
            ("beam_ball_width_rate", self.beam_ball_width_rate),
            ("beam_speed", self.beam_speed),
            ("ship_limit", self.ship_limit as f32),
            ("bullets_allowed", self.bullets_allowed as f32),
            ("beam_limit", self.beam_limit as f32),
        ];
        // `!(v > 0.0)` also catches NaN
        if let Some(&(field, value)) = positive.iter().find(|(_, v)| !(*v > 0.0)) {
            return Err(ConfigError::NonPositive { field, value });
        }
        if self.fleet_drop_speed < 0.0 {
            return Err(ConfigError::NonPositive {
                field: "fleet_drop_speed",
                value: self.fleet_drop_speed,
            });
        }
        if self.blast_min_offset > self.blast_max_offset {
            return Err(ConfigError::InvertedBlastRange {
                min: self.blast_min_offset,
                max: self.blast_max_offset,
            });
        }
        Ok(())
    }

    /// Half of the beam's tip ball width, used to widen the beam hit corridor
    pub fn beam_half_effective_width(&self) -> f32 {
        self.beam_width * self.beam_ball_width_rate / 2.0
    }

    /// Formation direction sign normalized to ±1
    pub fn fleet_direction_sign(&self) -> f32 {
        if self.fleet_direction < 0.0 { -1.0 } else { 1.0 }
    }
}
