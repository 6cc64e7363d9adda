//! Enemy formation: grid layout, edge detection and lockstep movement

use serde::{Deserialize, Serialize};

use super::entities::FormationUnit;
use super::state::remove_indices;
use crate::consts::MAX_FORMATION_UNITS;
use crate::error::ConfigError;
use crate::settings::Settings;

/// Grid dimensions derived from the play field and unit size
///
/// Units are spaced one unit-width apart horizontally and one unit-height
/// apart vertically, leaving a margin at the sides and room above the ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormationLayout {
    pub columns: u32,
    pub rows: u32,
}

impl FormationLayout {
    pub fn from_settings(settings: &Settings) -> Result<Self, ConfigError> {
        let unit_w = settings.alien_width;
        let unit_h = settings.alien_height;

        let available_x = settings.screen_width - 2.0 * unit_w;
        let columns = (available_x / (2.0 * unit_w)).floor() as i64;

        let available_y = settings.screen_height - 3.0 * unit_h - settings.ship_height;
        let rows = (available_y / (2.0 * unit_h)).floor() as i64;

        if columns <= 0 || rows <= 0 {
            return Err(ConfigError::FormationDoesNotFit {
                width: settings.screen_width,
                height: settings.screen_height,
                columns,
                rows,
            });
        }

        let units = columns.checked_mul(rows);
        match units {
            Some(units) if units <= MAX_FORMATION_UNITS as i64 => Ok(Self {
                columns: columns as u32,
                rows: rows as u32,
            }),
            _ => Err(ConfigError::FormationTooLarge {
                columns,
                rows,
                max: MAX_FORMATION_UNITS,
            }),
        }
    }

    pub fn unit_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// The live set of enemy units plus their shared direction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
    units: Vec<FormationUnit>,
    /// Horizontal direction sign shared by every unit (±1)
    direction: f32,
    layout: FormationLayout,
}

impl Formation {
    /// Build a full formation. Fails if the grid cannot fit the field.
    pub fn new(settings: &Settings) -> Result<Self, ConfigError> {
        let layout = FormationLayout::from_settings(settings)?;
        let mut formation = Self {
            units: Vec::with_capacity(layout.unit_count()),
            direction: settings.fleet_direction_sign(),
            layout,
        };
        formation.rebuild(settings);
        Ok(formation)
    }

    /// Discard every unit and regenerate the initial grid
    ///
    /// The direction sign is kept: a fresh grid continues in whatever
    /// direction the previous one was heading.
    pub fn rebuild(&mut self, settings: &Settings) {
        let unit_w = settings.alien_width;
        let unit_h = settings.alien_height;

        self.units.clear();
        for row in 0..self.layout.rows {
            for column in 0..self.layout.columns {
                let x = unit_w + 2.0 * unit_w * column as f32;
                let y = unit_h + 2.0 * unit_h * row as f32;
                self.units.push(FormationUnit::new(x, y, settings));
            }
        }
    }

    pub fn units(&self) -> &[FormationUnit] {
        &self.units
    }

    pub fn direction(&self) -> f32 {
        self.direction
    }

    pub fn layout(&self) -> FormationLayout {
        self.layout
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }

    /// Keep only the units for which `keep` returns true
    pub fn retain(&mut self, keep: impl FnMut(&FormationUnit) -> bool) {
        self.units.retain(keep);
    }

    /// Remove units by index; indices may be in any order
    pub fn remove_indices(&mut self, indices: &[usize]) {
        remove_indices(&mut self.units, indices);
    }

    /// Edge check, then lockstep move. Returns true if the formation reversed.
    pub fn advance(&mut self, settings: &Settings) -> bool {
        let reversed = self.check_edges(settings);
        for unit in &mut self.units {
            unit.advance(self.direction, settings.alien_speed);
        }
        reversed
    }

    /// Reverse at most once, on the first unit found touching an edge
    fn check_edges(&mut self, settings: &Settings) -> bool {
        if self
            .units
            .iter()
            .any(|unit| unit.touches_edge(settings.screen_width))
        {
            self.reverse(settings);
            true
        } else {
            false
        }
    }

    /// Drop every unit and flip the shared direction
    fn reverse(&mut self, settings: &Settings) {
        for unit in &mut self.units {
            unit.rect.y += settings.fleet_drop_speed;
        }
        self.direction = -self.direction;
        log::debug!("Formation reversed, now heading {}", self.direction);
    }

    #[cfg(test)]
    pub(crate) fn push(&mut self, unit: FormationUnit) {
        self.units.push(unit);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let layout = FormationLayout::from_settings(&Settings::default()).expect("fits");
        // (1200 - 120) / 120 = 9 columns; (800 - 174 - 48) / 116 = 4 rows
        assert_eq!(layout, FormationLayout { columns: 9, rows: 4 });
        assert_eq!(layout.unit_count(), 36);
    }

    #[test]
    fn test_layout_too_small() {
        let settings = Settings {
            screen_width: 150.0,
            ..Default::default()
        };
        let err = FormationLayout::from_settings(&settings).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::FormationDoesNotFit { columns: 0, .. }
        ));
    }

    #[test]
    fn test_layout_too_large() {
        let settings = Settings {
            screen_width: 2e6,
            screen_height: 2e6,
            alien_width: 1.0,
            alien_height: 1.0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
        let err = FormationLayout::from_settings(&settings).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::FormationTooLarge {
                max: MAX_FORMATION_UNITS,
                ..
            }
        ));
    }

    #[test]
    fn test_grid_positions() {
        let settings = Settings::default();
        let formation = Formation::new(&settings).expect("fits");
        assert_eq!(formation.len(), 36);
        let first = &formation.units()[0];
        assert_eq!((first.rect.x, first.rect.y), (60.0, 58.0));
        let second = &formation.units()[1];
        assert_eq!(second.rect.x, 180.0);
        let next_row = &formation.units()[9];
        assert_eq!(next_row.rect.y, 58.0 + 116.0);
    }

    #[test]
    fn test_moves_in_lockstep() {
        let settings = Settings::default();
        let mut formation = Formation::new(&settings).expect("fits");
        let before: Vec<f32> = formation.units().iter().map(|u| u.rect.x).collect();
        assert!(!formation.advance(&settings));
        for (unit, x) in formation.units().iter().zip(before) {
            assert_eq!(unit.rect.x, x + settings.alien_speed);
        }
    }

    #[test]
    fn test_reversal_drops_once() {
        let settings = Settings::default();
        let mut formation = Formation::new(&settings).expect("fits");
        formation.clear();
        // Two units touching opposite edges in the same tick
        formation.push(FormationUnit::new(0.0, 100.0, &settings));
        formation.push(FormationUnit::new(
            settings.screen_width - settings.alien_width,
            100.0,
            &settings,
        ));

        assert!(formation.advance(&settings));
        assert_eq!(formation.direction(), -1.0);
        for unit in formation.units() {
            assert_eq!(unit.rect.y, 100.0 + settings.fleet_drop_speed);
        }
        // Movement uses the flipped direction
        assert_eq!(formation.units()[1].rect.x, settings.screen_width - settings.alien_width - 1.0);
    }

    #[test]
    fn test_rebuild_keeps_direction() {
        let settings = Settings::default();
        let mut formation = Formation::new(&settings).expect("fits");
        formation.clear();
        formation.push(FormationUnit::new(0.0, 100.0, &settings));
        formation.advance(&settings);
        formation.rebuild(&settings);
        assert_eq!(formation.len(), 36);
        assert_eq!(formation.direction(), -1.0);
    }

    #[test]
    fn test_remove_indices() {
        let settings = Settings::default();
        let mut formation = Formation::new(&settings).expect("fits");
        let third_x = formation.units()[2].rect.x;
        formation.remove_indices(&[1, 0]);
        assert_eq!(formation.len(), 34);
        assert_eq!(formation.units()[0].rect.x, third_x);
    }
}
