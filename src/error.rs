//! Configuration faults
//!
//! The simulation itself has no failure modes. Everything that can go wrong is
//! a bad configuration, and it is reported before a run is allowed to start.

use std::path::PathBuf;

use thiserror::Error;

/// A settings value or file that cannot drive a run
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A size, speed or count that must be strictly positive
    #[error("setting `{field}` must be positive, got {value}")]
    NonPositive {
        /// Settings field name
        field: &'static str,
        /// Offending value
        value: f32,
    },

    /// Blast offset range with min above max
    #[error("blast offset range is inverted: {min} > {max}")]
    InvertedBlastRange { min: u32, max: u32 },

    /// Formation grid does not fit the play field
    #[error(
        "formation does not fit a {width}x{height} field: {columns} columns x {rows} rows"
    )]
    FormationDoesNotFit {
        width: f32,
        height: f32,
        columns: i64,
        rows: i64,
    },

    /// Formation grid has more units than the simulation supports
    #[error("formation of {columns} columns x {rows} rows exceeds {max} units")]
    FormationTooLarge { columns: i64, rows: i64, max: usize },

    /// Settings file could not be read
    #[error("failed to read settings from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Settings JSON was malformed
    #[error("invalid settings JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
