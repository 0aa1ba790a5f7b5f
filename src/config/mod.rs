// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Solver tolerances.
//!
//! All lengths are in the normalized percentage units of the input; angles
//! are in radians. A [`Config`] is validated once when a solver is built, so
//! the search never runs with negative or non-finite tolerances.
//!
//! Configurations can be read from JSON; omitted fields take their defaults:
//!
//! ```
//! use jigsaw_solver::config::Config;
//!
//! let config: Config = serde_json::from_str(r#"{ "line_epsilon": 0.25 }"#).unwrap();
//! assert_eq!(config.line_epsilon, 0.25);
//! assert_eq!(config.corner_margin, Config::default().corner_margin);
//! config.validate().unwrap();
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_4;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Reasons a [`Config`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: f64 },

    #[error("{name} must be a finite number")]
    NotFinite { name: &'static str },

    /// A right-angle tolerance of 45° or more would accept straight joints as corners.
    #[error("corner_margin_angle must lie in [0, π/4) radians (got {value})")]
    AngleOutOfRange { value: f64 },

    #[error("max_edges_per_piece must be at least 1")]
    NoEdgesAllowed,
}

/// Tunable tolerances for simplification, edge detection and placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Douglas–Peucker tolerance applied to raw contours.
    pub roughen_epsilon: f64,

    /// Maximum perpendicular deviation of a point inside a straight run.
    pub line_epsilon: f64,

    /// Shortest run accepted as a frame-contact edge.
    pub min_edge_length: f64,

    /// Largest gap between two edge endpoints that still meet at a corner.
    pub corner_margin: f64,

    /// Tolerance around 90° for corners, and around 0° for straight continuations.
    pub corner_margin_angle: f64,

    /// Slack allowed when comparing walked distances with the frame sides.
    pub placement_margin: f64,

    /// How close the final cursor must come back to the starting cursor.
    pub closure_margin: f64,

    /// Number of (longest) edges kept per piece.
    pub max_edges_per_piece: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            roughen_epsilon: 0.5,
            line_epsilon: 0.5,
            min_edge_length: 3.0,
            corner_margin: 1.0,
            corner_margin_angle: 10f64.to_radians(),
            placement_margin: 0.5,
            closure_margin: 0.5,
            max_edges_per_piece: 4,
        }
    }
}

impl Config {
    /// Read a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, crate::input::PuzzleError> {
        let text = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check every tolerance; the first offending field is reported.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lengths = [
            ("roughen_epsilon", self.roughen_epsilon),
            ("line_epsilon", self.line_epsilon),
            ("min_edge_length", self.min_edge_length),
            ("corner_margin", self.corner_margin),
            ("corner_margin_angle", self.corner_margin_angle),
            ("placement_margin", self.placement_margin),
            ("closure_margin", self.closure_margin),
        ];
        for (name, value) in lengths {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { name, value });
            }
        }
        if self.corner_margin_angle >= FRAC_PI_4 {
            return Err(ConfigError::AngleOutOfRange {
                value: self.corner_margin_angle,
            });
        }
        if self.max_edges_per_piece == 0 {
            return Err(ConfigError::NoEdgesAllowed);
        }
        Ok(())
    }
}
