// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Problem files.
//!
//! A problem is the frame and the raw piece outlines, already extracted from
//! the camera image and normalized to percentage units:
//!
//! ```
//! use jigsaw_solver::input::PuzzleInput;
//!
//! let input = PuzzleInput::from_str(r#"{
//!     "frame": {
//!         "topLeft": {"x": 0.0, "y": 20.0}, "topRight": {"x": 40.0, "y": 20.0},
//!         "bottomLeft": {"x": 0.0, "y": 0.0}, "bottomRight": {"x": 40.0, "y": 0.0}
//!     },
//!     "pieces": [[{"x": 0.0, "y": 0.0}, {"x": 10.0, "y": 0.0}, {"x": 10.0, "y": 10.0}]]
//! }"#).unwrap();
//! assert_eq!(input.pieces.len(), 1);
//! assert_eq!(input.frame.width(), 40.0);
//! ```

use crate::config::{Config, ConfigError};
use crate::geometry::Vector2;
use crate::model::PuzzleFrame;
use crate::solver::Solver;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Reasons a problem cannot be solved at all.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("frame has no area ({width} × {height})")]
    InvalidFrame { width: f64, height: f64 },

    #[error("piece {piece} has a non-finite coordinate")]
    NonFinitePoint { piece: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PuzzleInput {
    pub frame: PuzzleFrame,
    pub pieces: Vec<Vec<Vector2>>,
}

impl PuzzleInput {
    pub fn from_json_file(path: &Path) -> Result<Self, PuzzleError> {
        let text = fs::read_to_string(path)?;
        Self::from_str(&text)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(text: &str) -> Result<Self, PuzzleError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Analyse the pieces and build a solver for them.
    pub fn to_solver(&self, config: Config) -> Result<Solver, PuzzleError> {
        Solver::new(self.frame, &self.pieces, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_json() {
        let result = PuzzleInput::from_str(r#"{"frame": 3}"#);
        assert!(matches!(result, Err(PuzzleError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = PuzzleInput::from_json_file(Path::new("/nonexistent/problem.json"));
        assert!(matches!(result, Err(PuzzleError::Io(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            PuzzleError::NonFinitePoint { piece: 3 }.to_string(),
            "piece 3 has a non-finite coordinate"
        );
        assert_eq!(
            PuzzleError::from(ConfigError::NoEdgesAllowed).to_string(),
            "invalid configuration: max_edges_per_piece must be at least 1"
        );
    }
}
