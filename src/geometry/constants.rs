// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed geometric constants.
//!
//! Tunable tolerances live in [`crate::config::Config`]; the values here are
//! structural and never vary between runs.

/// Floating tolerance for "on the line" and "zero area" decisions.
///
/// Coordinates are percentages, so this is far below any physical feature.
pub const GEOMETRY_EPSILON: f64 = 1e-6;

/// Maximum number of points one edge may index (a corner merge of two short runs).
pub const MAX_EDGE_POINTS: usize = 5;

/// Number of turns on a closed rectangular boundary.
pub const FRAME_CORNERS: usize = 4;
