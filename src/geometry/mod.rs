// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric primitives.
//!
//! This module contains the value types and predicates everything else is
//! built on:
//! - Vector2: Points and offsets in the normalized coordinate space
//! - angle: Wrapped angle differences and right-angle tests
//! - intersection: Orientation, line/segment crossing predicates
//! - constants: Structural constants (tolerances, edge size, frame corners)

pub mod angle;
pub mod constants;
pub mod intersection;
pub mod vector;

// Re-export for convenience
pub use constants::*;
pub use intersection::Orientation;
pub use vector::Vector2;
