// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Polygon analysis of raw piece outlines.
//!
//! - simplify: Douglas–Peucker reduction of dense contours
//! - centroid: Shoelace area and centre of mass
//! - edges: Straight frame-contact runs, merged across right-angle corners

pub mod centroid;
pub mod edges;
pub mod simplify;

pub use centroid::{centroid, is_counter_clockwise, signed_area};
pub use edges::detect_edges;
pub use simplify::roughen;
