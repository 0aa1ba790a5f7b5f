// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search bookkeeping that is not part of the trailed state.
//!
//! - statistics: Counters for placements, solutions, budget stops and prunes

pub mod statistics;

pub use statistics::{Counters, Statistics};
