// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Jigsaw frame assembly.
//!
//! Given the four inner corners of a rectangular frame and the raw outlines
//! of loose pieces, compute for each piece the rigid transform (translation
//! plus rotation about its centre of mass) that puts it in place. A pick and
//! place actuator then works through the moves in sequence.
//!
//! # Architecture
//!
//! ## Polygon analysis
//!
//! Each outline is simplified ([`polygon::roughen`]), oriented
//! counter-clockwise, and scanned for straight runs that can lie against
//! the frame ([`polygon::detect_edges`]). Two runs meeting at a right angle
//! are merged into one edge with a corner. The result is a [`model::Piece`].
//!
//! ## Search
//!
//! The implementation uses a two-tier memory model:
//!
//! - Tier 1 (MEMO, immutable): the frame, the analysed pieces, their search order
//! - Tier 2 (DYNAMIC, trailed): the boundary walk and the trial transforms
//!
//! The search walks counter-clockwise around the inside of the frame,
//! laying one piece edge after another. A predicate program runs on the
//! backtracking [`engine`]:
//!
//! 1. **RootPredicate**: lay an edge of the first piece at the origin
//! 2. **PlacePredicate**: lay each remaining piece from the cursor
//! 3. **ClosurePredicate**: the walk must trace four corners and come home
//! 4. **LocalizePredicate**: move the tiling onto the frame
//!
//! Every trial placement is written to the trail, so backtracking restores
//! the previous state in O(changes).
//!
//! # Example
//!
//! ```
//! use jigsaw_solver::{Config, PuzzleFrame, SolveOutcome, Solver, Vector2};
//!
//! // One piece filling a 10×10 frame: only one of its four corners is traced.
//! let frame = PuzzleFrame::axis_aligned(Vector2::ZERO, 10.0, 10.0);
//! let square = vec![
//!     Vector2::new(50.0, 50.0),
//!     Vector2::new(60.0, 50.0),
//!     Vector2::new(60.0, 60.0),
//!     Vector2::new(50.0, 60.0),
//! ];
//! let solver = Solver::new(frame, &[square], Config::default()).unwrap();
//! assert_eq!(solver.solve(), SolveOutcome::NoSolution);
//! ```

pub mod config;
pub mod context;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod instruction;
pub mod model;
pub mod polygon;
pub mod predicates;
pub mod solver;
pub mod state;
pub mod trail;

// Re-export commonly used types
pub use config::Config;
pub use context::SearchContext;
pub use engine::{Predicate, PredicateResult, SearchEngine};
pub use geometry::Vector2;
pub use input::{PuzzleError, PuzzleInput};
pub use instruction::{AssemblySequence, Instruction};
pub use model::{Piece, PlaceTransform, PuzzleFrame};
pub use solver::{SolveOutcome, Solution, Solver};
pub use trail::Trail;
