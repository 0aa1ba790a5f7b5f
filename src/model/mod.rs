// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Puzzle data model.
//!
//! - Piece: An analysed outline (points, centre of mass, edges)
//! - Edge / EdgeView: Index lists into a piece's points, read through borrowed views
//! - PlaceTransform: Target position and rotation of a piece
//! - PlacedPiece: A piece under a trial transform
//! - PuzzleFrame / FrameSide: The target rectangle and its two side classes

pub mod edge;
pub mod frame;
pub mod piece;
pub mod placed;
pub mod transform;

pub use edge::{Corner, Edge, EdgeView};
pub use frame::{FrameSide, PuzzleFrame};
pub use piece::Piece;
pub use placed::PlacedPiece;
pub use transform::{placement_transform, PlaceTransform};
