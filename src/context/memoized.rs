// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable puzzle data (Tier 1: MEMO).

use crate::config::Config;
use crate::geometry::Vector2;
use crate::model::{Piece, PuzzleFrame};

/// Immutable data (Tier 1: MEMO).
///
/// Everything here is fixed before the search starts: the frame, the
/// analysed pieces and the order in which they are tried. It can be shared
/// across multiple SearchContext instances by cloning.
#[derive(Debug, Clone)]
pub struct PuzzleMemo {
    pub frame: PuzzleFrame,

    /// Indexed by piece id.
    pub pieces: Vec<Piece>,

    pub config: Config,

    /// Ids of pieces with frame-contact edges, most edges first.
    ///
    /// The sort is stable, so pieces with equal edge counts keep their input
    /// order. The first entry is the root of the boundary walk.
    pub order: Vec<usize>,

    /// Ids of pieces with no frame-contact edges.
    pub interior: Vec<usize>,
}

impl PuzzleMemo {
    pub fn new(frame: PuzzleFrame, pieces: Vec<Piece>, config: Config) -> Self {
        debug_assert!(pieces.iter().enumerate().all(|(i, p)| p.id() == i));

        let (mut order, interior): (Vec<usize>, Vec<usize>) =
            (0..pieces.len()).partition(|&id| pieces[id].is_placeable());
        order.sort_by_key(|&id| std::cmp::Reverse(pieces[id].edge_count()));

        Self {
            frame,
            pieces,
            config,
            order,
            interior,
        }
    }

    pub fn piece_count(&self) -> usize {
        self.pieces.len()
    }

    pub fn root(&self) -> Option<usize> {
        self.order.first().copied()
    }
}

impl Default for PuzzleMemo {
    /// An empty puzzle in a 100×100 frame.
    fn default() -> Self {
        Self::new(
            PuzzleFrame::axis_aligned(Vector2::ZERO, 100.0, 100.0),
            Vec::new(),
            Config::default(),
        )
    }
}
