// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search context combining MEMO and DYNAMIC state.
//!
//! The SearchContext is the core data structure that combines:
//! - Tier 1 (MEMO): the frame, the analysed pieces and their search order
//! - Tier 2 (DYNAMIC): the boundary walk and trial transforms, held in trail slots
//!
//! Independent SearchContext instances can run on clones of the same memo.

pub mod dynamic;
pub mod memoized;

pub use dynamic::{DynamicState, TrailedPoint};
pub use memoized::PuzzleMemo;

use crate::geometry::Vector2;
use crate::model::PlaceTransform;
use crate::solver::boundary::BoundaryState;
use crate::state::Statistics;
use crate::trail::Trail;

/// Search context combining MEMO and DYNAMIC state.
///
/// This is the main data structure passed through the search algorithm.
///
/// # Memory Model
///
/// ```text
/// SearchContext {
///     memo: PuzzleMemo,          // Tier 1: Immutable, shared
///     trail: Trail,              // Tier 2: slot values + undo log
///     state: DynamicState,       // Tier 2: handles onto trail slots
///     statistics: Statistics,    // survives backtracking
/// }
/// ```
///
/// # Example
///
/// ```
/// use jigsaw_solver::context::SearchContext;
///
/// let mut ctx = SearchContext::default();
/// let checkpoint = ctx.trail.len();
/// ctx.set_closing_error(0.25);
/// ctx.trail.rewind_to(checkpoint);
/// assert_eq!(ctx.closing_error(), 0.0);
/// ```
#[derive(Debug)]
pub struct SearchContext {
    /// Immutable puzzle data (Tier 1)
    pub memo: PuzzleMemo,
    /// Slot storage and undo log (Tier 2)
    pub trail: Trail,
    /// Handles onto the trailed search state (Tier 2)
    pub state: DynamicState,
    /// Counters; never rewound
    pub statistics: Statistics,
}

/// Upper bound on the trail writes one piece causes along a search path:
/// placing it, committing the walk past it, and localizing it.
const TRAIL_WRITES_PER_PIECE: usize = 32;

impl SearchContext {
    pub fn new(memo: PuzzleMemo) -> Self {
        let limit = Trail::MAX_SIZE + memo.piece_count() * TRAIL_WRITES_PER_PIECE;
        let mut trail = Trail::with_limit(limit);
        let state = DynamicState::new(&memo, &mut trail);
        Self {
            memo,
            trail,
            state,
            statistics: Statistics::new(),
        }
    }

    /// Load the boundary walk from the trail.
    pub fn boundary(&self) -> BoundaryState {
        let count = self.state.turn_count.get(&self.trail);
        BoundaryState {
            cursor: self.state.cursor.get(&self.trail),
            quarter_turns: self.state.quarter_turns.get(&self.trail),
            turns: self.state.turns[..count]
                .iter()
                .map(|turn| turn.get(&self.trail))
                .collect(),
            last_side: self.state.last_side.get(&self.trail),
            new_turns: 0,
        }
    }

    /// Store a walked boundary back into the trail.
    pub fn commit_boundary(&mut self, boundary: &BoundaryState) {
        let state = &self.state;
        let trail = &mut self.trail;
        state.cursor.set(trail, boundary.cursor);
        state.quarter_turns.maybe_set(trail, boundary.quarter_turns);
        state.last_side.maybe_set(trail, boundary.last_side);
        state.turn_count.maybe_set(trail, boundary.turns.len());
        for (slot, &turn) in state.turns.iter().zip(&boundary.turns) {
            slot.set(trail, turn);
        }
    }

    /// Mark `piece` as placed with `transform`, appending it to the placement order.
    pub fn place(&mut self, piece: usize, transform: PlaceTransform) {
        let state = &self.state;
        let trail = &mut self.trail;
        let count = state.placed_count.get(trail);
        state.placed[piece].set(trail, true);
        state.set_transform(trail, piece, transform);
        state.placement_order[count].set(trail, piece);
        state.placed_count.set(trail, count + 1);
    }

    pub fn is_placed(&self, piece: usize) -> bool {
        self.state.placed[piece].get(&self.trail)
    }

    pub fn transform(&self, piece: usize) -> PlaceTransform {
        self.state.transform(&self.trail, piece)
    }

    pub fn set_transform(&mut self, piece: usize, transform: PlaceTransform) {
        self.state.set_transform(&mut self.trail, piece, transform);
    }

    /// Placeable pieces not yet on the boundary, in search order.
    pub fn remaining_pieces(&self) -> Vec<usize> {
        self.memo
            .order
            .iter()
            .copied()
            .filter(|&id| !self.is_placed(id))
            .collect()
    }

    pub fn placement_order(&self) -> Vec<usize> {
        let count = self.state.placed_count.get(&self.trail);
        self.state.placement_order[..count]
            .iter()
            .map(|slot| slot.get(&self.trail))
            .collect()
    }

    /// The corners traced so far.
    pub fn turns(&self) -> Vec<Vector2> {
        self.boundary().turns
    }

    pub fn set_turn(&mut self, index: usize, at: Vector2) {
        self.state.turns[index].set(&mut self.trail, at);
    }

    pub fn closing_error(&self) -> f64 {
        self.state.closing_error.get(&self.trail)
    }

    pub fn set_closing_error(&mut self, error: f64) {
        self.state.closing_error.set(&mut self.trail, error);
    }
}

impl Default for SearchContext {
    /// A context over an empty puzzle.
    fn default() -> Self {
        Self::new(PuzzleMemo::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::model::{Piece, PuzzleFrame};

    fn two_squares() -> PuzzleMemo {
        let square = |id| {
            let points = vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(10.0, 0.0),
                Vector2::new(10.0, 10.0),
                Vector2::new(0.0, 10.0),
            ];
            Piece::from_polygon(id, points, &Config::default())
        };
        PuzzleMemo::new(
            PuzzleFrame::axis_aligned(Vector2::ZERO, 20.0, 10.0),
            vec![square(0), square(1)],
            Config::default(),
        )
    }

    #[test]
    fn test_search_context_new() {
        let ctx = SearchContext::new(two_squares());
        assert_eq!(ctx.trail.len(), 0);
        assert_eq!(ctx.remaining_pieces(), vec![0, 1]);
        assert!(ctx.placement_order().is_empty());
        assert_eq!(ctx.transform(1), ctx.memo.pieces[1].identity_transform());
        assert_eq!(ctx.boundary(), BoundaryState::default());
    }

    #[test]
    fn test_place_is_undone_by_rewind() {
        let mut ctx = SearchContext::new(two_squares());
        let checkpoint = ctx.trail.len();

        let transform = PlaceTransform::new(Vector2::new(3.0, 4.0), 1.0);
        ctx.place(1, transform);
        assert!(ctx.is_placed(1));
        assert_eq!(ctx.transform(1), transform);
        assert_eq!(ctx.placement_order(), vec![1]);
        assert_eq!(ctx.remaining_pieces(), vec![0]);

        ctx.trail.rewind_to(checkpoint);
        assert!(!ctx.is_placed(1));
        assert_eq!(ctx.transform(1), ctx.memo.pieces[1].identity_transform());
        assert!(ctx.placement_order().is_empty());
    }

    #[test]
    fn test_boundary_round_trip() {
        let mut ctx = SearchContext::new(two_squares());
        let boundary = BoundaryState {
            cursor: Vector2::new(10.0, 5.0),
            quarter_turns: 1,
            turns: vec![Vector2::new(10.0, 0.0)],
            last_side: None,
            new_turns: 1,
        };
        ctx.commit_boundary(&boundary);

        let loaded = ctx.boundary();
        assert_eq!(loaded.cursor, boundary.cursor);
        assert_eq!(loaded.quarter_turns, 1);
        assert_eq!(loaded.turns, boundary.turns);
        assert_eq!(loaded.new_turns, 0);
    }

    #[test]
    fn test_trail_grows_with_piece_count() {
        let square = |id| {
            let points = vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(1.0, 1.0),
                Vector2::new(0.0, 1.0),
            ];
            Piece::from_polygon(id, points, &Config::default())
        };
        let count = 3000;
        let memo = PuzzleMemo::new(
            PuzzleFrame::axis_aligned(Vector2::ZERO, 1000.0, 1000.0),
            (0..count).map(square).collect(),
            Config::default(),
        );
        let mut ctx = SearchContext::new(memo);
        assert!(ctx.trail.limit() > Trail::MAX_SIZE);

        // Every piece placed and walked past, as on a full search path.
        for id in 0..count {
            let x = id as f64;
            ctx.place(id, PlaceTransform::new(Vector2::new(x + 0.5, 0.5), 0.1));
            let mut boundary = ctx.boundary();
            boundary.cursor = Vector2::new(x + 1.0, 0.0);
            if boundary.turns.len() < 4 {
                boundary.turns.push(Vector2::new(x + 1.0, 0.0));
                boundary.quarter_turns += 1;
            }
            ctx.commit_boundary(&boundary);
        }
        assert_eq!(ctx.placement_order().len(), count);
        assert!(ctx.trail.len() > Trail::MAX_SIZE);
    }

    #[test]
    fn test_independent_contexts() {
        let memo = two_squares();
        let mut ctx1 = SearchContext::new(memo.clone());
        let ctx2 = SearchContext::new(memo);

        ctx1.set_closing_error(0.1);
        assert_eq!(ctx1.closing_error(), 0.1);
        assert_eq!(ctx2.closing_error(), 0.0);
        assert_eq!(ctx2.trail.len(), 0);
    }
}
