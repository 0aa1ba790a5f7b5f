// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! PlacePredicate - lays the remaining pieces along the boundary.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::solver::placement::place_candidate;
use crate::state::Counters;
use log::debug;

/// Walk `edge` of `piece` from the current cursor and commit the result.
///
/// Returns false, after counting the prune, if the walk breaks a boundary
/// rule. Nothing needs undoing then: the engine rewinds the trail.
pub(crate) fn try_candidate(ctx: &mut SearchContext, piece: usize, edge: usize) -> bool {
    let mut boundary = ctx.boundary();
    let memo = &ctx.memo;
    match place_candidate(
        &mut boundary,
        &memo.pieces[piece],
        edge,
        &memo.frame,
        &memo.config,
    ) {
        Ok(transform) => {
            debug!("piece {} edge {}: {}", piece, edge, transform);
            ctx.commit_boundary(&boundary);
            ctx.place(piece, transform);
            ctx.statistics.increment_counter(Counters::Placements);
            true
        }
        Err(reason) => {
            debug!("piece {} edge {}: pruned ({})", piece, edge, reason);
            ctx.statistics.record_prune(reason);
            false
        }
    }
}

/// PlacePredicate places one more piece per round.
///
/// # Algorithm
///
/// 1. **try_pred(round)**:
///    - If every placeable piece is on the boundary → Success
///    - List each (remaining piece, edge) pair, pieces in search order
///    - Return Choices(pairs)
///
/// 2. **retry_pred(round, choice)**:
///    - Walk the chosen pair from the cursor
///    - Return SuccessSamePredicate, or Failure if pruned
#[derive(Debug, Default)]
pub struct PlacePredicate {
    /// Candidates listed at each round (indexed by round number).
    candidates: Vec<Vec<(usize, usize)>>,
}

impl PlacePredicate {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Predicate for PlacePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult {
        let remaining = ctx.remaining_pieces();
        if remaining.is_empty() {
            return PredicateResult::Success;
        }

        let candidates: Vec<(usize, usize)> = remaining
            .into_iter()
            .flat_map(|piece| {
                (0..ctx.memo.pieces[piece].edge_count()).map(move |edge| (piece, edge))
            })
            .collect();
        let count = candidates.len();

        // Later rounds belong to abandoned branches.
        self.candidates.truncate(round);
        self.candidates.push(candidates);
        PredicateResult::Choices(count)
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, round: usize, choice: usize) -> PredicateResult {
        let (piece, edge) = self.candidates[round][choice];
        if try_candidate(ctx, piece, edge) {
            PredicateResult::SuccessSamePredicate
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Place"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::context::PuzzleMemo;
    use crate::geometry::Vector2;
    use crate::model::{Piece, PuzzleFrame};

    fn square(id: usize) -> Piece {
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ];
        Piece::from_polygon(id, points, &Config::default())
    }

    fn context(frame: PuzzleFrame) -> SearchContext {
        SearchContext::new(PuzzleMemo::new(
            frame,
            vec![square(0), square(1)],
            Config::default(),
        ))
    }

    #[test]
    fn test_lists_every_edge_of_remaining_pieces() {
        let mut ctx = context(PuzzleFrame::axis_aligned(Vector2::ZERO, 20.0, 20.0));
        let mut predicate = PlacePredicate::new();
        assert_eq!(predicate.try_pred(&mut ctx, 0), PredicateResult::Choices(4));

        assert_eq!(predicate.retry_pred(&mut ctx, 0, 0), PredicateResult::SuccessSamePredicate);
        assert_eq!(ctx.placement_order(), vec![0]);
        assert_eq!(ctx.statistics.get(Counters::Placements), 1);

        assert_eq!(predicate.try_pred(&mut ctx, 1), PredicateResult::Choices(2));
    }

    #[test]
    fn test_nothing_left_to_place() {
        let mut ctx = context(PuzzleFrame::axis_aligned(Vector2::ZERO, 20.0, 20.0));
        ctx.place(0, ctx.memo.pieces[0].identity_transform());
        ctx.place(1, ctx.memo.pieces[1].identity_transform());
        assert_eq!(PlacePredicate::new().try_pred(&mut ctx, 0), PredicateResult::Success);
    }

    #[test]
    fn test_pruned_candidate_is_counted() {
        let mut ctx = context(PuzzleFrame::axis_aligned(Vector2::ZERO, 8.0, 8.0));
        let mut predicate = PlacePredicate::new();
        predicate.try_pred(&mut ctx, 0);
        assert_eq!(predicate.retry_pred(&mut ctx, 0, 0), PredicateResult::Failure);
        assert!(ctx.statistics.total_prunes() > 0);
        assert!(ctx.placement_order().is_empty());
    }
}
