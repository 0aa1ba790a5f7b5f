// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! ClosurePredicate - accepts only walks that trace the whole frame.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use log::debug;

/// Runs once every placeable piece is on the boundary. Records the closing
/// error on success.
#[derive(Debug)]
pub struct ClosurePredicate;

impl Predicate for ClosurePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let boundary = ctx.boundary();
        match boundary.close(&ctx.memo.frame, &ctx.memo.config) {
            Ok(error) => {
                ctx.set_closing_error(error);
                PredicateResult::Success
            }
            Err(reason) => {
                debug!(
                    "walk of {:?} pruned ({}) after {} turns",
                    ctx.placement_order(),
                    reason,
                    boundary.turns.len()
                );
                ctx.statistics.record_prune(reason);
                PredicateResult::Failure
            }
        }
    }

    fn name(&self) -> &str {
        "Closure"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Vector2;
    use crate::solver::boundary::BoundaryState;
    use crate::solver::PruneReason;

    #[test]
    fn test_open_walk_fails() {
        let mut ctx = SearchContext::default();
        assert_eq!(ClosurePredicate.try_pred(&mut ctx, 0), PredicateResult::Failure);
        assert_eq!(ctx.statistics.prunes(PruneReason::NotClosed), 1);
    }

    #[test]
    fn test_closed_walk_records_error() {
        // The default context has a 100×100 frame.
        let mut ctx = SearchContext::default();
        ctx.commit_boundary(&BoundaryState {
            cursor: Vector2::new(0.1, 0.0),
            quarter_turns: 4,
            turns: vec![
                Vector2::new(50.0, 0.0),
                Vector2::new(50.0, 100.0),
                Vector2::new(-50.0, 100.0),
                Vector2::new(-50.0, 0.0),
            ],
            last_side: Some(crate::model::FrameSide::Short),
            new_turns: 0,
        });
        assert_eq!(ClosurePredicate.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert!((ctx.closing_error() - 0.1).abs() < 1e-12);
    }
}
