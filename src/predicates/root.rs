// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! RootPredicate - seeds the boundary walk.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::predicates::place::try_candidate;

/// Lays the first piece in search order at the origin, heading east.
///
/// Each of its edges is one choice. A puzzle with no placeable piece has no
/// root, and the search fails immediately.
#[derive(Debug)]
pub struct RootPredicate;

impl Predicate for RootPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        match ctx.memo.root() {
            Some(root) => PredicateResult::Choices(ctx.memo.pieces[root].edge_count()),
            None => PredicateResult::Failure,
        }
    }

    fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
        let Some(root) = ctx.memo.root() else {
            return PredicateResult::Failure;
        };
        if try_candidate(ctx, root, choice) {
            PredicateResult::Success
        } else {
            PredicateResult::Failure
        }
    }

    fn name(&self) -> &str {
        "Root"
    }
}
