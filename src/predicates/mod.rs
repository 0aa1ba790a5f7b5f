// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search predicates.
//!
//! This module contains the predicates used in the assembly search.
//! Each predicate represents a step of the search, most of them choice points.
//!
//! # Organization
//!
//! - `root`: RootPredicate seeds the walk with an edge of the first piece
//! - `place`: PlacePredicate lays one more piece per round
//! - `closure`: ClosurePredicate checks the walk closed into the frame
//! - `localize`: LocalizePredicate moves the tiling onto the frame
//! - Built-in predicates: `FailPredicate`, `SuspendPredicate`

pub mod closure;
pub mod localize;
pub mod place;
pub mod root;

// Re-export main predicates for convenience
pub use closure::ClosurePredicate;
pub use localize::LocalizePredicate;
pub use place::PlacePredicate;
pub use root::RootPredicate;

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult, TerminalPredicate};

/// Built-in fail predicate (Prolog's `fail.`).
///
/// This predicate always fails, forcing backtracking. It's a terminal predicate
/// that ends a search path without success, similar to Prolog's `fail.` built-in.
///
/// # Usage
///
/// Use `FailPredicate` to explicitly terminate unsuccessful search paths:
/// - As a terminal predicate to mark unsatisfiable branches
/// - To force exploration of all alternatives, e.g. to count every assembly
///
/// # Example
///
/// ```
/// use jigsaw_solver::engine::EngineBuilder;
/// use jigsaw_solver::predicates::{FailPredicate, RootPredicate};
/// use jigsaw_solver::context::SearchContext;
///
/// let mut ctx = SearchContext::default();
/// let engine = EngineBuilder::new()
///     .add(Box::new(RootPredicate))
///     .terminal(FailPredicate)
///     .build();
///
/// // An empty puzzle has no root piece, so the search fails at once
/// let result = engine.search(&mut ctx);
/// assert!(result.is_none()); // Failed - engine consumed
/// ```
#[derive(Debug)]
pub struct FailPredicate;

impl Predicate for FailPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Failure
    }

    fn retry_pred(
        &mut self,
        _ctx: &mut SearchContext,
        _round: usize,
        _choice: usize,
    ) -> PredicateResult {
        PredicateResult::Failure
    }

    fn name(&self) -> &str {
        "Fail"
    }
}

/// FailPredicate is a terminal predicate (like Prolog's fail.).
impl TerminalPredicate for FailPredicate {}

/// Built-in suspend predicate.
///
/// Pauses the search with the solution state left in the context. Searching
/// again resumes by backtracking into the next alternative.
#[derive(Debug)]
pub struct SuspendPredicate;

impl Predicate for SuspendPredicate {
    fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        PredicateResult::Suspend
    }

    fn name(&self) -> &str {
        "Suspend"
    }
}

impl TerminalPredicate for SuspendPredicate {}
