// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search steps.
//!
//! An assembly search is a fixed program of predicates: seed the first
//! piece, lay the remaining pieces one per round, check that the walk
//! closes, move the result onto the frame. Each predicate either commits
//! state and succeeds, fails, or hands the engine a number of alternatives
//! (one per candidate piece edge, say) to try in turn.
//!
//! ```
//! use jigsaw_solver::context::SearchContext;
//! use jigsaw_solver::engine::{Predicate, PredicateResult};
//!
//! /// Offers each of two headings; only the second is acceptable.
//! #[derive(Debug)]
//! struct Heading;
//!
//! impl Predicate for Heading {
//!     fn try_pred(&mut self, _ctx: &mut SearchContext, _round: usize) -> PredicateResult {
//!         PredicateResult::Choices(2)
//!     }
//!
//!     fn retry_pred(&mut self, ctx: &mut SearchContext, _round: usize, choice: usize) -> PredicateResult {
//!         if choice == 1 {
//!             ctx.set_closing_error(0.0);
//!             PredicateResult::Success
//!         } else {
//!             PredicateResult::Failure
//!         }
//!     }
//! }
//! ```

use crate::context::SearchContext;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateResult {
    /// Go on to the next predicate.
    Success,

    /// Run this predicate again with the next round number, e.g. to lay
    /// another piece.
    SuccessSamePredicate,

    /// Back up to the most recent alternative still untried.
    Failure,

    /// There are `n` alternatives; the engine tries `retry_pred` with
    /// choice `0..n` until one succeeds.
    Choices(usize),

    /// Stop with the current state intact, e.g. a completed assembly.
    Suspend,
}

/// A predicate that can end a program: it fails or suspends, never succeeds.
///
/// [`EngineBuilder::terminal`](super::EngineBuilder::terminal) only accepts
/// these.
pub trait TerminalPredicate: Predicate {}

/// One step of the assembly search.
///
/// All state a predicate changes must live in trailed slots of the
/// [`SearchContext`]. The engine rewinds the trail before each call, so an
/// abandoned alternative leaves nothing behind.
pub trait Predicate: Debug {
    /// First call for `round`. Rounds count up from 0 while the predicate
    /// keeps returning `SuccessSamePredicate`.
    fn try_pred(&mut self, ctx: &mut SearchContext, round: usize) -> PredicateResult;

    /// Attempt alternative `choice` after `try_pred` returned `Choices`.
    ///
    /// Must not return `Choices` or `Suspend`.
    #[allow(unused)]
    fn retry_pred(
        &mut self,
        ctx: &mut SearchContext,
        round: usize,
        choice: usize,
    ) -> PredicateResult {
        panic!("{} offers no choices", self.name());
    }

    /// Name used in log lines.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}
