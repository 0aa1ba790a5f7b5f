// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-deterministic search engine.
//!
//! This module implements a backtracking search engine that runs predicates
//! in sequence. The engine coordinates with the trail system to provide
//! automatic state restoration on backtracking.
//!
//! # Architecture
//!
//! The engine maintains a stack of predicate execution states. Each stack entry tracks:
//! - Which predicate is executing
//! - Current round number (for predicates that execute multiple times)
//! - Choice mode state (whether we're trying alternatives)
//! - Current choice index (when in choice mode)
//!
//! Execution follows a WAM-like model:
//! 1. Call try_pred(round) on each predicate
//! 2. If Success: advance to next predicate
//! 3. If SuccessSamePredicate: increment round, stay at same predicate
//! 4. If Choices(n): enter choice mode, call retry_pred(round, 0..n-1)
//! 5. If Failure: backtrack to the nearest entry with choices left
//! 6. If Suspend: pause and return control to caller
//!
//! # Example
//!
//! ```
//! use jigsaw_solver::engine::EngineBuilder;
//! use jigsaw_solver::context::SearchContext;
//! use jigsaw_solver::predicates::SuspendPredicate;
//! # use jigsaw_solver::engine::{Predicate, PredicateResult};
//! # #[derive(Debug)]
//! # struct Pick;
//! # impl Predicate for Pick {
//! #     fn try_pred(&mut self, _: &mut SearchContext, _: usize) -> PredicateResult { PredicateResult::Choices(3) }
//! #     fn retry_pred(&mut self, _: &mut SearchContext, _: usize, _: usize) -> PredicateResult { PredicateResult::Success }
//! # }
//!
//! let mut ctx = SearchContext::default();
//! // Every program must end with FAIL or SUSPEND
//! let engine = EngineBuilder::new()
//!     .add(Box::new(Pick))
//!     .terminal(SuspendPredicate)
//!     .build();
//!
//! // Engine is consumed, returns Some(engine) if suspended
//! let mut solutions = 0;
//! let mut next = engine.search(&mut ctx);
//! while let Some(engine) = next {
//!     solutions += 1;
//!     next = engine.search(&mut ctx); // resume: look for the next solution
//! }
//! assert_eq!(solutions, 3);
//! ```

pub mod predicate;

pub use predicate::{Predicate, PredicateResult, TerminalPredicate};

use crate::context::SearchContext;
use crate::state::statistics::Counters;

/// Maximum depth of the predicate stack.
const MAX_STACK_SIZE: usize = 1000;

/// Stack entry tracking the state of one predicate execution.
#[derive(Debug)]
struct StackEntry {
    /// Index of the predicate in the predicates list.
    predicate_index: usize,

    /// Current round number (incremented by SuccessSamePredicate).
    round: usize,

    /// Whether we're in choice mode (exploring alternatives).
    in_choice_mode: bool,

    /// Current choice being tried (when in_choice_mode is true).
    current_choice: usize,

    /// Total number of choices (when in_choice_mode is true).
    num_choices: usize,

    /// Trail checkpoint for this stack entry.
    trail_checkpoint: usize,
}

impl StackEntry {
    fn new(predicate_index: usize, round: usize, trail_checkpoint: usize) -> Self {
        Self {
            predicate_index,
            round,
            in_choice_mode: false,
            current_choice: 0,
            num_choices: 0,
            trail_checkpoint,
        }
    }
}

/// Search engine that coordinates predicate execution and backtracking.
///
/// The engine runs predicates in sequence, managing rounds, choices, and
/// backtracking automatically via the trail system.
pub struct SearchEngine {
    /// List of predicates to execute in sequence.
    predicates: Vec<Box<dyn Predicate>>,

    /// Stack of predicate execution states.
    stack: Vec<StackEntry>,

    /// Statistics: number of try_pred calls.
    try_count: u64,

    /// Statistics: number of retry_pred calls (backtracks).
    retry_count: u64,

    /// Cap on try_pred + retry_pred calls, if any.
    max_steps: Option<u64>,

    /// Whether a previous call to search() suspended.
    suspended: bool,
}

impl SearchEngine {
    /// Create a new search engine with the given predicates.
    ///
    /// Predicates will be tried in the order given. The search terminates when:
    /// - A predicate returns Suspend (paused for inspection)
    /// - We backtrack past the first predicate (failure)
    /// - The step budget runs out
    ///
    /// Prefer [`EngineBuilder`], which guarantees a terminal predicate.
    pub fn new(predicates: Vec<Box<dyn Predicate>>) -> Self {
        Self {
            predicates,
            stack: Vec::with_capacity(MAX_STACK_SIZE),
            try_count: 0,
            retry_count: 0,
            max_steps: None,
            suspended: false,
        }
    }

    /// Stop the search after `max_steps` predicate calls.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Run the search to find one solution.
    ///
    /// Consumes the engine and returns:
    /// - `Some(engine)` if suspended - calling search() again resumes by
    ///   backtracking into the next alternative
    /// - `None` if exhausted (backtracked past first predicate) or out of steps
    ///
    /// The search modifies `ctx` with the solution state. Success is indicated via
    /// side effects (state in `ctx`), not by the return value. Running out of
    /// steps is recorded as [`Counters::BudgetExhausted`] in `ctx.statistics`.
    ///
    /// # Panics
    ///
    /// Panics if the predicate sequence is invalid (reaches the end without FAIL or SUSPEND),
    /// or if retry_pred returns Choices or Suspend.
    pub fn search(mut self, ctx: &mut SearchContext) -> Option<Self> {
        if self.suspended {
            // Resume: the suspending entry fails, backtracking into the next choice.
            self.suspended = false;
            self.backtrack();
        } else {
            self.stack.clear();
            if self.predicates.is_empty() {
                return None; // Empty is exhausted
            }
            self.stack.push(StackEntry::new(0, 0, ctx.trail.len()));
        }

        loop {
            if self.budget_spent() {
                ctx.statistics.increment_counter(Counters::BudgetExhausted);
                return None;
            }

            // Backtracked past the first predicate: search exhausted.
            let Some(entry) = self.stack.last_mut() else {
                return None;
            };

            // Rewind trail to this entry's checkpoint
            ctx.trail.rewind_to(entry.trail_checkpoint);

            if !entry.in_choice_mode {
                let pred_idx = entry.predicate_index;
                let round = entry.round;
                self.try_count += 1;
                let result = self.predicates[pred_idx].try_pred(ctx, round);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => self.backtrack(),
                    PredicateResult::Choices(n) => {
                        let checkpoint = ctx.trail.len();
                        if let Some(entry) = self.stack.last_mut() {
                            entry.in_choice_mode = true;
                            entry.current_choice = 0;
                            entry.num_choices = n;
                            entry.trail_checkpoint = checkpoint;
                        }
                    }
                    PredicateResult::Suspend => {
                        self.suspended = true;
                        return Some(self);
                    }
                }
            } else {
                // Choice mode: retry_pred
                if entry.current_choice >= entry.num_choices {
                    self.backtrack();
                    continue;
                }

                let pred_idx = entry.predicate_index;
                let round = entry.round;
                let choice = entry.current_choice;
                entry.current_choice += 1;
                self.retry_count += 1;
                let result = self.predicates[pred_idx].retry_pred(ctx, round, choice);

                match result {
                    PredicateResult::Success => self.push_next_predicate(ctx),
                    PredicateResult::SuccessSamePredicate => self.push_same_predicate(ctx),
                    PredicateResult::Failure => {
                        // Try next choice (loop continues)
                    }
                    PredicateResult::Choices(_) | PredicateResult::Suspend => {
                        panic!("retry_pred returned invalid result: {:?}", result);
                    }
                }
            }
        }
    }

    /// Drop the top entry, then every entry beneath it that has no choices
    /// left to offer.
    ///
    /// An entry not in choice mode already succeeded deterministically, so
    /// re-entering it could only repeat the same success.
    fn backtrack(&mut self) {
        self.stack.pop();
        while matches!(self.stack.last(), Some(entry) if !entry.in_choice_mode) {
            self.stack.pop();
        }
    }

    fn budget_spent(&self) -> bool {
        self.max_steps
            .is_some_and(|max| self.try_count + self.retry_count >= max)
    }

    fn top(&self) -> (usize, usize) {
        match self.stack.last() {
            Some(entry) => (entry.predicate_index, entry.round),
            None => panic!("engine stack is empty while a predicate is running"),
        }
    }

    /// Push a new stack entry for the next predicate in sequence.
    ///
    /// Panics if we've reached the end of the predicate sequence, as this indicates
    /// an invalid program (all valid programs must end with FAIL or SUSPEND).
    fn push_next_predicate(&mut self, ctx: &SearchContext) {
        let (predicate_index, _) = self.top();
        let next_index = predicate_index + 1;

        if next_index >= self.predicates.len() {
            panic!(
                "Invalid predicate sequence: reached end without FAIL or SUSPEND. \
                 All programs must terminate with a FAIL or SUSPEND predicate."
            );
        }

        self.stack
            .push(StackEntry::new(next_index, 0, ctx.trail.len()));
    }

    /// Push a new stack entry for the same predicate with incremented round.
    fn push_same_predicate(&mut self, ctx: &SearchContext) {
        let (predicate_index, round) = self.top();
        self.stack
            .push(StackEntry::new(predicate_index, round + 1, ctx.trail.len()));
    }

    /// Get statistics about the search.
    ///
    /// Returns (try_count, retry_count) showing how many times predicates
    /// were tried and retried.
    pub fn statistics(&self) -> (u64, u64) {
        (self.try_count, self.retry_count)
    }
}

/// Assembles a predicate program that is guaranteed to end in a
/// [`TerminalPredicate`].
#[derive(Default)]
pub struct EngineBuilder {
    predicates: Vec<Box<dyn Predicate>>,
    max_steps: Option<u64>,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a predicate to the program.
    pub fn add(mut self, predicate: Box<dyn Predicate>) -> Self {
        self.predicates.push(predicate);
        self
    }

    pub fn max_steps(mut self, max_steps: Option<u64>) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Close the program with a FAIL or SUSPEND predicate.
    pub fn terminal<T: TerminalPredicate + 'static>(mut self, predicate: T) -> TerminatedProgram {
        self.predicates.push(Box::new(predicate));
        TerminatedProgram { builder: self }
    }
}

/// A complete predicate program, ready to build.
pub struct TerminatedProgram {
    builder: EngineBuilder,
}

impl TerminatedProgram {
    pub fn build(self) -> SearchEngine {
        let engine = SearchEngine::new(self.builder.predicates);
        match self.builder.max_steps {
            Some(max_steps) => engine.with_max_steps(max_steps),
            None => engine,
        }
    }
}
