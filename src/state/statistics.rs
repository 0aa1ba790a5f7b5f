// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context, and can be incremented by special predicates,
//! or by additional methods. Counters are not trailed: they survive backtracking.

use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::solver::PruneReason;
use std::fmt;
use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(EnumCountMacro, Debug, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Candidate placements walked successfully.
    Placements,
    /// Complete, localized assemblies.
    Solutions,
    /// Searches stopped by the step budget.
    BudgetExhausted,
}

const COUNT: usize = Counters::COUNT + PruneReason::COUNT;

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// A predicate that will increment the given counter, whenever a condition holds (or always).
    pub fn counting_predicate(
        counter: Counters,
        filter: Option<fn(&SearchContext) -> bool>,
    ) -> Box<dyn Predicate> {
        Box::new(CountingPredicate {
            filter: filter.unwrap_or(|_ctxt| true),
            counter,
        })
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Count one candidate rejected for `reason`.
    pub(crate) fn record_prune(&mut self, reason: PruneReason) {
        self.stats[Counters::COUNT + reason as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// How many candidates were rejected for `reason`.
    pub fn prunes(&self, reason: PruneReason) -> u64 {
        self.stats[Counters::COUNT + reason as usize]
    }

    pub fn total_prunes(&self) -> u64 {
        self.stats[Counters::COUNT..].iter().sum()
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} placements, {} solutions, {} prunes",
            self.get(Counters::Placements),
            self.get(Counters::Solutions),
            self.total_prunes()
        )?;
        for reason in PruneReason::ALL {
            let count = self.prunes(reason);
            if count > 0 {
                write!(f, "; {}: {}", reason, count)?;
            }
        }
        Ok(())
    }
}

struct CountingPredicate {
    filter: fn(&SearchContext) -> bool,
    counter: Counters,
}

impl fmt::Debug for CountingPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountingPredicate")
            .field("counter", &self.counter)
            .finish_non_exhaustive()
    }
}

impl Predicate for CountingPredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        if (self.filter)(ctx) {
            let statistics = &mut ctx.statistics;
            statistics.increment_counter(self.counter);
        }
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Counting"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let statistics = Statistics::new();
        assert_eq!(statistics.get(Counters::Solutions), 0);
        assert_eq!(statistics.total_prunes(), 0);
    }

    #[test]
    fn test_prunes_are_counted_separately() {
        let mut statistics = Statistics::new();
        statistics.record_prune(PruneReason::Overflow);
        statistics.record_prune(PruneReason::Overflow);
        statistics.record_prune(PruneReason::NotClosed);
        statistics.increment_counter(Counters::Placements);

        assert_eq!(statistics.prunes(PruneReason::Overflow), 2);
        assert_eq!(statistics.prunes(PruneReason::NotClosed), 1);
        assert_eq!(statistics.prunes(PruneReason::SideRepeated), 0);
        assert_eq!(statistics.total_prunes(), 3);
        assert_eq!(statistics.get(Counters::Placements), 1);
        assert_eq!(
            statistics.to_string(),
            "1 placements, 0 solutions, 3 prunes; overflow: 2; not closed: 1"
        );
    }

    #[test]
    fn test_counting_predicate() {
        let mut ctx = SearchContext::default();
        let mut predicate = Statistics::counting_predicate(Counters::Solutions, None);
        assert_eq!(predicate.try_pred(&mut ctx, 0), PredicateResult::Success);
        assert_eq!(ctx.statistics.get(Counters::Solutions), 1);

        let has_writes: fn(&SearchContext) -> bool = |ctx| !ctx.trail.is_empty();
        let mut filtered = Statistics::counting_predicate(Counters::Solutions, Some(has_writes));
        filtered.try_pred(&mut ctx, 0);
        assert_eq!(ctx.statistics.get(Counters::Solutions), 1);
    }
}
