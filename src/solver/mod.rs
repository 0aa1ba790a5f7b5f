// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The assembly solver.
//!
//! [`Solver`] analyses the raw outlines, then runs the predicate program
//!
//! ```text
//! Root → Place* → Closure → Localize → count → Suspend
//! ```
//!
//! on the search engine. The first assembly that closes around the frame
//! wins; its localized transforms are returned as a [`Solution`].

pub mod boundary;
pub mod errors;
pub mod placement;

pub use errors::PruneReason;

use crate::config::Config;
use crate::context::{PuzzleMemo, SearchContext};
use crate::engine::EngineBuilder;
use crate::geometry::Vector2;
use crate::input::PuzzleError;
use crate::model::{PlaceTransform, Piece, PuzzleFrame};
use crate::predicates::{
    ClosurePredicate, LocalizePredicate, PlacePredicate, RootPredicate, SuspendPredicate,
};
use crate::state::{Counters, Statistics};
use log::{info, warn};
use serde::Serialize;

/// A completed assembly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// One transform per piece id. Unplaced pieces keep their identity transform.
    pub transforms: Vec<PlaceTransform>,
    /// Ids of the boundary pieces, in the order they were laid.
    pub placement_order: Vec<usize>,
    /// Ids of pieces with no frame-contact edge.
    pub unplaced: Vec<usize>,
    /// The traced boundary corners, localized onto the frame.
    pub corners: Vec<Vector2>,
    /// How far the walk ended from where it started.
    pub closing_error: f64,
    pub tries: u64,
    pub retries: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SolveOutcome {
    Solved(Solution),
    NoSolution,
    BudgetExhausted,
}

impl SolveOutcome {
    pub fn solution(&self) -> Option<&Solution> {
        match self {
            SolveOutcome::Solved(solution) => Some(solution),
            _ => None,
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, SolveOutcome::Solved(_))
    }
}

#[derive(Debug, Clone)]
pub struct Solver {
    memo: PuzzleMemo,
    max_steps: Option<u64>,
}

impl Solver {
    /// Analyse raw outlines into pieces, in percentage units.
    ///
    /// The configuration and frame are validated, and every outline point
    /// must be finite.
    pub fn new(frame: PuzzleFrame, outlines: &[Vec<Vector2>], config: Config) -> Result<Self, PuzzleError> {
        config.validate()?;
        frame.validate()?;
        if let Some(piece) = outlines
            .iter()
            .position(|outline| !outline.iter().all(|point| point.is_finite()))
        {
            return Err(PuzzleError::NonFinitePoint { piece });
        }

        let pieces = outlines
            .iter()
            .enumerate()
            .map(|(id, outline)| Piece::new(id, outline, &config))
            .collect();
        Ok(Self::from_pieces(frame, pieces, config))
    }

    /// Solve already analysed pieces. Piece ids must be their positions.
    pub fn from_pieces(frame: PuzzleFrame, pieces: Vec<Piece>, config: Config) -> Self {
        Self {
            memo: PuzzleMemo::new(frame, pieces, config),
            max_steps: None,
        }
    }

    /// Give up after `max_steps` predicate calls.
    pub fn with_max_steps(mut self, max_steps: u64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.memo.pieces
    }

    pub fn frame(&self) -> &PuzzleFrame {
        &self.memo.frame
    }

    /// Search for the first assembly that closes around the frame.
    pub fn solve(&self) -> SolveOutcome {
        self.run().0
    }

    /// As [`solve`](Self::solve), also returning the search counters.
    pub fn solve_with_statistics(&self) -> (SolveOutcome, Statistics) {
        self.run()
    }

    fn run(&self) -> (SolveOutcome, Statistics) {
        let mut ctx = SearchContext::new(self.memo.clone());
        for &id in &self.memo.interior {
            warn!("piece {} has no frame-contact edge; leaving it unplaced", id);
        }

        let engine = EngineBuilder::new()
            .add(Box::new(RootPredicate))
            .add(Box::new(PlacePredicate::new()))
            .add(Box::new(ClosurePredicate))
            .add(Box::new(LocalizePredicate))
            .add(Statistics::counting_predicate(Counters::Solutions, None))
            .max_steps(self.max_steps)
            .terminal(SuspendPredicate)
            .build();

        let outcome = match engine.search(&mut ctx) {
            Some(engine) => {
                let (tries, retries) = engine.statistics();
                let solution = collect_solution(&ctx, tries, retries);
                info!(
                    "solved: {} pieces placed, closing error {:.3} ({} tries, {} retries)",
                    solution.placement_order.len(),
                    solution.closing_error,
                    tries,
                    retries
                );
                SolveOutcome::Solved(solution)
            }
            None if ctx.statistics.get(Counters::BudgetExhausted) > 0 => {
                info!("search stopped by step budget: {}", ctx.statistics);
                SolveOutcome::BudgetExhausted
            }
            None => {
                info!("search exhausted: {}", ctx.statistics);
                SolveOutcome::NoSolution
            }
        };
        (outcome, ctx.statistics)
    }
}

fn collect_solution(ctx: &SearchContext, tries: u64, retries: u64) -> Solution {
    Solution {
        transforms: (0..ctx.memo.piece_count())
            .map(|id| ctx.transform(id))
            .collect(),
        placement_order: ctx.placement_order(),
        unplaced: (0..ctx.memo.piece_count())
            .filter(|&id| !ctx.is_placed(id))
            .collect(),
        corners: ctx.turns(),
        closing_error: ctx.closing_error(),
        tries,
        retries,
    }
}
