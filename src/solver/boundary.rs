// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The walk around the inside of the frame.
//!
//! Pieces are laid edge to edge, counter-clockwise, starting at the origin
//! heading east. Each frame corner shows up as a quarter turn on a piece
//! edge. [`BoundaryState`] checks every step of that walk against the frame:
//! walls must not run past a side, the distance between turns must be one of
//! the two side lengths, and long and short walls must alternate.
//!
//! The state is a plain value. The search loads it from the trail, walks a
//! candidate piece, and commits the result only if the walk succeeded.

use crate::config::Config;
use crate::geometry::angle::QUARTER_TURN;
use crate::geometry::{Vector2, FRAME_CORNERS};
use crate::model::{FrameSide, PuzzleFrame};
use crate::solver::PruneReason;

#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryState {
    /// Where the next edge must start.
    pub cursor: Vector2,
    /// Heading in quarter turns counter-clockwise from east.
    pub quarter_turns: usize,
    /// Corners traced so far, in walk order.
    pub turns: Vec<Vector2>,
    /// Side class of the last measured wall.
    pub last_side: Option<FrameSide>,
    /// Turns made since the state was loaded, i.e. by the piece being walked.
    pub new_turns: usize,
}

impl Default for BoundaryState {
    fn default() -> Self {
        Self {
            cursor: Vector2::ZERO,
            quarter_turns: 0,
            turns: Vec::with_capacity(FRAME_CORNERS),
            last_side: None,
            new_turns: 0,
        }
    }
}

impl BoundaryState {
    /// Current heading in radians; always a multiple of 90°.
    pub fn direction(&self) -> f64 {
        (self.quarter_turns % 4) as f64 * QUARTER_TURN
    }

    pub fn last_turn(&self) -> Option<Vector2> {
        self.turns.last().copied()
    }

    /// The side class of the wall currently being walked.
    fn walked_side(&self) -> FrameSide {
        self.last_side
            .map(FrameSide::opposite)
            .unwrap_or(FrameSide::Long)
    }

    /// Move the cursor straight to `to`, checking the wall still fits its side.
    pub fn advance(&mut self, to: Vector2, frame: &PuzzleFrame, config: &Config) -> Result<(), PruneReason> {
        if let Some(last) = self.last_turn() {
            let limit = frame.side_length(self.walked_side()) + config.placement_margin;
            if last.distance_to(to) > limit {
                return Err(PruneReason::Overflow);
            }
        }
        self.cursor = to;
        Ok(())
    }

    /// Turn a quarter counter-clockwise at `at`.
    ///
    /// The first turn is unconstrained. Every later turn closes a wall whose
    /// length must match a frame side, and that side must differ from the
    /// previous wall's. A square frame matches both sides; the alternate one
    /// is taken.
    pub fn turn(&mut self, at: Vector2, frame: &PuzzleFrame, config: &Config) -> Result<(), PruneReason> {
        if self.turns.len() >= FRAME_CORNERS {
            return Err(PruneReason::TooManyTurns);
        }

        if let Some(last) = self.last_turn() {
            let side = classify_wall(last.distance_to(at), self.last_side, frame, config)?;
            if self.last_side == Some(side) {
                return Err(PruneReason::SideRepeated);
            }
            self.last_side = Some(side);
        }

        self.turns.push(at);
        self.cursor = at;
        self.quarter_turns += 1;
        self.new_turns += 1;
        Ok(())
    }

    /// Check that the walk has traced the whole frame and come home.
    ///
    /// Returns the distance between the final cursor and the start.
    pub fn close(&self, frame: &PuzzleFrame, config: &Config) -> Result<f64, PruneReason> {
        if self.turns.len() != FRAME_CORNERS || self.quarter_turns % 4 != 0 {
            return Err(PruneReason::NotClosed);
        }
        let error = self.cursor.length();
        if error > config.closure_margin {
            return Err(PruneReason::NotClosed);
        }

        let closing_wall = self.turns[FRAME_CORNERS - 1].distance_to(self.turns[0]);
        let expected = self.walked_side();
        if (closing_wall - frame.side_length(expected)).abs() > config.placement_margin {
            return Err(PruneReason::NotClosed);
        }
        Ok(error)
    }
}

/// Which frame side a wall of `length` is, preferring the one that alternates.
fn classify_wall(
    length: f64,
    last_side: Option<FrameSide>,
    frame: &PuzzleFrame,
    config: &Config,
) -> Result<FrameSide, PruneReason> {
    let fits = |side| (length - frame.side_length(side)).abs() <= config.placement_margin;
    match (fits(FrameSide::Long), fits(FrameSide::Short)) {
        (true, true) => Ok(last_side.map(FrameSide::opposite).unwrap_or(FrameSide::Long)),
        (true, false) => Ok(FrameSide::Long),
        (false, true) => Ok(FrameSide::Short),
        (false, false) => Err(PruneReason::TurnLength),
    }
}
