// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Pick-and-place instructions for the actuator.
//!
//! Each instruction travels as one text line, `<type>=<json>`:
//!
//! ```text
//! move={"grabX":12.5,"grabY":40.0,"placeX":60.0,"placeY":20.0,"rotationDegrees":270.0}
//! reset={"start":false}
//! ```
//!
//! The controller asks for one move at a time. [`AssemblySequence`] hands
//! out the moves of a solution in placement order, then answers with a
//! `reset` once they are used up.

use crate::model::{Piece, PlaceTransform};
use crate::solver::Solution;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::f64::consts::PI;
use std::fmt;

/// Degrees in `[0, 360)` for a rotation in `(-π, π]` radians: negative
/// rotations are expressed as the equivalent positive one.
pub fn rotation_degrees(radians: f64) -> f64 {
    let degrees = 180.0 * radians.abs() / PI;
    if radians < 0.0 {
        360.0 - degrees
    } else {
        degrees
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveInstruction {
    pub grab_x: f64,
    pub grab_y: f64,
    pub place_x: f64,
    pub place_y: f64,
    pub rotation_degrees: f64,
}

impl MoveInstruction {
    /// Grab `piece` by its centre of mass and put it down as `transform` says.
    pub fn new(piece: &Piece, transform: &PlaceTransform) -> Self {
        let grab = piece.center_of_mass();
        Self {
            grab_x: grab.x,
            grab_y: grab.y,
            place_x: transform.position.x,
            place_y: transform.position.y,
            rotation_degrees: rotation_degrees(transform.rotation),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResetInstruction {
    /// True when a fresh sequence is ready; false when the last one is used up.
    pub start: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Instruction {
    Move(MoveInstruction),
    Reset(ResetInstruction),
}

impl Instruction {
    pub fn type_name(&self) -> &'static str {
        match self {
            Instruction::Move(_) => "move",
            Instruction::Reset(_) => "reset",
        }
    }

    /// Encode as a `<type>=<json>` line, without the trailing newline.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        let body = match self {
            Instruction::Move(instruction) => serde_json::to_string(instruction)?,
            Instruction::Reset(instruction) => serde_json::to_string(instruction)?,
        };
        Ok(format!("{}={}", self.type_name(), body))
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_line() {
            Ok(line) => write!(f, "{}", line),
            Err(_) => Err(fmt::Error),
        }
    }
}

/// The queue of moves for one solved puzzle.
#[derive(Debug, Clone, Default)]
pub struct AssemblySequence {
    moves: VecDeque<MoveInstruction>,
}

impl AssemblySequence {
    /// Queue one move per placed piece, in placement order.
    ///
    /// `pieces` must be the pieces the solution was computed for.
    pub fn from_solution(solution: &Solution, pieces: &[Piece]) -> Self {
        let moves = solution
            .placement_order
            .iter()
            .map(|&id| MoveInstruction::new(&pieces[id], &solution.transforms[id]))
            .collect();
        Self { moves }
    }

    /// Announce that a sequence is ready.
    pub fn start_instruction(&self) -> Instruction {
        Instruction::Reset(ResetInstruction { start: true })
    }

    /// The next move, or a `reset` with `start: false` once none are left.
    pub fn next(&mut self) -> Instruction {
        match self.moves.pop_front() {
            Some(instruction) => Instruction::Move(instruction),
            None => Instruction::Reset(ResetInstruction { start: false }),
        }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> impl Iterator<Item = &MoveInstruction> {
        self.moves.iter()
    }
}
