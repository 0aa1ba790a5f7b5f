// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The rectangular frame the pieces are assembled into.

use crate::geometry::Vector2;
use crate::input::PuzzleError;
use crate::trail::TrailValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two frame side lengths a wall has.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSide {
    Long,
    Short,
}

impl FrameSide {
    pub fn opposite(self) -> FrameSide {
        match self {
            FrameSide::Long => FrameSide::Short,
            FrameSide::Short => FrameSide::Long,
        }
    }
}

impl fmt::Display for FrameSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameSide::Long => write!(f, "long"),
            FrameSide::Short => write!(f, "short"),
        }
    }
}

// 0 = unknown, 1 = long, 2 = short.
impl TrailValue for Option<FrameSide> {
    fn encode(self) -> u64 {
        match self {
            None => 0,
            Some(FrameSide::Long) => 1,
            Some(FrameSide::Short) => 2,
        }
    }

    fn decode(raw: u64) -> Self {
        match raw {
            1 => Some(FrameSide::Long),
            2 => Some(FrameSide::Short),
            _ => None,
        }
    }
}

/// The four inner corners of the frame, as located by the vision system.
///
/// The corners need not form a perfect rectangle; side lengths are averaged
/// over opposite sides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleFrame {
    pub top_left: Vector2,
    pub top_right: Vector2,
    pub bottom_left: Vector2,
    pub bottom_right: Vector2,
}

impl PuzzleFrame {
    pub fn new(
        top_left: Vector2,
        top_right: Vector2,
        bottom_left: Vector2,
        bottom_right: Vector2,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// An untilted frame with its bottom-left corner at `origin`.
    pub fn axis_aligned(origin: Vector2, width: f64, height: f64) -> Self {
        Self {
            top_left: origin + Vector2::new(0.0, height),
            top_right: origin + Vector2::new(width, height),
            bottom_left: origin,
            bottom_right: origin + Vector2::new(width, 0.0),
        }
    }

    fn corners(&self) -> [Vector2; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
        ]
    }

    pub fn width(&self) -> f64 {
        0.5 * (self.top_left.distance_to(self.top_right)
            + self.bottom_left.distance_to(self.bottom_right))
    }

    pub fn height(&self) -> f64 {
        0.5 * (self.top_left.distance_to(self.bottom_left)
            + self.top_right.distance_to(self.bottom_right))
    }

    pub fn center(&self) -> Vector2 {
        Vector2::mean(self.corners()).unwrap_or(Vector2::ZERO)
    }

    /// Tilt of the bottom side, bottom-left towards bottom-right.
    pub fn angle(&self) -> f64 {
        self.bottom_left.angle_to(self.bottom_right)
    }

    pub fn long_side(&self) -> f64 {
        self.width().max(self.height())
    }

    pub fn short_side(&self) -> f64 {
        self.width().min(self.height())
    }

    pub fn side_length(&self, side: FrameSide) -> f64 {
        match side {
            FrameSide::Long => self.long_side(),
            FrameSide::Short => self.short_side(),
        }
    }

    /// The side class of the horizontal (top and bottom) walls.
    pub fn width_side(&self) -> FrameSide {
        if self.width() >= self.height() {
            FrameSide::Long
        } else {
            FrameSide::Short
        }
    }

    /// Reject frames whose corners are not finite or whose sides have no length.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        let width = self.width();
        let height = self.height();
        let finite = self.corners().iter().all(|c| c.is_finite());
        if !finite || !(width > 0.0) || !(height > 0.0) {
            return Err(PuzzleError::InvalidFrame { width, height });
        }
        Ok(())
    }
}

impl fmt::Display for PuzzleFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "frame {:.2} x {:.2} centred at {} tilted {:.2}°",
            self.width(),
            self.height(),
            self.center(),
            self.angle().to_degrees()
        )
    }
}
