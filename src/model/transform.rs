// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rigid placement transforms.

use crate::geometry::angle::normalize;
use crate::geometry::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a piece goes: the absolute target of its centre of mass, and the
/// rotation about that centre relative to the piece as photographed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaceTransform {
    pub position: Vector2,
    /// Radians in `(-π, π]`.
    pub rotation: f64,
}

impl PlaceTransform {
    pub fn new(position: Vector2, rotation: f64) -> Self {
        Self {
            position,
            rotation: normalize(rotation),
        }
    }

    /// Map a point of the original piece, whose centre of mass is
    /// `center_of_mass`, to its placed location.
    pub fn apply(&self, point: Vector2, center_of_mass: Vector2) -> Vector2 {
        (point - center_of_mass).rotate(self.rotation) + self.position
    }
}

impl fmt::Display for PlaceTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move to {} rotate {:.2}°",
            self.position,
            self.rotation.to_degrees()
        )
    }
}

/// The transform that lays an edge starting at `edge_start` with first-segment
/// direction `start_angle` onto `cursor`, heading along `direction`.
///
/// ```text
/// rotation = normalize(direction − start_angle)
/// position = cursor − rotate(edge_start − center_of_mass, rotation)
/// ```
pub fn placement_transform(
    cursor: Vector2,
    direction: f64,
    edge_start: Vector2,
    start_angle: f64,
    center_of_mass: Vector2,
) -> PlaceTransform {
    let rotation = normalize(direction - start_angle);
    let position = cursor - (edge_start - center_of_mass).rotate(rotation);
    PlaceTransform { position, rotation }
}
