// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Orientation-based line and segment predicates.
//!
//! Distances are measured perpendicular to the reference line so that the
//! collinearity tolerance has the same unit as the coordinates.

use super::constants::GEOMETRY_EPSILON;
use super::Vector2;

/// Which side of a directed line a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left of the line (counter-clockwise turn).
    CounterClockwise,
    /// Right of the line (clockwise turn).
    Clockwise,
    /// On the line within [`GEOMETRY_EPSILON`].
    Collinear,
}

/// Signed perpendicular distance of `p` from the directed line `a → b`.
///
/// Positive on the left. When `a == b` the plain distance to `a` is returned.
pub fn signed_distance(a: Vector2, b: Vector2, p: Vector2) -> f64 {
    let direction = b - a;
    let length = direction.length();
    if length < GEOMETRY_EPSILON {
        return p.distance_to(a);
    }
    direction.cross(p - a) / length
}

/// Unsigned perpendicular distance of `p` from the infinite line through `a` and `b`.
pub fn perpendicular_distance(a: Vector2, b: Vector2, p: Vector2) -> f64 {
    signed_distance(a, b, p).abs()
}

/// Orientation of `c` relative to the directed line `a → b`.
pub fn orientation(a: Vector2, b: Vector2, c: Vector2) -> Orientation {
    let distance = signed_distance(a, b, c);
    if distance > GEOMETRY_EPSILON {
        Orientation::CounterClockwise
    } else if distance < -GEOMETRY_EPSILON {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

fn strictly_opposite(first: Orientation, second: Orientation) -> bool {
    matches!(
        (first, second),
        (Orientation::Clockwise, Orientation::CounterClockwise)
            | (Orientation::CounterClockwise, Orientation::Clockwise)
    )
}

/// Whether segments `p1p2` and `q1q2` cross at a single interior point.
///
/// Touching at an endpoint and collinear overlap are not proper intersections.
pub fn segments_intersect(p1: Vector2, p2: Vector2, q1: Vector2, q2: Vector2) -> bool {
    strictly_opposite(orientation(p1, p2, q1), orientation(p1, p2, q2))
        && strictly_opposite(orientation(q1, q2, p1), orientation(q1, q2, p2))
}

/// Whether the infinite line through `a` and `b` strictly separates `q1` from `q2`.
pub fn line_crosses_segment(a: Vector2, b: Vector2, q1: Vector2, q2: Vector2) -> bool {
    strictly_opposite(orientation(a, b, q1), orientation(a, b, q2))
}
