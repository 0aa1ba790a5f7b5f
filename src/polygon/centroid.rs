// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Area and centre of mass of closed polygons (shoelace formula).

use crate::geometry::{Vector2, GEOMETRY_EPSILON};

/// Consecutive vertex pairs of the closed ring, including the wrap-around pair.
fn ring_pairs(points: &[Vector2]) -> impl Iterator<Item = (Vector2, Vector2)> + '_ {
    let n = points.len();
    (0..n).map(move |i| (points[i], points[(i + 1) % n]))
}

/// Signed area of the closed ring; positive for counter-clockwise order.
pub fn signed_area(points: &[Vector2]) -> f64 {
    0.5 * ring_pairs(points).map(|(a, b)| a.cross(b)).sum::<f64>()
}

/// Whether the ring winds counter-clockwise (interior on the left of each edge).
pub fn is_counter_clockwise(points: &[Vector2]) -> bool {
    signed_area(points) > 0.0
}

/// Centre of mass of the closed ring.
///
/// Degenerate input (empty, or with area below [`GEOMETRY_EPSILON`]) yields
/// the origin; callers must not rely on it in that case.
pub fn centroid(points: &[Vector2]) -> Vector2 {
    let mut area = 0.0;
    let mut cx = 0.0;
    let mut cy = 0.0;
    for (a, b) in ring_pairs(points) {
        let cross = a.cross(b);
        area += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    area *= 0.5;

    if area.abs() < GEOMETRY_EPSILON {
        return Vector2::ZERO;
    }
    Vector2::new(cx / (6.0 * area), cy / (6.0 * area))
}
