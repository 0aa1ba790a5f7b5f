// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use jigsaw_solver::Vector2;

pub fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

/// A piece with a straight bottom and right side meeting at a right angle.
///
/// The bottom runs `a` east from the origin and the right side `b` north.
/// The top and left sides zigzag by one unit, so they are not straight.
/// `a` and `b` must be even.
pub fn corner_piece(a: f64, b: f64) -> Vec<Vector2> {
    let mut points = vec![v(0.0, 0.0), v(a, 0.0), v(a, b)];
    let top_steps = (a / 2.0) as usize;
    for k in 1..top_steps {
        points.push(v(a - 2.0 * k as f64, b + (k % 2) as f64));
    }
    points.push(v(0.0, b));
    let left_steps = (b / 2.0) as usize;
    for k in 1..left_steps {
        points.push(v(-((k % 2) as f64), b - 2.0 * k as f64));
    }
    points
}

/// An axis-aligned square with corner at the origin.
pub fn square(side: f64) -> Vec<Vector2> {
    vec![v(0.0, 0.0), v(side, 0.0), v(side, side), v(0.0, side)]
}

/// A piece with no straight side at all: every side zigzags.
pub fn interior_piece() -> Vec<Vector2> {
    let mut points = Vec::new();
    for k in 0..5 {
        points.push(v(2.0 * k as f64, -((k % 2) as f64)));
    }
    for k in 0..5 {
        points.push(v(10.0 + (k % 2) as f64, 2.0 * k as f64));
    }
    for k in 0..5 {
        points.push(v(10.0 - 2.0 * k as f64, 10.0 + (k % 2) as f64));
    }
    for k in 0..5 {
        points.push(v(-((k % 2) as f64), 10.0 - 2.0 * k as f64));
    }
    points
}

/// Rotate an outline about the origin by `angle`, then move it by `offset`,
/// as if the piece had been dropped loose on the table.
pub fn scatter(outline: &[Vector2], angle: f64, offset: Vector2) -> Vec<Vector2> {
    outline.iter().map(|p| p.rotate(angle) + offset).collect()
}

/// Whether `point` is within `tolerance` of one of `targets`.
pub fn near_any(point: Vector2, targets: &[Vector2], tolerance: f64) -> bool {
    targets.iter().any(|t| t.distance_to(point) <= tolerance)
}
