// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Angle arithmetic in radians.
//!
//! All comparisons between directions go through [`difference`], which
//! returns the signed shortest rotation and so never trips over the 2π wrap.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// A quarter turn (90°).
pub const QUARTER_TURN: f64 = FRAC_PI_2;

/// Signed shortest rotation taking direction `a` onto direction `b`.
///
/// The result lies in `(-π, π]`.
pub fn difference(a: f64, b: f64) -> f64 {
    let delta = (b - a).rem_euclid(TAU);
    if delta > PI {
        delta - TAU
    } else {
        delta
    }
}

/// Wrap an angle into `(-π, π]`.
pub fn normalize(angle: f64) -> f64 {
    difference(0.0, angle)
}

/// Whether `to` is `from` rotated by +90° within `tolerance`.
pub fn is_right_turn(from: f64, to: f64, tolerance: f64) -> bool {
    difference(from + QUARTER_TURN, to).abs() <= tolerance
}

/// Whether two directions agree within `tolerance`.
pub fn is_parallel(a: f64, b: f64, tolerance: f64) -> bool {
    difference(a, b).abs() <= tolerance
}
