// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Two-dimensional points in the normalized puzzle coordinate space.
//!
//! Coordinates are percentages of the longer image dimension, with the origin
//! at the bottom-left. A `Vector2` is a plain value: every operation returns a
//! new vector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A point (or offset) in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// The origin.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: Vector2) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Direction from `self` towards `other`, in radians (`atan2`).
    pub fn angle_to(self, other: Vector2) -> f64 {
        (other.y - self.y).atan2(other.x - self.x)
    }

    /// Length of this vector taken as an offset from the origin.
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn dot(self, other: Vector2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Z component of the 3D cross product. Positive when `other` lies
    /// counter-clockwise of `self`.
    pub fn cross(self, other: Vector2) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Rotate this offset about the origin by `angle` radians (counter-clockwise).
    pub fn rotate(self, angle: f64) -> Vector2 {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    /// Rotate this point about `pivot` by `angle` radians (counter-clockwise).
    pub fn rotate_around(self, pivot: Vector2, angle: f64) -> Vector2 {
        (self - pivot).rotate(angle) + pivot
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Arithmetic mean of a set of points, `None` when empty.
    pub fn mean<I: IntoIterator<Item = Vector2>>(points: I) -> Option<Vector2> {
        let mut sum = Vector2::ZERO;
        let mut count = 0usize;
        for point in points {
            sum = sum + point;
            count += 1;
        }
        if count == 0 {
            None
        } else {
            Some(sum * (1.0 / count as f64))
        }
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;

    fn mul(self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.y * factor)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl From<(f64, f64)> for Vector2 {
    fn from((x, y): (f64, f64)) -> Self {
        Vector2::new(x, y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(4.0, -2.0);
        assert_eq!(a + b, Vector2::new(5.0, 0.0));
        assert_eq!(b - a, Vector2::new(3.0, -4.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
    }

    #[test]
    fn test_distance_and_angle() {
        let a = Vector2::new(1.0, 1.0);
        let b = Vector2::new(4.0, 5.0);
        assert_abs_diff_eq!(a.distance_to(b), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.angle_to(Vector2::new(1.0, 3.0)), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(a.angle_to(Vector2::new(-1.0, 1.0)), PI, epsilon = 1e-12);
    }

    #[test]
    fn test_rotate_around_pivot() {
        let pivot = Vector2::new(1.0, 1.0);
        let rotated = Vector2::new(2.0, 1.0).rotate_around(pivot, FRAC_PI_2);
        assert_abs_diff_eq!(rotated.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(rotated.y, 2.0, epsilon = 1e-12);

        let back = rotated.rotate_around(pivot, -FRAC_PI_2);
        assert_abs_diff_eq!(back.x, 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(back.y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cross_sign() {
        let east = Vector2::new(1.0, 0.0);
        let north = Vector2::new(0.0, 1.0);
        assert!(east.cross(north) > 0.0);
        assert!(north.cross(east) < 0.0);
    }

    #[test]
    fn test_mean() {
        assert_eq!(Vector2::mean(Vec::new()), None);
        let mean = Vector2::mean(vec![Vector2::new(0.0, 0.0), Vector2::new(2.0, 4.0)]);
        assert_eq!(mean, Some(Vector2::new(1.0, 2.0)));
    }
}
