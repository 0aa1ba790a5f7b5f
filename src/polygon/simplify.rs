// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Recursive line simplification ("roughening") of dense contours.
//!
//! Contours traced from a raster image carry a point per pixel step. The
//! search only needs the essential vertices, so each contour is reduced with
//! the Douglas–Peucker scheme: keep the point farthest from the chord if it
//! deviates by more than `epsilon`, recurse on both halves, and otherwise
//! collapse the run to its two endpoints.
//!
//! The farthest point is the *first* point reaching the maximum distance. With
//! that tie-break the result is a fixed point: roughening a roughened contour
//! with the same `epsilon` returns it unchanged.

use crate::geometry::intersection::perpendicular_distance;
use crate::geometry::Vector2;

/// Simplify `points` so that no dropped point lies farther than `epsilon`
/// from the chord that replaced it.
///
/// The result is a subsequence of the input that keeps both endpoints.
/// Inputs with fewer than three points are returned unchanged.
pub fn roughen(points: &[Vector2], epsilon: f64) -> Vec<Vector2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut result = Vec::with_capacity(points.len());
    roughen_into(points, epsilon, &mut result);
    // roughen_into leaves out the final endpoint of each run it emits.
    result.push(points[points.len() - 1]);
    result
}

/// Append the kept points of `run`, excluding its last point, to `out`.
fn roughen_into(run: &[Vector2], epsilon: f64, out: &mut Vec<Vector2>) {
    let n = run.len();
    if n <= 2 {
        out.push(run[0]);
        return;
    }

    let first = run[0];
    let last = run[n - 1];
    let mut split = 0;
    let mut max_distance = 0.0;
    for (i, &point) in run.iter().enumerate().take(n - 1).skip(1) {
        let distance = perpendicular_distance(first, last, point);
        if distance > max_distance {
            max_distance = distance;
            split = i;
        }
    }

    if max_distance > epsilon {
        roughen_into(&run[..=split], epsilon, out);
        roughen_into(&run[split..], epsilon, out);
    } else {
        out.push(first);
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn ring() -> impl Strategy<Value = Vec<Vector2>> {
        prop::collection::vec((-100.0f64..100.0, -100.0f64..100.0), 0..40)
            .prop_map(|coords| coords.into_iter().map(|(x, y)| Vector2::new(x, y)).collect())
    }

    proptest! {
        #[test]
        fn roughen_never_grows(points in ring(), epsilon in 0.0f64..20.0) {
            let once = roughen(&points, epsilon);
            prop_assert!(once.len() <= points.len());
            prop_assert_eq!(once.first(), points.first());
            prop_assert_eq!(once.last(), points.last());
        }

        #[test]
        fn roughen_is_idempotent(points in ring(), epsilon in 0.0f64..20.0) {
            let once = roughen(&points, epsilon);
            prop_assert_eq!(roughen(&once, epsilon), once);
        }

        #[test]
        fn roughen_keeps_a_subsequence(points in ring(), epsilon in 0.0f64..20.0) {
            let once = roughen(&points, epsilon);
            let mut remaining = points.iter();
            for kept in &once {
                prop_assert!(remaining.any(|p| p == kept));
            }
        }
    }
}
