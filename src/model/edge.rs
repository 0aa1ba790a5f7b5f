// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Frame-contact edges and borrowed views over their geometry.
//!
//! An [`Edge`] never owns coordinates. It lists indices into the point buffer
//! of its piece, so the same edge describes both the piece at rest and every
//! trial placement of it; an [`EdgeView`] pairs the edge with whichever buffer
//! is current.

use crate::geometry::Vector2;

/// Where two straight runs were joined across a right angle.
///
/// Both fields are positions within [`Edge::indices`]. When the runs share a
/// vertex the two positions are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Corner {
    /// Position of the last point of the first run.
    pub first_end: usize,
    /// Position of the first point of the second run.
    pub second_start: usize,
}

/// A straight run (or two runs meeting at a corner) on a piece outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    indices: Vec<usize>,
    corner: Option<Corner>,
}

impl Edge {
    /// A straight run over `indices`.
    pub fn new(indices: Vec<usize>) -> Self {
        debug_assert!(indices.len() >= 2, "an edge needs two points");
        Self {
            indices,
            corner: None,
        }
    }

    pub(crate) fn with_corner(indices: Vec<usize>, corner: Corner) -> Self {
        debug_assert!(corner.first_end <= corner.second_start);
        debug_assert!(corner.second_start < indices.len());
        Self {
            indices,
            corner: Some(corner),
        }
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn corner(&self) -> Option<Corner> {
        self.corner
    }

    pub fn has_corner(&self) -> bool {
        self.corner.is_some()
    }

    pub fn first_index(&self) -> usize {
        self.indices[0]
    }

    pub fn last_index(&self) -> usize {
        self.indices[self.indices.len() - 1]
    }

    /// Whether every index of `self` also occurs in `other`.
    pub fn is_contained_in(&self, other: &Edge) -> bool {
        self.indices.iter().all(|i| other.indices.contains(i))
    }

    /// Read this edge against a point buffer.
    pub fn view<'a>(&'a self, points: &'a [Vector2]) -> EdgeView<'a> {
        EdgeView { edge: self, points }
    }
}

/// An [`Edge`] read against a concrete point buffer.
#[derive(Debug, Clone, Copy)]
pub struct EdgeView<'a> {
    edge: &'a Edge,
    points: &'a [Vector2],
}

impl<'a> EdgeView<'a> {
    pub fn edge(&self) -> &'a Edge {
        self.edge
    }

    fn point(&self, position: usize) -> Vector2 {
        self.points[self.edge.indices[position]]
    }

    pub fn start(&self) -> Vector2 {
        self.point(0)
    }

    pub fn end(&self) -> Vector2 {
        self.point(self.edge.indices.len() - 1)
    }

    /// All points of the edge in order.
    pub fn points(&self) -> impl Iterator<Item = Vector2> + 'a {
        let points = self.points;
        self.edge.indices.iter().map(move |&i| points[i])
    }

    /// Sum of the segment lengths.
    pub fn length(&self) -> f64 {
        let indices = &self.edge.indices;
        indices
            .windows(2)
            .map(|pair| self.points[pair[0]].distance_to(self.points[pair[1]]))
            .sum()
    }

    /// Direction of the first segment.
    pub fn start_angle(&self) -> f64 {
        self.point(0).angle_to(self.point(1))
    }

    /// Direction of the last segment.
    pub fn end_angle(&self) -> f64 {
        let n = self.edge.indices.len();
        self.point(n - 2).angle_to(self.point(n - 1))
    }

    /// End of the first straight run: the corner approach, or the edge end.
    pub fn first_run_end(&self) -> Vector2 {
        match self.edge.corner {
            Some(corner) => self.point(corner.first_end),
            None => self.end(),
        }
    }

    /// The turning point of a cornered edge.
    ///
    /// Runs that share a vertex turn on it; otherwise the turn is midway
    /// across the gap.
    pub fn corner_point(&self) -> Option<Vector2> {
        self.edge.corner.map(|corner| {
            let a = self.point(corner.first_end);
            let b = self.point(corner.second_start);
            (a + b) * 0.5
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn square() -> Vec<Vector2> {
        vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(4.0, 0.0),
            Vector2::new(4.0, 4.0),
            Vector2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn test_straight_view() {
        let points = square();
        let edge = Edge::new(vec![1, 2]);
        let view = edge.view(&points);
        assert_eq!(view.start(), Vector2::new(4.0, 0.0));
        assert_eq!(view.end(), Vector2::new(4.0, 4.0));
        assert_abs_diff_eq!(view.length(), 4.0, epsilon = 1e-12);
        assert_abs_diff_eq!(view.start_angle(), FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(view.first_run_end(), view.end());
        assert_eq!(view.corner_point(), None);
    }

    #[test]
    fn test_cornered_view() {
        let points = square();
        let edge = Edge::with_corner(
            vec![0, 1, 2],
            Corner {
                first_end: 1,
                second_start: 1,
            },
        );
        let view = edge.view(&points);
        assert_abs_diff_eq!(view.length(), 8.0, epsilon = 1e-12);
        assert_abs_diff_eq!(view.start_angle(), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(view.end_angle(), FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(view.first_run_end(), Vector2::new(4.0, 0.0));
        assert_eq!(view.corner_point(), Some(Vector2::new(4.0, 0.0)));
        assert_eq!(view.points().count(), 3);
    }

    #[test]
    fn test_view_follows_buffer() {
        let edge = Edge::new(vec![0, 1]);
        let moved: Vec<_> = square().into_iter().map(|p| p + Vector2::new(10.0, 0.0)).collect();
        assert_eq!(edge.view(&moved).start(), Vector2::new(10.0, 0.0));
    }

    #[test]
    fn test_containment() {
        let short = Edge::new(vec![1, 2]);
        let long = Edge::new(vec![0, 1, 2]);
        assert!(short.is_contained_in(&long));
        assert!(!long.is_contained_in(&short));
        assert_eq!(long.first_index(), 0);
        assert_eq!(long.last_index(), 2);
    }
}
