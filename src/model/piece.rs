// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Puzzle pieces with their analysed outlines.

use crate::config::Config;
use crate::geometry::{Vector2, GEOMETRY_EPSILON};
use crate::model::edge::{Edge, EdgeView};
use crate::model::transform::PlaceTransform;
use crate::polygon::{centroid, detect_edges, is_counter_clockwise, roughen};
use std::fmt;

/// One loose piece: a simplified counter-clockwise outline, its centre of
/// mass and the edges that can rest against the frame.
///
/// The geometry is fixed at construction; trial placements are held by the
/// search, not by the piece.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    id: usize,
    points: Vec<Vector2>,
    center_of_mass: Vector2,
    edges: Vec<Edge>,
}

impl Piece {
    /// Analyse a raw contour: simplify, orient and detect edges.
    pub fn new(id: usize, raw: &[Vector2], config: &Config) -> Self {
        let mut points = roughen(raw, config.roughen_epsilon);
        // Closed contours repeat their first point at the end.
        if points.len() > 1 && points[0].distance_to(points[points.len() - 1]) <= GEOMETRY_EPSILON {
            points.pop();
        }
        Self::from_polygon(id, points, config)
    }

    /// Build a piece from an already simplified polygon.
    pub fn from_polygon(id: usize, mut points: Vec<Vector2>, config: &Config) -> Self {
        if !is_counter_clockwise(&points) {
            points.reverse();
        }
        let center_of_mass = centroid(&points);
        let edges = detect_edges(&points, config);
        Self {
            id,
            points,
            center_of_mass,
            edges,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    pub fn center_of_mass(&self) -> Vector2 {
        self.center_of_mass
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Pieces without frame-contact edges sit in the interior.
    pub fn is_placeable(&self) -> bool {
        !self.edges.is_empty()
    }

    pub fn edge_view(&self, edge: usize) -> EdgeView<'_> {
        self.edges[edge].view(&self.points)
    }

    /// Leave the piece where it lies.
    pub fn identity_transform(&self) -> PlaceTransform {
        PlaceTransform::new(self.center_of_mass, 0.0)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "piece {}: {} points, {} edges, centre of mass {}",
            self.id,
            self.points.len(),
            self.edges.len(),
            self.center_of_mass
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn v(x: f64, y: f64) -> Vector2 {
        Vector2::new(x, y)
    }

    #[test]
    fn test_clockwise_outline_is_reversed() {
        let clockwise = vec![v(0.0, 0.0), v(0.0, 10.0), v(10.0, 10.0), v(10.0, 0.0)];
        let piece = Piece::from_polygon(3, clockwise, &Config::default());
        assert!(is_counter_clockwise(piece.points()));
        assert_eq!(piece.id(), 3);
        assert_abs_diff_eq!(piece.center_of_mass().x, 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(piece.center_of_mass().y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_dense_contour_is_simplified() {
        let mut raw = Vec::new();
        for i in 0..20 {
            raw.push(v(i as f64, 0.0));
        }
        for i in 0..20 {
            raw.push(v(20.0, i as f64));
        }
        for i in (1..=20).rev() {
            raw.push(v(i as f64, 20.0));
        }
        for i in (0..=20).rev() {
            raw.push(v(0.0, i as f64));
        }
        let piece = Piece::new(0, &raw, &Config::default());
        assert_eq!(piece.points().len(), 4);
        assert_eq!(piece.edge_count(), 2);
        assert!(piece.is_placeable());
    }

    #[test]
    fn test_degenerate_outline_has_no_edges() {
        let piece = Piece::new(1, &[v(0.0, 0.0), v(1.0, 1.0)], &Config::default());
        assert!(!piece.is_placeable());
        assert_eq!(piece.identity_transform().position, piece.center_of_mass());
        assert_eq!(piece.identity_transform().rotation, 0.0);
    }
}
