// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! A piece seen under a trial transform.

use crate::geometry::Vector2;
use crate::model::edge::EdgeView;
use crate::model::piece::Piece;
use crate::model::transform::PlaceTransform;

/// Read-only snapshot of a piece after applying a [`PlaceTransform`].
///
/// Edges keep their indices; views read the transformed points.
#[derive(Debug, Clone)]
pub struct PlacedPiece<'a> {
    piece: &'a Piece,
    points: Vec<Vector2>,
    transform: PlaceTransform,
}

impl<'a> PlacedPiece<'a> {
    pub fn new(piece: &'a Piece, transform: PlaceTransform) -> Self {
        let center_of_mass = piece.center_of_mass();
        let points = piece
            .points()
            .iter()
            .map(|&p| transform.apply(p, center_of_mass))
            .collect();
        Self {
            piece,
            points,
            transform,
        }
    }

    pub fn piece(&self) -> &'a Piece {
        self.piece
    }

    pub fn points(&self) -> &[Vector2] {
        &self.points
    }

    pub fn transform(&self) -> PlaceTransform {
        self.transform
    }

    pub fn edge_count(&self) -> usize {
        self.piece.edge_count()
    }

    pub fn edge_view(&self, edge: usize) -> EdgeView<'_> {
        self.piece.edges()[edge].view(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_edges_follow_transform() {
        let points = vec![
            Vector2::new(0.0, 0.0),
            Vector2::new(10.0, 0.0),
            Vector2::new(10.0, 10.0),
            Vector2::new(0.0, 10.0),
        ];
        let piece = Piece::from_polygon(0, points, &Config::default());
        let transform = PlaceTransform::new(Vector2::new(100.0, 100.0), FRAC_PI_2);
        let placed = PlacedPiece::new(&piece, transform);

        // The centre of mass moves onto the target position.
        let moved = Vector2::mean(placed.points().iter().copied()).unwrap();
        assert_abs_diff_eq!(moved.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(moved.y, 100.0, epsilon = 1e-9);

        for edge in 0..placed.edge_count() {
            let original = piece.edge_view(edge);
            let view = placed.edge_view(edge);
            let expected = transform.apply(original.start(), piece.center_of_mass());
            assert_abs_diff_eq!(view.start().x, expected.x, epsilon = 1e-9);
            assert_abs_diff_eq!(view.start().y, expected.y, epsilon = 1e-9);
            assert_abs_diff_eq!(view.length(), original.length(), epsilon = 1e-9);
        }
    }
}
