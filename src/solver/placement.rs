// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Walking a candidate piece along the boundary.

use crate::config::Config;
use crate::geometry::angle::{is_parallel, is_right_turn};
use crate::model::{placement_transform, EdgeView, Piece, PlaceTransform, PlacedPiece, PuzzleFrame};
use crate::solver::boundary::BoundaryState;
use crate::solver::PruneReason;

/// Place `piece` so that `edge` starts at the cursor heading along the
/// current direction, then walk it.
///
/// On success `state` holds the boundary after the piece, and the transform
/// that produced it is returned.
pub fn place_candidate(
    state: &mut BoundaryState,
    piece: &Piece,
    edge: usize,
    frame: &PuzzleFrame,
    config: &Config,
) -> Result<PlaceTransform, PruneReason> {
    let view = piece.edge_view(edge);
    let transform = placement_transform(
        state.cursor,
        state.direction(),
        view.start(),
        view.start_angle(),
        piece.center_of_mass(),
    );
    let placed = PlacedPiece::new(piece, transform);
    state.new_turns = 0;
    walk_piece(state, &placed, edge, frame, config)?;
    Ok(transform)
}

/// Walk the chosen edge, then slide onto any further edges of the same piece
/// that continue from where it ended.
fn walk_piece(
    state: &mut BoundaryState,
    placed: &PlacedPiece<'_>,
    edge: usize,
    frame: &PuzzleFrame,
    config: &Config,
) -> Result<(), PruneReason> {
    let mut used = vec![false; placed.edge_count()];
    used[edge] = true;
    walk_edge(state, placed.edge_view(edge), frame, config)?;

    while let Some(next) = connecting_edge(state, placed, &used, config) {
        used[next] = true;
        let view = placed.edge_view(next);
        if !is_parallel(state.direction(), view.start_angle(), config.corner_margin_angle) {
            state.turn(state.cursor, frame, config)?;
        }
        state.advance(view.first_run_end(), frame, config)?;
    }
    Ok(())
}

/// First run, turn at the corner, then on to the end.
fn walk_edge(
    state: &mut BoundaryState,
    view: EdgeView<'_>,
    frame: &PuzzleFrame,
    config: &Config,
) -> Result<(), PruneReason> {
    state.advance(view.first_run_end(), frame, config)?;
    if let Some(corner) = view.corner_point() {
        state.turn(corner, frame, config)?;
        state.advance(view.end(), frame, config)?;
    }
    Ok(())
}

/// An unused edge starting at the cursor that continues straight on, or
/// turns a right angle if this piece has not turned yet.
fn connecting_edge(
    state: &BoundaryState,
    placed: &PlacedPiece<'_>,
    used: &[bool],
    config: &Config,
) -> Option<usize> {
    let direction = state.direction();
    (0..placed.edge_count()).find(|&i| {
        if used[i] {
            return false;
        }
        let view = placed.edge_view(i);
        if view.start().distance_to(state.cursor) > config.corner_margin {
            return false;
        }
        let angle = view.start_angle();
        is_parallel(direction, angle, config.corner_margin_angle)
            || (state.new_turns == 0 && is_right_turn(direction, angle, config.corner_margin_angle))
    })
}
