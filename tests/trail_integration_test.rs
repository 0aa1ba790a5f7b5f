// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Integration tests for the trail-based backtracking system.
//!
//! These tests verify that the trail system works correctly when integrated
//! with SearchContext, demonstrating the core backtracking behavior that
//! the search engine depends on.

mod common;

use common::{square, v};
use jigsaw_solver::context::PuzzleMemo;
use jigsaw_solver::model::{FrameSide, PlaceTransform};
use jigsaw_solver::solver::boundary::BoundaryState;
use jigsaw_solver::{Config, Piece, PuzzleFrame, SearchContext, Trail};

fn two_piece_context() -> SearchContext {
    let config = Config::default();
    let pieces = vec![
        Piece::from_polygon(0, square(10.0), &config),
        Piece::from_polygon(1, square(10.0), &config),
    ];
    let frame = PuzzleFrame::axis_aligned(v(0.0, 0.0), 20.0, 10.0);
    SearchContext::new(PuzzleMemo::new(frame, pieces, config))
}

#[test]
fn test_search_context_simple_backtracking() {
    let mut ctx = two_piece_context();
    let identity = ctx.memo.pieces[0].identity_transform();

    let checkpoint = ctx.trail.checkpoint();
    ctx.place(0, PlaceTransform::new(v(1.0, 2.0), 0.5));
    assert!(ctx.is_placed(0));
    assert!(!ctx.trail.is_empty());

    // Rewind restores old values automatically!
    assert!(ctx.trail.rewind());
    assert_eq!(ctx.trail.len(), checkpoint);
    assert!(!ctx.is_placed(0));
    assert_eq!(ctx.transform(0), identity);
}

#[test]
fn test_nested_placements() {
    let mut ctx = two_piece_context();

    let cp1 = ctx.trail.len();
    ctx.place(1, PlaceTransform::new(v(5.0, 5.0), 0.0));
    ctx.commit_boundary(&BoundaryState {
        cursor: v(10.0, 10.0),
        quarter_turns: 1,
        turns: vec![v(10.0, 0.0)],
        last_side: None,
        new_turns: 1,
    });

    let cp2 = ctx.trail.len();
    ctx.place(0, PlaceTransform::new(v(5.0, 15.0), 1.0));
    ctx.commit_boundary(&BoundaryState {
        cursor: v(0.0, 20.0),
        quarter_turns: 2,
        turns: vec![v(10.0, 0.0), v(10.0, 20.0)],
        last_side: Some(FrameSide::Long),
        new_turns: 1,
    });
    assert_eq!(ctx.placement_order(), vec![1, 0]);
    assert!(ctx.remaining_pieces().is_empty());

    ctx.trail.rewind_to(cp2);
    assert_eq!(ctx.placement_order(), vec![1]);
    assert_eq!(ctx.remaining_pieces(), vec![0]);
    let boundary = ctx.boundary();
    assert_eq!(boundary.cursor, v(10.0, 10.0));
    assert_eq!(boundary.turns, vec![v(10.0, 0.0)]);
    assert_eq!(boundary.last_side, None);

    ctx.trail.rewind_to(cp1);
    assert!(ctx.placement_order().is_empty());
    assert_eq!(ctx.boundary(), BoundaryState::default());
}

#[test]
fn test_frozen_trail_keeps_committed_state() {
    let mut ctx = two_piece_context();
    ctx.place(0, PlaceTransform::new(v(5.0, 5.0), 0.0));
    ctx.trail.freeze();

    ctx.place(1, PlaceTransform::new(v(15.0, 5.0), 0.0));
    assert!(!ctx.trail.rewind_to(0));
    assert!(ctx.is_placed(0));
    assert!(!ctx.is_placed(1));
}

#[test]
fn test_typed_slots() {
    let mut trail = Trail::new();
    let side = trail.register::<Option<FrameSide>>(None);
    let angle = trail.register(-0.0f64);
    let count = trail.register(3usize);

    let checkpoint = trail.checkpoint();
    side.set(&mut trail, Some(FrameSide::Short));
    angle.set(&mut trail, std::f64::consts::PI);
    count.set(&mut trail, 4);
    assert_eq!(side.get(&trail), Some(FrameSide::Short));

    trail.rewind_to(checkpoint);
    assert_eq!(side.get(&trail), None);
    assert!(angle.get(&trail).is_sign_negative());
    assert_eq!(count.get(&trail), 3);
}

#[test]
fn test_maybe_set_skips_unchanged() {
    let mut trail = Trail::new();
    let flag = trail.register(false);
    assert!(!flag.maybe_set(&mut trail, false));
    assert!(trail.is_empty());
    assert!(flag.maybe_set(&mut trail, true));
    assert_eq!(trail.len(), 1);
}
