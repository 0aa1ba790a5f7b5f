// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable search state (Tier 2: DYNAMIC).

use crate::geometry::{Vector2, FRAME_CORNERS};
use crate::model::{FrameSide, PlaceTransform};
use crate::trail::{Trail, Trailed};

use super::PuzzleMemo;

/// A point stored as two trailed coordinates.
#[derive(Debug, Clone, Copy)]
pub struct TrailedPoint {
    x: Trailed<f64>,
    y: Trailed<f64>,
}

impl TrailedPoint {
    pub fn register(trail: &mut Trail, initial: Vector2) -> Self {
        Self {
            x: trail.register(initial.x),
            y: trail.register(initial.y),
        }
    }

    pub fn get(&self, trail: &Trail) -> Vector2 {
        Vector2::new(self.x.get(trail), self.y.get(trail))
    }

    pub fn set(&self, trail: &mut Trail, value: Vector2) {
        self.x.maybe_set(trail, value.x);
        self.y.maybe_set(trail, value.y);
    }
}

/// Mutable search state (Tier 2: DYNAMIC).
///
/// Every field is a handle to a slot owned by the trail, so the engine's
/// rewind restores all of it. Nothing here is ever rolled back by hand.
#[derive(Debug)]
pub struct DynamicState {
    // Boundary walk.
    pub cursor: TrailedPoint,
    pub quarter_turns: Trailed<usize>,
    pub last_side: Trailed<Option<FrameSide>>,
    pub turn_count: Trailed<usize>,
    pub turns: [TrailedPoint; FRAME_CORNERS],

    // Per piece, indexed by id.
    pub placed: Vec<Trailed<bool>>,
    pub positions: Vec<TrailedPoint>,
    pub rotations: Vec<Trailed<f64>>,

    /// Slot `k` holds the id of the `k`th placed piece.
    pub placement_order: Vec<Trailed<usize>>,
    pub placed_count: Trailed<usize>,

    pub closing_error: Trailed<f64>,
}

impl DynamicState {
    /// Register every slot on `trail`, with each piece at its identity transform.
    pub fn new(memo: &PuzzleMemo, trail: &mut Trail) -> Self {
        let count = memo.piece_count();
        Self {
            cursor: TrailedPoint::register(trail, Vector2::ZERO),
            quarter_turns: trail.register(0usize),
            last_side: trail.register(None),
            turn_count: trail.register(0usize),
            turns: std::array::from_fn(|_| TrailedPoint::register(trail, Vector2::ZERO)),
            placed: (0..count).map(|_| trail.register(false)).collect(),
            positions: memo
                .pieces
                .iter()
                .map(|piece| TrailedPoint::register(trail, piece.center_of_mass()))
                .collect(),
            rotations: (0..count).map(|_| trail.register(0.0)).collect(),
            placement_order: (0..count).map(|_| trail.register(0usize)).collect(),
            placed_count: trail.register(0usize),
            closing_error: trail.register(0.0),
        }
    }

    pub fn transform(&self, trail: &Trail, piece: usize) -> PlaceTransform {
        PlaceTransform {
            position: self.positions[piece].get(trail),
            rotation: self.rotations[piece].get(trail),
        }
    }

    pub fn set_transform(&self, trail: &mut Trail, piece: usize, transform: PlaceTransform) {
        self.positions[piece].set(trail, transform.position);
        self.rotations[piece].maybe_set(trail, transform.rotation);
    }
}
