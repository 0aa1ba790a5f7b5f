// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! LocalizePredicate - moves a closed tiling onto the frame.
//!
//! The walk builds the tiling in its own coordinates: it starts at the
//! origin heading east, so its first wall is horizontal whatever the frame.
//! Localizing rotates the tiling about the centroid of its traced corners
//! so that it matches the frame's orientation, then translates that centroid
//! onto the frame centre.

use crate::config::Config;
use crate::context::SearchContext;
use crate::engine::{Predicate, PredicateResult};
use crate::geometry::angle::{normalize, QUARTER_TURN};
use crate::geometry::Vector2;
use crate::model::{FrameSide, PlaceTransform, PuzzleFrame};
use crate::polygon::centroid;
use log::debug;

#[derive(Debug)]
pub struct LocalizePredicate;

/// Rotation taking the traced tiling onto the frame.
///
/// `last_side` is the side class of the last measured wall, which is
/// vertical in the walk's coordinates; the horizontal walls are the other
/// class. When those do not match the frame's own horizontal sides the
/// tiling is stood on end first.
pub fn tiling_rotation(frame: &PuzzleFrame, config: &Config, last_side: Option<FrameSide>) -> f64 {
    let horizontal = last_side.map(FrameSide::opposite).unwrap_or(FrameSide::Long);
    let square = frame.long_side() - frame.short_side() <= config.placement_margin;
    if square || horizontal == frame.width_side() {
        frame.angle()
    } else {
        frame.angle() + QUARTER_TURN
    }
}

impl Predicate for LocalizePredicate {
    fn try_pred(&mut self, ctx: &mut SearchContext, _round: usize) -> PredicateResult {
        let boundary = ctx.boundary();
        let traced = centroid(&boundary.turns);
        let frame = ctx.memo.frame;
        let rotation = tiling_rotation(&frame, &ctx.memo.config, boundary.last_side);
        let center = frame.center();
        let localize = |point: Vector2| (point - traced).rotate(rotation) + center;

        for piece in ctx.placement_order() {
            let transform = ctx.transform(piece);
            ctx.set_transform(
                piece,
                PlaceTransform::new(
                    localize(transform.position),
                    normalize(transform.rotation + rotation),
                ),
            );
        }
        for (index, &turn) in boundary.turns.iter().enumerate() {
            ctx.set_turn(index, localize(turn));
        }

        debug!(
            "localized: rotated {:.2}°, traced centroid {} onto {}",
            rotation.to_degrees(),
            traced,
            center
        );
        PredicateResult::Success
    }

    fn name(&self) -> &str {
        "Localize"
    }
}
