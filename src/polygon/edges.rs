// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Detection of the straight edges that can rest against the frame.
//!
//! Detection runs in three passes over the simplified, counter-clockwise ring:
//!
//! 1. **Run scan**: grow straight runs of consecutive vertices. A run is
//!    accepted only if the whole piece lies on one side of its line, which is
//!    what a piece pressed against a frame wall looks like.
//! 2. **Corner merge**: two runs meeting at a right angle are joined into one
//!    cornered edge, the signature of a frame-corner piece.
//! 3. **Selection**: keep the longest edges.
//!
//! Ring positions are handled in "unwrapped" form: a position `i` may exceed
//! the ring length and refers to vertex `i % n`.

use crate::config::Config;
use crate::geometry::angle::{difference, is_right_turn};
use crate::geometry::intersection::{line_crosses_segment, orientation, perpendicular_distance};
use crate::geometry::{Orientation, Vector2, GEOMETRY_EPSILON, MAX_EDGE_POINTS};
use crate::model::edge::{Corner, Edge};

/// Find, merge and select the frame-contact edges of a closed polygon.
///
/// Returns an empty list for rings with fewer than three points and for
/// pieces with no straight run satisfying the tolerances in `config`.
pub fn detect_edges(points: &[Vector2], config: &Config) -> Vec<Edge> {
    if points.len() < 3 {
        return Vec::new();
    }
    let candidates = scan_runs(points, config);
    let merged = merge_corners(points, candidates, config);
    select_longest(points, merged, config.max_edges_per_piece)
}

/// The vertex with the largest absolute turn between its two segments.
///
/// Turns equal within [`GEOMETRY_EPSILON`] resolve to the earliest vertex.
fn sharpest_vertex(points: &[Vector2]) -> usize {
    let n = points.len();
    let mut best = 0;
    let mut best_turn = -1.0;
    for i in 0..n {
        let previous = points[(i + n - 1) % n];
        let here = points[i];
        let next = points[(i + 1) % n];
        let turn = difference(previous.angle_to(here), here.angle_to(next)).abs();
        if turn > best_turn + GEOMETRY_EPSILON {
            best_turn = turn;
            best = i;
        }
    }
    best
}

/// Whether positions `start..=end` form a straight run the frame could touch.
fn is_valid_run(points: &[Vector2], start: usize, end: usize, line_epsilon: f64) -> bool {
    let n = points.len();
    let at = |i: usize| points[i % n];
    let a = at(start);
    let b = at(end);
    if a.distance_to(b) <= GEOMETRY_EPSILON {
        return false;
    }

    if (start..=end).any(|i| perpendicular_distance(a, b, at(i)) > line_epsilon) {
        return false;
    }

    if (end..start + n).any(|k| line_crosses_segment(a, b, at(k), at(k + 1))) {
        return false;
    }

    let mut side = None;
    for i in end + 1..start + n {
        match orientation(a, b, at(i)) {
            Orientation::Collinear => {}
            found => match side {
                None => side = Some(found),
                Some(expected) if expected != found => return false,
                Some(_) => {}
            },
        }
    }
    true
}

fn run_length(points: &[Vector2], start: usize, end: usize) -> f64 {
    let n = points.len();
    (start..end)
        .map(|i| points[i % n].distance_to(points[(i + 1) % n]))
        .sum()
}

/// Scan the ring once for maximal valid runs.
fn scan_runs(points: &[Vector2], config: &Config) -> Vec<Edge> {
    let n = points.len();
    let origin = sharpest_vertex(points);
    let max_points = MAX_EDGE_POINTS.min(n - 1);

    let mut candidates: Vec<Edge> = Vec::new();
    let mut start = origin;
    while start < origin + n {
        let mut end = start;
        while end + 1 - start < max_points && is_valid_run(points, start, end + 1, config.line_epsilon) {
            end += 1;
        }

        if end == start {
            start += 1;
            continue;
        }

        if run_length(points, start, end) >= config.min_edge_length {
            let indices = (start..=end).map(|i| i % n).collect();
            candidates.push(Edge::new(indices));
        }
        start = end;
    }

    let kept: Vec<bool> = (0..candidates.len())
        .map(|i| !is_redundant(&candidates, i))
        .collect();
    candidates
        .into_iter()
        .zip(kept)
        .filter_map(|(edge, keep)| keep.then_some(edge))
        .collect()
}

/// A candidate is redundant when another one covers all of its indices.
/// Of two identical candidates the earlier survives.
fn is_redundant(candidates: &[Edge], i: usize) -> bool {
    let edge = &candidates[i];
    candidates.iter().enumerate().any(|(j, other)| {
        j != i && edge.is_contained_in(other) && (j < i || !other.is_contained_in(edge))
    })
}

/// Join `next` onto `head` across a right-angle corner, if the pair qualifies.
///
/// Neither side may already hold a corner: a combined edge has exactly one.
fn try_absorb(points: &[Vector2], head: &Edge, next: &Edge, config: &Config) -> Option<Edge> {
    if head.has_corner() || next.has_corner() {
        return None;
    }
    let head_view = head.view(points);
    let next_view = next.view(points);
    if head_view.end().distance_to(next_view.start()) > config.corner_margin {
        return None;
    }
    if !is_right_turn(head_view.end_angle(), next_view.start_angle(), config.corner_margin_angle) {
        return None;
    }

    let mut indices = head.indices().to_vec();
    let first_end = indices.len() - 1;
    let shared = head.last_index() == next.first_index();
    let second_start = if shared { first_end } else { first_end + 1 };
    let tail = if shared { &next.indices()[1..] } else { next.indices() };
    indices.extend_from_slice(tail);

    if indices.len() > MAX_EDGE_POINTS {
        return None;
    }
    let distinct = indices
        .iter()
        .enumerate()
        .all(|(i, index)| !indices[..i].contains(index));
    if !distinct || indices[0] == indices[indices.len() - 1] {
        return None;
    }

    Some(Edge::with_corner(
        indices,
        Corner {
            first_end,
            second_start,
        },
    ))
}

/// Merge consecutive candidates that meet at a right angle.
fn merge_corners(points: &[Vector2], candidates: Vec<Edge>, config: &Config) -> Vec<Edge> {
    let mut merged: Vec<Edge> = Vec::with_capacity(candidates.len());
    for edge in candidates {
        let absorbed = merged
            .last()
            .and_then(|head| try_absorb(points, head, &edge, config));
        match absorbed {
            Some(combined) => {
                if let Some(head) = merged.last_mut() {
                    *head = combined;
                }
            }
            None => merged.push(edge),
        }
    }

    // The ring closes: the last chain may continue into the first edge.
    if merged.len() >= 2 {
        let last = merged.len() - 1;
        if let Some(combined) = try_absorb(points, &merged[last], &merged[0], config) {
            merged[last] = combined;
            merged.remove(0);
        }
    }
    merged
}

/// Longest first, ties by first index, at most `limit` edges.
fn select_longest(points: &[Vector2], mut edges: Vec<Edge>, limit: usize) -> Vec<Edge> {
    edges.sort_by(|a, b| {
        let la = a.view(points).length();
        let lb = b.view(points).length();
        lb.total_cmp(&la).then(a.first_index().cmp(&b.first_index()))
    });
    edges.truncate(limit);
    edges
}
