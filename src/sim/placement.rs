//! Evasive placement of the dismiss button
//!
//! Rejection sampling inside the card: draw a spot, test it against every
//! obstacle grown by a buffer, keep the first one that is clear. After the
//! attempt budget runs out the last sample is used unchecked, so a crowded
//! card never stalls the pointer handler.

use glam::DVec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, Size};
use crate::consts::*;

/// Knobs for one placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementParams {
    /// Samples drawn before giving up on a clear spot
    pub attempts: u32,
    /// Clearance added around every obstacle
    pub buffer: f64,
    /// Inset from the container edge
    pub margin: f64,
}

impl Default for PlacementParams {
    fn default() -> Self {
        Self {
            attempts: PLACEMENT_ATTEMPTS,
            buffer: COLLISION_BUFFER,
            margin: EDGE_MARGIN,
        }
    }
}

/// Where the element should go
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementResult {
    /// Top-left corner of the element
    pub position: DVec2,
    /// False when the budget ran out and `position` was never checked
    pub clear: bool,
    /// Samples drawn
    pub attempts: u32,
}

/// Closed sampling interval on one axis. Inverted bounds collapse onto `min`.
#[inline]
fn axis_range(start: f64, end: f64, extent: f64, margin: f64) -> (f64, f64) {
    let min = start + margin;
    let max = end - extent - margin;
    if max < min { (min, min) } else { (min, max) }
}

/// Valid top-left range for an element of `element` size inside `container`
pub fn valid_range(container: &Rect, element: Size, margin: f64) -> (DVec2, DVec2) {
    let (min_x, max_x) = axis_range(container.left, container.right(), element.width, margin);
    let (min_y, max_y) = axis_range(container.top, container.bottom(), element.height, margin);
    (DVec2::new(min_x, min_y), DVec2::new(max_x, max_y))
}

/// Whether an element rect would touch any buffered obstacle
pub fn collides(candidate: &Rect, obstacles: &[Rect], buffer: f64) -> bool {
    obstacles
        .iter()
        .any(|obstacle| candidate.overlaps(&obstacle.expanded(buffer)))
}

/// Find a spot for `element` inside `container` that keeps clear of `obstacles`
pub fn place_away_from<R: Rng + ?Sized>(
    container: &Rect,
    obstacles: &[Rect],
    element: Size,
    params: &PlacementParams,
    rng: &mut R,
) -> PlacementResult {
    let (min, max) = valid_range(container, element, params.margin);
    let budget = params.attempts.max(1);

    let mut position = min;
    for attempt in 1..=budget {
        position = DVec2::new(
            rng.random_range(min.x..=max.x),
            rng.random_range(min.y..=max.y),
        );
        let candidate = Rect::at(position, element);
        if !collides(&candidate, obstacles, params.buffer) {
            return PlacementResult {
                position,
                clear: true,
                attempts: attempt,
            };
        }
    }

    log::debug!(
        "No clear spot after {} samples, using ({:.1}, {:.1})",
        budget,
        position.x,
        position.y
    );
    PlacementResult {
        position,
        clear: false,
        attempts: budget,
    }
}
