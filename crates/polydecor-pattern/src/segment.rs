//! Path segment decomposition with cumulative arc length.

use polydecor_core::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// One straight piece of a path with its position along the path
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub a: Point,
    pub b: Point,
    /// Arc length from the path start to `a`
    pub dist_a: f64,
    /// Arc length from the path start to `b`
    pub dist_b: f64,
    /// Direction in degrees, 0 = up on screen, clockwise
    pub heading: f64,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.dist_b - self.dist_a
    }
}

/// Heading of the direction from `a` to `b`, in [0, 360)
///
/// atan2 measures from +x; adding 90 moves zero to screen up (-y), which
/// makes angles grow clockwise on a y-down screen.
pub fn compute_segment_heading(a: &Point, b: &Point) -> f64 {
    // the dividend is always in [270, 630], so `%` stays in [0, 360)
    ((b.y - a.y).atan2(b.x - a.x) * 180.0 / PI + 90.0 + 360.0) % 360.0
}

/// Split a path into segments, skipping pairs of equal adjacent points
///
/// Returns an empty list when the path has fewer than two distinct points.
pub fn points_to_segments(points: &[Point]) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::with_capacity(points.len().saturating_sub(1));

    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if a == b {
            continue;
        }

        let dist_a = segments.last().map_or(0.0, |s| s.dist_b);
        segments.push(Segment {
            a,
            b,
            dist_a,
            dist_b: dist_a + a.distance_to(&b),
            heading: compute_segment_heading(&a, &b),
        });
    }

    segments
}

/// Total arc length of a segment list
pub fn total_length(segments: &[Segment]) -> f64 {
    segments.last().map_or(0.0, |s| s.dist_b)
}
