//! Pattern projection onto a point path.
//!
//! Placements are spaced by arc length, independently of how densely the
//! path is sampled. Offsets are generated in ascending order, so the segment
//! covering each offset is found by a cursor that only moves forward: the
//! whole projection costs O(placements + segments).

use crate::pattern::PatternSpec;
use crate::segment::{points_to_segments, total_length, Segment};
use polydecor_core::Point;
use serde::{Deserialize, Serialize};

/// A resolved symbol position with the local path direction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlacementPoint {
    pub pt: Point,
    /// Degrees, 0 = up on screen, clockwise
    pub heading: f64,
}

/// Forward-only lookup of the segment covering an arc-length offset
#[derive(Debug, Clone)]
pub struct SegmentCursor<'a> {
    segments: &'a [Segment],
    index: usize,
}

impl<'a> SegmentCursor<'a> {
    /// Returns `None` for an empty segment list
    pub fn new(segments: &'a [Segment]) -> Option<Self> {
        if segments.is_empty() {
            None
        } else {
            Some(Self { segments, index: 0 })
        }
    }

    /// Advance to the segment covering `offset`
    ///
    /// Offsets past the path end stay on the last segment. The cursor never
    /// moves back, so callers must query in non-decreasing order.
    pub fn seek(&mut self, offset: f64) -> &'a Segment {
        let last = self.segments.len() - 1;
        while offset > self.segments[self.index].dist_b && self.index < last {
            self.index += 1;
        }
        &self.segments[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Point at `ratio` of the way from `a` to `b`
pub fn interpolate_between_points(a: &Point, b: &Point, ratio: f64) -> Point {
    if b.x != a.x {
        Point::new(a.x + ratio * (b.x - a.x), a.y + ratio * (b.y - a.y))
    } else {
        // vertical segment
        Point::new(a.x, a.y + (b.y - a.y) * ratio)
    }
}

/// Upper bound on the placements of one pattern along one path
pub const MAX_PLACEMENTS: usize = 100_000;

/// Relative slack on the step count so a repeat that divides the free
/// length exactly still reaches `total_length - end_offset`
const STEP_TOLERANCE: f64 = 1e-12;

/// Arc-length offsets of every placement along a path of `total_length`
///
/// The first offset is always emitted. Further offsets follow every
/// `repeat` pixels while they do not pass `total_length - end_offset`,
/// up to [`MAX_PLACEMENTS`] in total.
pub fn pattern_offsets(total_length: f64, pattern: &PatternSpec) -> Vec<f64> {
    let start = pattern.offset.resolve(total_length).max(0.0);
    let end_offset = pattern.end_offset.resolve(total_length).max(0.0);
    let repeat = pattern.repeat.resolve(total_length);
    let limit = total_length - end_offset;

    let mut offsets = vec![start];
    if repeat > 0.0 && limit > start {
        let steps = ((limit - start) / repeat * (1.0 + STEP_TOLERANCE)).floor();
        let max_steps = (MAX_PLACEMENTS - 1) as f64;
        if steps > max_steps {
            tracing::warn!(
                "Repeat of {:.3e} px over {:.3} px exceeds {} placements, truncating",
                repeat,
                limit - start,
                MAX_PLACEMENTS
            );
        }
        let steps = steps.min(max_steps) as usize;
        offsets.extend((1..=steps).map(|k| start + k as f64 * repeat));
    }
    offsets
}

/// Placements of `pattern` along the path through `points`
///
/// Paths with fewer than two distinct points yield no placements.
pub fn project_pattern_on_point_path(points: &[Point], pattern: &PatternSpec) -> Vec<PlacementPoint> {
    let segments = points_to_segments(points);
    let Some(mut cursor) = SegmentCursor::new(&segments) else {
        return Vec::new();
    };

    let total = total_length(&segments);
    let offsets = pattern_offsets(total, pattern);

    let placements: Vec<PlacementPoint> = offsets
        .into_iter()
        .map(|offset| {
            let segment = cursor.seek(offset);
            let ratio = (offset - segment.dist_a) / segment.length();
            PlacementPoint {
                pt: interpolate_between_points(&segment.a, &segment.b, ratio),
                heading: segment.heading,
            }
        })
        .collect();

    tracing::trace!(
        "Projected {} placement(s) over {} segment(s), length {:.3}",
        placements.len(),
        segments.len(),
        total
    );

    placements
}
