//! # polydecor Pattern
//!
//! Projects a repeat/offset pattern onto a planar path, producing the
//! positions and headings where symbols are placed.
//!
//! ## Pipeline
//!
//! ```text
//! points ── points_to_segments ──> segments (arc length, heading)
//!                                     │
//! PatternSpec ── resolve(total) ──> offsets (do-while, ascending)
//!                                     │
//!                  SegmentCursor (forward scan) + interpolation
//!                                     │
//!                                     v
//!                             Vec<PlacementPoint>
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use polydecor_core::{Point, RelativeOrAbsoluteValue};
//! use polydecor_pattern::{project_pattern_on_point_path, PatternSpec};
//!
//! let path = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)];
//! let pattern = PatternSpec::new(
//!     RelativeOrAbsoluteValue::pixels(0.0),
//!     RelativeOrAbsoluteValue::pixels(0.0),
//!     RelativeOrAbsoluteValue::pixels(25.0),
//! );
//!
//! let placements = project_pattern_on_point_path(&path, &pattern);
//! assert_eq!(placements.len(), 5);
//! ```

pub mod pattern;
pub mod projector;
pub mod segment;

pub use pattern::{PatternSpec, RawPatternSpec};
pub use projector::{
    interpolate_between_points, pattern_offsets, project_pattern_on_point_path, PlacementPoint,
    SegmentCursor, MAX_PLACEMENTS,
};
pub use segment::{compute_segment_heading, points_to_segments, total_length, Segment};
