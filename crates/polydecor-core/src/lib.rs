//! # polydecor Core
//!
//! Core types, value parsing, and events shared by the polydecor crates.
//! Provides the planar and geographic coordinate types, the
//! relative-or-absolute pattern value model, the error hierarchy and the
//! map event hub used to notify decorators of viewport changes.

pub mod error;
pub mod event_bus;
pub mod geometry;
pub mod units;

pub use error::{Error, GeometryError, PatternError, Result};

pub use event_bus::{
    EventFilter, MapEvent, MapEventHandler, MapEventHub, MapEventKind, SubscriptionId,
};

pub use geometry::{LatLng, LatLngBounds, Point};

pub use units::{parse_relative_or_absolute_value, RawPatternValue, RelativeOrAbsoluteValue};
