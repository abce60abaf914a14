//! # polydecor Decorator
//!
//! Places symbols (dashes, arrow heads, markers) along geographic paths
//! drawn on a map.
//!
//! The [`PolylineDecorator`] flattens its [`PathInput`]s, projects them
//! through a [`MapProjector`], runs the pattern projection from
//! `polydecor-pattern` in pixel space and hands each visible placement to
//! a [`SymbolFactory`]. Attached to a [`MapContext`], it redraws whenever
//! the map publishes `MoveEnd`.
//!
//! ```
//! use std::sync::Arc;
//! use polydecor_core::LatLng;
//! use polydecor_decorator::{
//!     ArrowHeadSymbol, PathInput, PatternDefinition, PolylineDecorator, WebMercatorMap,
//! };
//! use polydecor_pattern::RawPatternSpec;
//!
//! let path = PathInput::polyline(vec![LatLng::new(48.14, 17.10), LatLng::new(48.15, 17.12)]);
//! let pattern = PatternDefinition::new(
//!     RawPatternSpec::new("5%", None::<f64>, "20%"),
//!     ArrowHeadSymbol::default(),
//! );
//! let decorator = PolylineDecorator::new(&[path], &[pattern]).unwrap();
//!
//! let map = Arc::new(WebMercatorMap::new(LatLng::new(48.145, 17.11), 14.0, 1024, 768).unwrap());
//! decorator.on_add(map);
//! assert!(decorator.layers()[0].symbol_count() > 0);
//! ```

pub mod decorator;
pub mod error;
pub mod map;
pub mod path_source;
pub mod symbols;

pub use decorator::{
    direction_points, planar_placements, project_path, PathSymbols, Pattern, PatternDefinition,
    PatternLayer, PolylineDecorator, VISIBLE_BOUNDS_PADDING,
};
pub use error::DecoratorError;
pub use map::{MapContext, MapProjector, ViewState, WebMercatorMap};
pub use path_source::{flatten_paths, PathInput};
pub use symbols::{
    ArrowHeadSymbol, DashSymbol, DirectionPoint, MarkerOptions, MarkerSymbol, PathOptions, Symbol,
    SymbolDefinition, SymbolFactory,
};
