//! Polyline decorator
//!
//! Holds decorated paths and parsed patterns. While attached to a map it
//! rebuilds its symbol layers on every `MoveEnd`, keeping only placements
//! that fall inside the (slightly padded) visible area.

use crate::error::DecoratorError;
use crate::map::{MapContext, MapProjector};
use crate::path_source::{flatten_paths, PathInput};
use crate::symbols::{DirectionPoint, Symbol, SymbolDefinition, SymbolFactory};
use parking_lot::RwLock;
use polydecor_core::{EventFilter, LatLng, LatLngBounds, MapEventKind, Point, SubscriptionId};
use polydecor_pattern::{project_pattern_on_point_path, PatternSpec, PlacementPoint, RawPatternSpec};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Fraction of the map bounds added on each side before filtering placements
pub const VISIBLE_BOUNDS_PADDING: f64 = 0.1;

/// Pattern as written in a config: spacing values plus the symbol to draw
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PatternDefinition {
    #[serde(flatten)]
    pub spec: RawPatternSpec,
    #[serde(default)]
    pub symbol: SymbolDefinition,
}

impl PatternDefinition {
    pub fn new(spec: RawPatternSpec, symbol: impl Into<SymbolDefinition>) -> Self {
        Self {
            spec,
            symbol: symbol.into(),
        }
    }
}

/// Parsed pattern ready for drawing
#[derive(Clone)]
pub struct Pattern {
    pub spec: PatternSpec,
    pub symbol: Arc<dyn SymbolFactory>,
}

impl Pattern {
    pub fn new(spec: PatternSpec, symbol: impl SymbolFactory + 'static) -> Self {
        Self {
            spec,
            symbol: Arc::new(symbol),
        }
    }

    pub fn parse(definition: &PatternDefinition) -> Result<Self, polydecor_core::PatternError> {
        Ok(Self::new(definition.spec.parse()?, definition.symbol.clone()))
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pattern")
            .field("spec", &self.spec)
            .finish_non_exhaustive()
    }
}

/// Symbols of one pattern along one path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathSymbols {
    pub path_index: usize,
    pub symbols: Vec<Symbol>,
}

/// Everything drawn for one pattern, grouped by path
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatternLayer {
    pub pattern_index: usize,
    pub paths: Vec<PathSymbols>,
}

impl PatternLayer {
    pub fn symbol_count(&self) -> usize {
        self.paths.iter().map(|p| p.symbols.len()).sum()
    }
}

/// Project every coordinate of a path to pixel space
pub fn project_path(map: &dyn MapProjector, lat_lngs: &[LatLng]) -> Vec<Point> {
    lat_lngs.iter().map(|ll| map.project(ll)).collect()
}

/// Planar placements of a pattern along a geographic path
pub fn planar_placements(
    map: &dyn MapProjector,
    lat_lngs: &[LatLng],
    pattern: &PatternSpec,
) -> Vec<PlacementPoint> {
    if lat_lngs.len() < 2 {
        return Vec::new();
    }
    project_pattern_on_point_path(&project_path(map, lat_lngs), pattern)
}

/// Placements of a pattern along a geographic path, back in lat/lng
pub fn direction_points(
    map: &dyn MapProjector,
    lat_lngs: &[LatLng],
    pattern: &PatternSpec,
) -> Vec<DirectionPoint> {
    planar_placements(map, lat_lngs, pattern)
        .into_iter()
        .map(|p| DirectionPoint::new(map.unproject(&p.pt), p.heading))
        .collect()
}

fn build_layers(
    map: &dyn MapProjector,
    paths: &[Vec<LatLng>],
    patterns: &[Pattern],
) -> Vec<PatternLayer> {
    let visible = map.bounds().pad(VISIBLE_BOUNDS_PADDING);

    patterns
        .iter()
        .enumerate()
        .map(|(pattern_index, pattern)| PatternLayer {
            pattern_index,
            paths: paths
                .iter()
                .enumerate()
                .map(|(path_index, path)| {
                    let points: Vec<DirectionPoint> = direction_points(map, path, &pattern.spec)
                        .into_iter()
                        .filter(|dp| visible.contains(&dp.lat_lng))
                        .collect();
                    let total = points.len();
                    PathSymbols {
                        path_index,
                        symbols: points
                            .iter()
                            .enumerate()
                            .map(|(i, dp)| pattern.symbol.build_symbol(dp, path, map, i, total))
                            .collect(),
                    }
                })
                .collect(),
        })
        .collect()
}

fn parse_patterns(definitions: &[PatternDefinition]) -> Result<Vec<Pattern>, DecoratorError> {
    definitions
        .iter()
        .enumerate()
        .map(|(index, def)| {
            Pattern::parse(def).map_err(|source| DecoratorError::InvalidPattern { index, source })
        })
        .collect()
}

struct DecoratorState {
    paths: Vec<Vec<LatLng>>,
    bounds: Option<LatLngBounds>,
    patterns: Vec<Pattern>,
    map: Option<Arc<dyn MapContext>>,
    subscription: Option<SubscriptionId>,
    layers: Vec<PatternLayer>,
}

impl DecoratorState {
    fn set_paths(&mut self, inputs: &[PathInput]) {
        self.paths = flatten_paths(inputs);
        self.bounds = LatLngBounds::from_coords(self.paths.iter().flatten());
    }

    fn redraw(&mut self) {
        if let Some(map) = &self.map {
            let projector = map.snapshot();
            self.layers = build_layers(projector.as_ref(), &self.paths, &self.patterns);
            tracing::debug!(
                "Redrew {} pattern(s) over {} path(s)",
                self.patterns.len(),
                self.paths.len()
            );
        }
    }
}

/// Draws repeated symbols along paths on a map
pub struct PolylineDecorator {
    state: Arc<RwLock<DecoratorState>>,
}

impl PolylineDecorator {
    pub fn new(paths: &[PathInput], patterns: &[PatternDefinition]) -> Result<Self, DecoratorError> {
        Ok(Self::with_patterns(paths, parse_patterns(patterns)?))
    }

    /// Build from already parsed patterns, including custom symbol factories
    pub fn with_patterns(paths: &[PathInput], patterns: Vec<Pattern>) -> Self {
        let mut state = DecoratorState {
            paths: Vec::new(),
            bounds: None,
            patterns,
            map: None,
            subscription: None,
            layers: Vec::new(),
        };
        state.set_paths(paths);
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Replace the patterns and redraw.
    ///
    /// On error the current patterns are kept.
    pub fn set_patterns(&self, patterns: &[PatternDefinition]) -> Result<(), DecoratorError> {
        let parsed = parse_patterns(patterns)?;
        let mut state = self.state.write();
        state.patterns = parsed;
        state.redraw();
        Ok(())
    }

    pub fn set_paths(&self, paths: &[PathInput]) {
        let mut state = self.state.write();
        state.set_paths(paths);
        state.redraw();
    }

    /// Attach to a map, draw, and follow its `MoveEnd` events
    pub fn on_add(&self, map: Arc<dyn MapContext>) {
        if self.is_attached() {
            self.on_remove();
        }

        {
            let mut state = self.state.write();
            state.map = Some(map.clone());
            state.redraw();
        }

        let weak = Arc::downgrade(&self.state);
        let id = map.events().subscribe(
            EventFilter::Kinds(vec![MapEventKind::MoveEnd]),
            move |_event| {
                if let Some(state) = weak.upgrade() {
                    state.write().redraw();
                }
            },
        );
        self.state.write().subscription = Some(id);
        tracing::debug!("Decorator attached with subscription {}", id);
    }

    /// Detach from the map and drop all symbols
    pub fn on_remove(&self) {
        let (map, subscription) = {
            let mut state = self.state.write();
            state.layers.clear();
            (state.map.take(), state.subscription.take())
        };
        if let (Some(map), Some(id)) = (map, subscription) {
            map.events().unsubscribe(id);
            tracing::debug!("Decorator detached from subscription {}", id);
        }
    }

    /// Rebuild the layers. Does nothing while detached.
    pub fn redraw(&self) {
        self.state.write().redraw();
    }

    pub fn is_attached(&self) -> bool {
        self.state.read().map.is_some()
    }

    /// Bounds of all decorated coordinates, `None` when there are none
    pub fn bounds(&self) -> Option<LatLngBounds> {
        self.state.read().bounds
    }

    pub fn paths(&self) -> Vec<Vec<LatLng>> {
        self.state.read().paths.clone()
    }

    pub fn pattern_specs(&self) -> Vec<PatternSpec> {
        self.state.read().patterns.iter().map(|p| p.spec).collect()
    }

    pub fn layers(&self) -> Vec<PatternLayer> {
        self.state.read().layers.clone()
    }
}

impl Drop for PolylineDecorator {
    fn drop(&mut self) {
        self.on_remove();
    }
}

impl fmt::Debug for PolylineDecorator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("PolylineDecorator")
            .field("paths", &state.paths.len())
            .field("patterns", &state.patterns)
            .field("attached", &state.map.is_some())
            .finish()
    }
}
