//! JSON reports produced by the command line tool

use polydecor_decorator::{planar_placements, MapContext, PatternLayer};
use polydecor_pattern::PlacementPoint;
use polydecor_settings::{DecorationConfig, SettingsResult};
use serde::Serialize;
use std::sync::Arc;

/// Planar placements of one pattern along one path, unfiltered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacementReport {
    pub pattern_index: usize,
    pub path_index: usize,
    pub placements: Vec<PlacementPoint>,
}

/// Attach a decorator for `config` to its map and collect the drawn layers
pub fn decorate(config: &DecorationConfig) -> SettingsResult<Vec<PatternLayer>> {
    let map = Arc::new(config.build_map()?);
    let decorator = config.build_decorator()?;
    decorator.on_add(map);
    let layers = decorator.layers();
    decorator.on_remove();

    tracing::info!(
        "Decorated {} path(s) with {} pattern(s), {} symbol(s)",
        decorator.paths().len(),
        layers.len(),
        layers.iter().map(PatternLayer::symbol_count).sum::<usize>()
    );
    Ok(layers)
}

/// Pixel-space placements for every pattern and path in `config`
pub fn placements(config: &DecorationConfig) -> SettingsResult<Vec<PlacementReport>> {
    let map = config.build_map()?;
    let decorator = config.build_decorator()?;
    let projector = map.snapshot();

    let mut reports = Vec::new();
    for (pattern_index, spec) in decorator.pattern_specs().iter().enumerate() {
        for (path_index, path) in decorator.paths().iter().enumerate() {
            reports.push(PlacementReport {
                pattern_index,
                path_index,
                placements: planar_placements(projector.as_ref(), path, spec),
            });
        }
    }
    Ok(reports)
}

/// Serialize a report as compact or pretty JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
