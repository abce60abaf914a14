//! Symbols drawn at pattern placements
//!
//! A [`SymbolFactory`] turns one [`DirectionPoint`] into a renderable
//! [`Symbol`]. The built-in factories are collected in the closed
//! [`SymbolDefinition`] enum, which is also the serialized form used by
//! decoration configs.

mod arrow_head;
mod dash;
mod marker;

pub use arrow_head::ArrowHeadSymbol;
pub use dash::DashSymbol;
pub use marker::MarkerSymbol;

use crate::map::MapProjector;
use polydecor_core::LatLng;
use serde::{Deserialize, Serialize};

/// A placement in geographic space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DirectionPoint {
    pub lat_lng: LatLng,
    /// Degrees clockwise from north
    pub heading: f64,
}

impl DirectionPoint {
    pub fn new(lat_lng: LatLng, heading: f64) -> Self {
        Self { lat_lng, heading }
    }
}

/// Stroke and fill styling for vector symbols
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathOptions {
    pub stroke: bool,
    pub color: String,
    pub weight: f64,
    pub opacity: f64,
    pub fill: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    pub fill_opacity: f64,
    pub interactive: bool,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            stroke: true,
            color: "#3388ff".to_string(),
            weight: 3.0,
            opacity: 1.0,
            fill: false,
            fill_color: None,
            fill_opacity: 0.2,
            interactive: true,
        }
    }
}

/// Marker styling
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub interactive: bool,
    pub draggable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_angle: Option<f64>,
}

/// A renderable symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Symbol {
    Polyline {
        lat_lngs: Vec<LatLng>,
        options: PathOptions,
    },
    Polygon {
        lat_lngs: Vec<LatLng>,
        options: PathOptions,
    },
    Marker {
        lat_lng: LatLng,
        options: MarkerOptions,
    },
}

impl Symbol {
    pub fn is_interactive(&self) -> bool {
        match self {
            Symbol::Polyline { options, .. } | Symbol::Polygon { options, .. } => {
                options.interactive
            }
            Symbol::Marker { options, .. } => options.interactive || options.draggable,
        }
    }
}

/// Builds a symbol for one placement.
///
/// `lat_lngs` is the full decorated path. `index` and `total` locate the
/// placement among the visible placements of the same path and pattern.
pub trait SymbolFactory: Send + Sync {
    fn build_symbol(
        &self,
        direction_point: &DirectionPoint,
        lat_lngs: &[LatLng],
        map: &dyn MapProjector,
        index: usize,
        total: usize,
    ) -> Symbol;
}

/// Built-in symbol kinds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SymbolDefinition {
    Dash(DashSymbol),
    ArrowHead(ArrowHeadSymbol),
    Marker(MarkerSymbol),
}

impl SymbolDefinition {
    pub fn name(&self) -> &'static str {
        match self {
            SymbolDefinition::Dash(_) => "dash",
            SymbolDefinition::ArrowHead(_) => "arrow_head",
            SymbolDefinition::Marker(_) => "marker",
        }
    }
}

impl Default for SymbolDefinition {
    fn default() -> Self {
        SymbolDefinition::Dash(DashSymbol::default())
    }
}

impl SymbolFactory for SymbolDefinition {
    fn build_symbol(
        &self,
        direction_point: &DirectionPoint,
        lat_lngs: &[LatLng],
        map: &dyn MapProjector,
        index: usize,
        total: usize,
    ) -> Symbol {
        match self {
            SymbolDefinition::Dash(s) => s.build_symbol(direction_point, lat_lngs, map, index, total),
            SymbolDefinition::ArrowHead(s) => {
                s.build_symbol(direction_point, lat_lngs, map, index, total)
            }
            SymbolDefinition::Marker(s) => {
                s.build_symbol(direction_point, lat_lngs, map, index, total)
            }
        }
    }
}

impl From<DashSymbol> for SymbolDefinition {
    fn from(s: DashSymbol) -> Self {
        SymbolDefinition::Dash(s)
    }
}

impl From<ArrowHeadSymbol> for SymbolDefinition {
    fn from(s: ArrowHeadSymbol) -> Self {
        SymbolDefinition::ArrowHead(s)
    }
}

impl From<MarkerSymbol> for SymbolDefinition {
    fn from(s: MarkerSymbol) -> Self {
        SymbolDefinition::Marker(s)
    }
}

/// Screen-space angle in radians for a compass heading (y grows downwards)
pub(crate) fn heading_to_screen_angle(heading: f64) -> f64 {
    -(heading - 90.0).to_radians()
}


#[cfg(test)]
mod tests {
    use super::test_support::PlanarProjector;
    use super::*;

    #[test]
    fn test_definition_dispatch() {
        let dp = DirectionPoint::new(LatLng::new(0.0, 0.0), 90.0);
        let defs = [
            SymbolDefinition::Dash(DashSymbol::default()),
            SymbolDefinition::ArrowHead(ArrowHeadSymbol::default()),
            SymbolDefinition::Marker(MarkerSymbol::default()),
        ];
        let built: Vec<Symbol> = defs
            .iter()
            .map(|d| d.build_symbol(&dp, &[], &PlanarProjector, 0, 1))
            .collect();
        assert!(matches!(built[0], Symbol::Polyline { .. }));
        assert!(matches!(built[1], Symbol::Polyline { .. }));
        assert!(matches!(built[2], Symbol::Marker { .. }));
        assert!(built.iter().all(|s| !s.is_interactive()));
    }

    #[test]
    fn test_definition_deserialize() {
        let def: SymbolDefinition =
            serde_json::from_str(r#"{"type": "arrow_head", "pixel_size": 15, "polygon": true}"#)
                .unwrap();
        match def {
            SymbolDefinition::ArrowHead(ref a) => {
                assert_eq!(a.pixel_size, 15.0);
                assert!(a.polygon);
                assert_eq!(a.head_angle, 30.0);
            }
            _ => panic!("Expected arrow head"),
        }
        assert_eq!(def.name(), "arrow_head");

        let dash: SymbolDefinition = serde_json::from_str(r#"{"type": "dash"}"#).unwrap();
        assert_eq!(dash, SymbolDefinition::default());
    }

    #[test]
    fn test_screen_angle() {
        assert!((heading_to_screen_angle(90.0)).abs() < 1e-12);
        assert!((heading_to_screen_angle(0.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
