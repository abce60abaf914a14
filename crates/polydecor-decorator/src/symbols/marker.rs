use super::{DirectionPoint, MarkerOptions, Symbol, SymbolFactory};
use crate::map::MapProjector;
use polydecor_core::LatLng;
use serde::{Deserialize, Serialize};

/// Point marker, optionally rotated to follow the path
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkerSymbol {
    pub marker_options: MarkerOptions,
    pub rotate: bool,
    /// Added to the heading when rotating, in degrees
    pub angle_correction: f64,
}

impl MarkerSymbol {
    pub fn rotated(angle_correction: f64) -> Self {
        Self {
            rotate: true,
            angle_correction,
            ..Default::default()
        }
    }
}

impl SymbolFactory for MarkerSymbol {
    fn build_symbol(
        &self,
        direction_point: &DirectionPoint,
        _lat_lngs: &[LatLng],
        _map: &dyn MapProjector,
        _index: usize,
        _total: usize,
    ) -> Symbol {
        let mut options = self.marker_options.clone();
        options.interactive = false;
        options.draggable = false;

        if self.rotate {
            options.rotation_angle = Some(direction_point.heading + self.angle_correction);
        }

        Symbol::Marker {
            lat_lng: direction_point.lat_lng,
            options,
        }
    }
}
