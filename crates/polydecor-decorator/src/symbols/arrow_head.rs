use super::{heading_to_screen_angle, DirectionPoint, PathOptions, Symbol, SymbolFactory};
use crate::map::MapProjector;
use polydecor_core::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// Arrow head pointing along the path, tip at the placement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowHeadSymbol {
    /// Draw a closed polygon instead of an open chevron
    pub polygon: bool,
    /// Wing length in pixels
    pub pixel_size: f64,
    /// Opening angle between the wings in degrees
    pub head_angle: f64,
    pub path_options: PathOptions,
}

impl Default for ArrowHeadSymbol {
    fn default() -> Self {
        Self {
            polygon: false,
            pixel_size: 10.0,
            head_angle: 30.0,
            path_options: PathOptions {
                stroke: true,
                weight: 1.0,
                ..PathOptions::default()
            },
        }
    }
}

impl ArrowHeadSymbol {
    pub fn new(pixel_size: f64, head_angle: f64) -> Self {
        Self {
            pixel_size,
            head_angle,
            ..Default::default()
        }
    }

    pub fn filled(mut self) -> Self {
        self.polygon = true;
        self.path_options.fill = true;
        self
    }

    fn wing(&self, tip: Point, angle: f64) -> Point {
        Point::new(
            tip.x - self.pixel_size * angle.cos(),
            tip.y + self.pixel_size * angle.sin(),
        )
    }
}

impl SymbolFactory for ArrowHeadSymbol {
    fn build_symbol(
        &self,
        direction_point: &DirectionPoint,
        _lat_lngs: &[LatLng],
        map: &dyn MapProjector,
        _index: usize,
        _total: usize,
    ) -> Symbol {
        let mut options = self.path_options.clone();
        options.interactive = false;

        let tip = map.project(&direction_point.lat_lng);
        let direction = heading_to_screen_angle(direction_point.heading);
        let half_angle = (self.head_angle / 2.0).to_radians();

        let lat_lngs = vec![
            map.unproject(&self.wing(tip, direction + half_angle)),
            direction_point.lat_lng,
            map.unproject(&self.wing(tip, direction - half_angle)),
        ];

        if self.polygon {
            Symbol::Polygon { lat_lngs, options }
        } else {
            Symbol::Polyline { lat_lngs, options }
        }
    }
}
