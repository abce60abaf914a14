use super::{heading_to_screen_angle, DirectionPoint, PathOptions, Symbol, SymbolFactory};
use crate::map::MapProjector;
use polydecor_core::{LatLng, Point};
use serde::{Deserialize, Serialize};

/// Short line segment centred on the placement and aligned with the path
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashSymbol {
    /// Dash length in pixels. Sizes up to 1 px draw a dot.
    pub pixel_size: f64,
    pub path_options: PathOptions,
}

impl Default for DashSymbol {
    fn default() -> Self {
        Self {
            pixel_size: 10.0,
            path_options: PathOptions::default(),
        }
    }
}

impl DashSymbol {
    pub fn new(pixel_size: f64) -> Self {
        Self {
            pixel_size,
            ..Default::default()
        }
    }
}

impl SymbolFactory for DashSymbol {
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

        let center = direction_point.lat_lng;
        if self.pixel_size <= 1.0 {
            return Symbol::Polyline {
                lat_lngs: vec![center, center],
                options,
            };
        }

        let mid = map.project(&center);
        let angle = heading_to_screen_angle(direction_point.heading);
        let a = Point::new(
            mid.x - self.pixel_size * angle.cos() / 2.0,
            mid.y + self.pixel_size * angle.sin() / 2.0,
        );
        // second end mirrored through the midpoint
        let b = mid + (mid - a);

        Symbol::Polyline {
            lat_lngs: vec![map.unproject(&a), map.unproject(&b)],
            options,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{assert_close, PlanarProjector};
    use super::*;

    fn build(size: f64, heading: f64) -> Vec<LatLng> {
        let dp = DirectionPoint::new(LatLng::new(50.0, 100.0), heading);
        match DashSymbol::new(size).build_symbol(&dp, &[], &PlanarProjector, 0, 1) {
            Symbol::Polyline { lat_lngs, options } => {
                assert!(!options.interactive);
                lat_lngs
            }
            other => panic!("Expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_small_dash_is_a_dot() {
        let pts = build(1.0, 45.0);
        assert_eq!(pts, vec![LatLng::new(50.0, 100.0); 2]);
    }

    #[test]
    fn test_dash_along_eastward_heading() {
        let pts = build(10.0, 90.0);
        assert_close(pts[0], LatLng::new(50.0, 95.0));
        assert_close(pts[1], LatLng::new(50.0, 105.0));
    }

    #[test]
    fn test_dash_along_southward_heading() {
        // heading 180 runs towards growing screen y
        let pts = build(10.0, 180.0);
        assert_close(pts[0], LatLng::new(45.0, 100.0));
        assert_close(pts[1], LatLng::new(55.0, 100.0));
    }

    #[test]
    fn test_dash_is_centred_with_requested_length() {
        let pts = build(8.0, 33.0);
        let a = Point::new(pts[0].lng, pts[0].lat);
        let b = Point::new(pts[1].lng, pts[1].lat);
        assert!((a.distance_to(&b) - 8.0).abs() < 1e-9);
        assert!(((a.x + b.x) / 2.0 - 100.0).abs() < 1e-9);
        assert!(((a.y + b.y) / 2.0 - 50.0).abs() < 1e-9);
    }
}
