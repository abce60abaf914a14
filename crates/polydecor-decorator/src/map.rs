//! Map projection collaborators
//!
//! The decorator never computes projections itself. It talks to a
//! [`MapProjector`] for lat/lng to pixel conversion and to a [`MapContext`]
//! for change notifications. [`WebMercatorMap`] is the stock implementation:
//! a spherical Web Mercator (EPSG:3857) viewport.

use parking_lot::RwLock;
use polydecor_core::{GeometryError, LatLng, LatLngBounds, MapEvent, MapEventHub, Point};
use std::f64::consts::PI;

const EARTH_RADIUS: f64 = 6_378_137.0; // Equatorial radius of the Earth in meters (WGS 84)

const HALF_CIRCUMFERENCE: f64 = PI * EARTH_RADIUS;

/// Latitude where the Mercator square world ends
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Pure coordinate transform between geographic and pixel space
pub trait MapProjector: Send + Sync {
    fn project(&self, lat_lng: &LatLng) -> Point;
    fn unproject(&self, point: &Point) -> LatLng;
    /// Currently visible geographic area
    fn bounds(&self) -> LatLngBounds;
}

/// A projector that also announces view changes
pub trait MapContext: MapProjector {
    fn events(&self) -> &MapEventHub;
    /// Projector frozen at the current view, used for one whole redraw
    fn snapshot(&self) -> Box<dyn MapProjector>;
}

/// Position, zoom and size of a viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center: LatLng,
    pub zoom: f64,
    pub width: u32,
    pub height: u32,
    pub tile_size: u32,
}

impl ViewState {
    /// Total world size in pixels at the current zoom
    pub fn world_size(&self) -> f64 {
        self.tile_size as f64 * 2f64.powf(self.zoom)
    }

    /// Pixel position of a coordinate in the whole world at this zoom
    fn world_pixel(&self, lat_lng: &LatLng) -> Point {
        let (x, y) = lat_lng_to_epsg3857(lat_lng);
        let scale = self.world_size() / (2.0 * HALF_CIRCUMFERENCE);
        Point::new((x + HALF_CIRCUMFERENCE) * scale, (HALF_CIRCUMFERENCE - y) * scale)
    }

    fn world_lat_lng(&self, point: &Point) -> LatLng {
        let scale = (2.0 * HALF_CIRCUMFERENCE) / self.world_size();
        epsg3857_to_lat_lng(
            point.x * scale - HALF_CIRCUMFERENCE,
            HALF_CIRCUMFERENCE - point.y * scale,
        )
    }

    /// World pixel of the viewport's top-left corner
    fn pixel_origin(&self) -> Point {
        self.world_pixel(&self.center)
            - Point::new(self.width as f64 / 2.0, self.height as f64 / 2.0)
    }
}

impl MapProjector for ViewState {
    fn project(&self, lat_lng: &LatLng) -> Point {
        self.world_pixel(lat_lng) - self.pixel_origin()
    }

    fn unproject(&self, point: &Point) -> LatLng {
        self.world_lat_lng(&(*point + self.pixel_origin()))
    }

    fn bounds(&self) -> LatLngBounds {
        LatLngBounds::new(
            self.unproject(&Point::new(0.0, self.height as f64)),
            self.unproject(&Point::new(self.width as f64, 0.0)),
        )
    }
}

/// Project a geographic coordinate to EPSG:3857 meters
pub fn lat_lng_to_epsg3857(lat_lng: &LatLng) -> (f64, f64) {
    let lat = lat_lng.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
    let x = EARTH_RADIUS * lat_lng.lng.to_radians();
    let y = EARTH_RADIUS * (PI / 4.0 + lat / 2.0).tan().ln();
    (x, y)
}

/// Inverse of [`lat_lng_to_epsg3857`]
pub fn epsg3857_to_lat_lng(x: f64, y: f64) -> LatLng {
    let lng = (x / EARTH_RADIUS).to_degrees();
    let lat = (2.0 * (y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
    LatLng::new(lat, lng)
}

/// Spherical Web Mercator viewport that publishes move events
#[derive(Debug)]
pub struct WebMercatorMap {
    view: RwLock<ViewState>,
    events: MapEventHub,
}

impl WebMercatorMap {
    pub const DEFAULT_TILE_SIZE: u32 = 256;

    pub fn new(center: LatLng, zoom: f64, width: u32, height: u32) -> Result<Self, GeometryError> {
        Self::with_tile_size(center, zoom, width, height, Self::DEFAULT_TILE_SIZE)
    }

    pub fn with_tile_size(
        center: LatLng,
        zoom: f64,
        width: u32,
        height: u32,
        tile_size: u32,
    ) -> Result<Self, GeometryError> {
        center.validate()?;
        Ok(Self {
            view: RwLock::new(ViewState {
                center,
                zoom,
                width,
                height,
                tile_size,
            }),
            events: MapEventHub::new(),
        })
    }

    pub fn view(&self) -> ViewState {
        *self.view.read()
    }

    /// Move the view and notify subscribers once the change is applied
    pub fn set_view(&self, center: LatLng, zoom: f64) -> Result<(), GeometryError> {
        center.validate()?;
        let zoom_changed = {
            let mut view = self.view.write();
            let changed = view.zoom != zoom;
            view.center = center;
            view.zoom = zoom;
            changed
        };

        tracing::debug!("View set to {} at zoom {}", center, zoom);
        if zoom_changed {
            self.events.publish(MapEvent::ZoomEnd { zoom });
        }
        self.events.publish(MapEvent::MoveEnd { zoom });
        Ok(())
    }

    /// Shift the view by a pixel offset
    pub fn pan_by(&self, offset: Point) -> Result<(), GeometryError> {
        let (center, zoom) = {
            let view = self.view.read();
            let center_px = Point::new(view.width as f64 / 2.0, view.height as f64 / 2.0);
            (view.unproject(&(center_px + offset)), view.zoom)
        };
        self.set_view(center, zoom)
    }

    pub fn set_size(&self, width: u32, height: u32) {
        let zoom = {
            let mut view = self.view.write();
            view.width = width;
            view.height = height;
            view.zoom
        };
        self.events.publish(MapEvent::Resize { width, height });
        self.events.publish(MapEvent::MoveEnd { zoom });
    }
}

impl MapProjector for WebMercatorMap {
    fn project(&self, lat_lng: &LatLng) -> Point {
        self.view.read().project(lat_lng)
    }

    fn unproject(&self, point: &Point) -> LatLng {
        self.view.read().unproject(point)
    }

    fn bounds(&self) -> LatLngBounds {
        self.view.read().bounds()
    }
}

impl MapContext for WebMercatorMap {
    fn events(&self) -> &MapEventHub {
        &self.events
    }

    fn snapshot(&self) -> Box<dyn MapProjector> {
        Box::new(self.view())
    }
}
