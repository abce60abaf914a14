//! Coordinate types
//!
//! - [`Point`]: planar coordinate in map pixels (or any consistent unit)
//! - [`LatLng`]: geographic coordinate in degrees
//! - [`LatLngBounds`]: axis-aligned geographic rectangle

use crate::error::GeometryError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Planar coordinate.
///
/// Equality is plain value equality on both components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Geographic coordinate in degrees.
///
/// Serialized as a `[lat, lng]` pair, the compact form used by path
/// definitions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validate that both components are finite and the latitude is in range
    pub fn validate(&self) -> Result<(), GeometryError> {
        if !self.lat.is_finite() || !self.lng.is_finite() {
            return Err(GeometryError::NonFiniteCoordinate {
                x: self.lat,
                y: self.lng,
            });
        }
        if !(-90.0..=90.0).contains(&self.lat) {
            return Err(GeometryError::LatitudeOutOfRange { lat: self.lat });
        }
        Ok(())
    }
}

impl From<[f64; 2]> for LatLng {
    fn from([lat, lng]: [f64; 2]) -> Self {
        LatLng::new(lat, lng)
    }
}

impl From<LatLng> for [f64; 2] {
    fn from(ll: LatLng) -> Self {
        [ll.lat, ll.lng]
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LatLng({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Geographic rectangle defined by its south-west and north-east corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    /// Create bounds from two arbitrary corners
    pub fn new(a: LatLng, b: LatLng) -> Self {
        Self {
            south_west: LatLng::new(a.lat.min(b.lat), a.lng.min(b.lng)),
            north_east: LatLng::new(a.lat.max(b.lat), a.lng.max(b.lng)),
        }
    }

    /// Smallest bounds containing every coordinate, or `None` for an empty input
    pub fn from_coords<'a, I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a LatLng>,
    {
        let mut iter = coords.into_iter();
        let first = *iter.next()?;
        let mut bounds = LatLngBounds::new(first, first);
        for ll in iter {
            bounds.extend(*ll);
        }
        Some(bounds)
    }

    /// Grow the bounds to include a coordinate
    pub fn extend(&mut self, ll: LatLng) {
        self.south_west.lat = self.south_west.lat.min(ll.lat);
        self.south_west.lng = self.south_west.lng.min(ll.lng);
        self.north_east.lat = self.north_east.lat.max(ll.lat);
        self.north_east.lng = self.north_east.lng.max(ll.lng);
    }

    /// Bounds enlarged on every side by `ratio` of the current span
    pub fn pad(&self, ratio: f64) -> Self {
        let lat_buffer = (self.north_east.lat - self.south_west.lat).abs() * ratio;
        let lng_buffer = (self.north_east.lng - self.south_west.lng).abs() * ratio;

        Self {
            south_west: LatLng::new(
                self.south_west.lat - lat_buffer,
                self.south_west.lng - lng_buffer,
            ),
            north_east: LatLng::new(
                self.north_east.lat + lat_buffer,
                self.north_east.lng + lng_buffer,
            ),
        }
    }

    /// Inclusive containment test
    pub fn contains(&self, ll: &LatLng) -> bool {
        ll.lat >= self.south_west.lat
            && ll.lat <= self.north_east.lat
            && ll.lng >= self.south_west.lng
            && ll.lng <= self.north_east.lng
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }
}
