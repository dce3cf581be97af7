//! Point structure for representing coordinates

use std::fmt;

/// Mean Earth radius in metres
const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// A geographic coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Longitude in degrees
    pub longitude: f64,
    /// Latitude in degrees
    pub latitude: f64,
}

impl Point {
    /// Create a new point
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Point { longitude, latitude }
    }

    /// Great-circle distance to another point in metres (haversine)
    pub fn distance_to(&self, other: &Point) -> f64 {
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();

        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * a.sqrt().atan2((1.0 - a).sqrt())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}
