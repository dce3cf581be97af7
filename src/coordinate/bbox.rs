//! Bounding box derived from GeoTIFF georeferencing

use std::fmt;

use super::point::Point;
use crate::geo::GeoMetadata;

/// The geographic extent of an image, as two opposite corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    top_left: Point,
    bottom_right: Point,
}

impl BoundingBox {
    /// Create a bounding box from its corners
    pub fn new(top_left: Point, bottom_right: Point) -> Self {
        BoundingBox { top_left, bottom_right }
    }

    /// Derive the corners from validated metadata
    ///
    /// The tie point is the top-left corner. A positive Y scale means
    /// latitude decreases downwards (north-up); a non-positive scale is
    /// already signed and is added as-is.
    pub fn from_metadata(meta: &GeoMetadata) -> Self {
        let columns = meta.width as f64 - 1.0;
        let rows = meta.height as f64 - 1.0;

        let right = meta.tie_point_longitude + columns * meta.pixel_scale_x;
        let bottom = if meta.pixel_scale_y > 0.0 {
            meta.tie_point_latitude - rows * meta.pixel_scale_y
        } else {
            meta.tie_point_latitude + rows * meta.pixel_scale_y
        };

        BoundingBox {
            top_left: Point::new(meta.tie_point_longitude, meta.tie_point_latitude),
            bottom_right: Point::new(right, bottom),
        }
    }

    /// Top-left corner (the tie point)
    pub fn top_left(&self) -> Point {
        self.top_left
    }

    /// Bottom-right corner
    pub fn bottom_right(&self) -> Point {
        self.bottom_right
    }

    /// Longitudinal extent in degrees
    pub fn width(&self) -> f64 {
        (self.bottom_right.longitude - self.top_left.longitude).abs()
    }

    /// Latitudinal extent in degrees
    pub fn height(&self) -> f64 {
        (self.top_left.latitude - self.bottom_right.latitude).abs()
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> Point {
        Point::new(
            (self.top_left.longitude + self.bottom_right.longitude) / 2.0,
            (self.top_left.latitude + self.bottom_right.latitude) / 2.0,
        )
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &Point) -> bool {
        let (min_lon, max_lon) = min_max(self.top_left.longitude, self.bottom_right.longitude);
        let (min_lat, max_lat) = min_max(self.top_left.latitude, self.bottom_right.latitude);

        point.longitude >= min_lon && point.longitude <= max_lon &&
            point.latitude >= min_lat && point.latitude <= max_lat
    }
}

fn min_max(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "top-left {}, bottom-right {}", self.top_left, self.bottom_right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(pixel_scale_y: f64) -> GeoMetadata {
        GeoMetadata {
            width: 1024,
            height: 768,
            pixel_scale_x: 0.1,
            pixel_scale_y,
            tie_point_longitude: 6.11667,
            tie_point_latitude: 50.8549,
            description: String::new(),
        }
    }

    #[test]
    fn test_north_up_corners() {
        let bbox = BoundingBox::from_metadata(&metadata(0.1));

        assert_eq!(bbox.top_left(), Point::new(6.11667, 50.8549));
        assert!((bbox.bottom_right().longitude - (6.11667 + 102.3)).abs() < 1e-9);
        assert!((bbox.bottom_right().latitude - (50.8549 - 76.7)).abs() < 1e-9);
        assert!(bbox.bottom_right().latitude < bbox.top_left().latitude);
    }

    #[test]
    fn test_signed_scale_is_added() {
        let bbox = BoundingBox::from_metadata(&metadata(-0.1));
        assert!((bbox.bottom_right().latitude - (50.8549 - 76.7)).abs() < 1e-9);

        let south_up = BoundingBox::from_metadata(&GeoMetadata {
            pixel_scale_y: -0.0,
            ..metadata(0.1)
        });
        assert!(south_up.bottom_right().latitude >= south_up.top_left().latitude);
    }

    #[test]
    fn test_contains_and_center() {
        let bbox = BoundingBox::new(Point::new(6.0, 51.0), Point::new(7.0, 50.0));

        assert!(bbox.contains(&Point::new(6.5, 50.5)));
        assert!(!bbox.contains(&Point::new(7.5, 50.5)));
        assert_eq!(bbox.center(), Point::new(6.5, 50.5));
        assert_eq!(bbox.width(), 1.0);
        assert_eq!(bbox.height(), 1.0);
    }
}
