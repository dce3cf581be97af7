//! Coordinate handling for geospatial data
//!
//! This module provides the point and bounding box types produced by the
//! GeoTIFF reader.

mod bbox;
mod point;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::Point;
