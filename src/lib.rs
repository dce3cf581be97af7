pub mod io;
pub mod tiff;
pub mod geo;
pub mod coordinate;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::{read_coordinates, GeoTiffBounds};

pub use tiff::{GeoTiff, GeoTiffError, GeoTiffReader, GeoTiffResult, ReaderConfig};
pub use geo::GeoMetadata;
pub use coordinate::{BoundingBox, Point};
