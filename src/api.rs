use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::warn;

use crate::coordinate::BoundingBox;
use crate::tiff::errors::GeoTiffResult;
use crate::tiff::ifd::DecodedTag;
use crate::tiff::reader::{GeoTiffReader, ReaderConfig};
use crate::tiff::types::GeoTiff;

/// Main interface to the geotiff-bounds library
#[derive(Debug, Default, Clone)]
pub struct GeoTiffBounds {
    reader: GeoTiffReader,
}

impl GeoTiffBounds {
    /// Create a new instance with the given reader configuration
    pub fn new(config: ReaderConfig) -> Self {
        GeoTiffBounds {
            reader: GeoTiffReader::new(config),
        }
    }

    /// Read the bounding box and name of a GeoTIFF file
    ///
    /// # Arguments
    /// * `path` - Path to the GeoTIFF file
    ///
    /// # Returns
    /// The georeferencing of the file, or the first error encountered
    pub fn open<P: AsRef<Path>>(&self, path: P) -> GeoTiffResult<GeoTiff> {
        self.reader.load(path)
    }

    /// Read the retained tags of a file's first IFD without validating them
    ///
    /// # Arguments
    /// * `path` - Path to the TIFF file
    ///
    /// # Returns
    /// The decoded tags in directory order
    pub fn tags<P: AsRef<Path>>(&self, path: P) -> GeoTiffResult<Vec<DecodedTag>> {
        let mut reader = BufReader::new(File::open(path)?);
        let (_, directory) = self.reader.read_directory(&mut reader)?;
        Ok(directory.tags)
    }
}

/// Reads the corner coordinates of a georeferenced image file
///
/// Failures are logged as warnings and reported as `None`; use
/// `GeoTiffBounds::open` to get the error itself.
pub fn read_coordinates<P: AsRef<Path>>(path: P) -> Option<BoundingBox> {
    let path = path.as_ref();
    match GeoTiffBounds::default().open(path) {
        Ok(geotiff) => Some(geotiff.bbox()),
        Err(e) => {
            warn!("Could not read coordinates from {}: {}", path.display(), e);
            None
        }
    }
}
