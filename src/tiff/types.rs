//! Core GeoTIFF data structures

use std::fmt;

use crate::coordinate::BoundingBox;
use crate::geo::GeoMetadata;
use crate::tiff::header::TiffHeader;

/// Result of reading a GeoTIFF file: its georeferencing and name
#[derive(Debug, Clone, PartialEq)]
pub struct GeoTiff {
    /// Parsed file header
    pub header: TiffHeader,
    /// Validated georeferencing metadata
    pub metadata: GeoMetadata,
    /// Geographic extent of the image
    pub bounding_box: BoundingBox,
}

impl GeoTiff {
    /// Name as given by the ImageDescription tag, empty if absent
    pub fn name(&self) -> &str {
        &self.metadata.description
    }

    /// Bounding box of the image
    pub fn bbox(&self) -> BoundingBox {
        self.bounding_box
    }

    /// Mime types of files this reader can open
    pub fn mime_types() -> &'static [&'static str] {
        &["image/tiff"]
    }
}

impl fmt::Display for GeoTiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  Format: {} ({})", self.header.format_name(), self.header.byte_order.name())?;
        writeln!(f, "  Dimensions: {}x{}", self.metadata.width, self.metadata.height)?;
        writeln!(f, "  Pixel scale: {}, {}", self.metadata.pixel_scale_x, self.metadata.pixel_scale_y)?;
        if self.name().is_empty() {
            writeln!(f, "  Name: (none)")?;
        } else {
            writeln!(f, "  Name: {}", self.name())?;
        }
        writeln!(f, "  Top left: {}", self.bounding_box.top_left())?;
        write!(f, "  Bottom right: {}", self.bounding_box.bottom_right())
    }
}
