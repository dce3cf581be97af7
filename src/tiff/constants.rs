//! TIFF format constants
//!
//! This module defines constants used throughout the TIFF processing code,
//! making the code more readable and maintainable by replacing magic numbers
//! with descriptive names.

/// TIFF header constants
pub mod header {
    /// Standard TIFF version number (42)
    pub const TIFF_VERSION: u16 = 42;

    /// BigTIFF version number (43)
    pub const BIG_TIFF_VERSION: u16 = 43;

    /// "II" byte order marker for little-endian
    pub const LITTLE_ENDIAN_MARKER: [u8; 2] = [0x49, 0x49];

    /// "MM" byte order marker for big-endian
    pub const BIG_ENDIAN_MARKER: [u8; 2] = [0x4D, 0x4D];

    /// Size of a classic TIFF header
    pub const TIFF_HEADER_SIZE: u64 = 8;

    /// Size of a BigTIFF header
    pub const BIG_TIFF_HEADER_SIZE: u64 = 16;
}

/// IFD layout constants
pub mod layout {
    /// Classic entry: tag(2) + type(2) + count(4) + value(4)
    pub const TIFF_ENTRY_SIZE: u64 = 12;

    /// BigTIFF entry: tag(2) + type(2) + count(8) + value(8)
    pub const BIG_TIFF_ENTRY_SIZE: u64 = 20;

    /// Bytes available for inline values in a classic entry
    pub const TIFF_INLINE_CAPACITY: usize = 4;

    /// Bytes available for inline values in a BigTIFF entry
    pub const BIG_TIFF_INLINE_CAPACITY: usize = 8;
}

/// Field types as defined by TIFF 6.0 and BigTIFF
pub mod field_types {
    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator
    pub const FLOAT: u16 = 11;     // Single precision IEEE floating point
    pub const DOUBLE: u16 = 12;    // Double precision IEEE floating point
    pub const IFD: u16 = 13;       // 32-bit IFD offset
    pub const LONG8: u16 = 16;     // BigTIFF 64-bit unsigned integer
    pub const SLONG8: u16 = 17;    // BigTIFF 64-bit signed integer
    pub const IFD8: u16 = 18;      // BigTIFF 64-bit IFD offset
}

/// Tags the reader keeps; everything else in the directory is skipped
pub mod tags {
    pub const IMAGE_WIDTH: u16 = 256;              // Width of the image in pixels
    pub const IMAGE_LENGTH: u16 = 257;             // Height of the image in pixels
    pub const IMAGE_DESCRIPTION: u16 = 270;        // Free-form description, used as the name

    // GeoTIFF tags
    pub const MODEL_PIXEL_SCALE_TAG: u16 = 33550;  // Pixel size in map units
    pub const MODEL_TIEPOINT_TAG: u16 = 33922;     // Links raster to world coordinates

    /// All retained tags
    pub const RETAINED: [u16; 5] = [
        IMAGE_WIDTH,
        IMAGE_LENGTH,
        IMAGE_DESCRIPTION,
        MODEL_PIXEL_SCALE_TAG,
        MODEL_TIEPOINT_TAG,
    ];
}
