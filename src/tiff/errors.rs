//! Custom error types for GeoTIFF processing

use std::fmt;
use std::io;

/// GeoTIFF-specific error types
///
/// Every variant is terminal for a single parse: the reader stops at the
/// first failure and never hands back a partial bounding box.
#[derive(Debug)]
pub enum GeoTiffError {
    /// The two magic bytes were neither "II" nor "MM"
    InvalidFormat([u8; 2]),
    /// Version field was neither 42 nor 43, or BigTIFF is disabled
    UnsupportedVersion(u16),
    /// A seek or read failed
    IoError {
        /// Offset the read or seek was attempted at
        offset: u64,
        /// Number of bytes requested
        length: u64,
        /// Underlying I/O error
        source: io::Error,
    },
    /// A retained tag decoded to fewer values than required
    MalformedTag {
        /// Tag identifier
        tag: u16,
        /// Minimum number of values needed
        expected: usize,
        /// Number of values actually decoded
        found: usize,
    },
    /// A required tag was absent (or zero) after the directory scan
    MissingTag(u16),
}

impl GeoTiffError {
    /// Wraps an I/O error together with the offset and length attempted
    pub fn io(offset: u64, length: u64, source: io::Error) -> Self {
        GeoTiffError::IoError { offset, length, source }
    }
}

impl fmt::Display for GeoTiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoTiffError::InvalidFormat(magic) => {
                write!(f, "Invalid TIFF file: bad byte order marker {:02x}{:02x}", magic[0], magic[1])
            }
            GeoTiffError::UnsupportedVersion(v) => write!(f, "Unsupported TIFF version: {}", v),
            GeoTiffError::IoError { offset, length, source } => {
                write!(f, "I/O error reading {} bytes at offset {}: {}", length, offset, source)
            }
            GeoTiffError::MalformedTag { tag, expected, found } => write!(
                f,
                "Malformed tag {}: expected at least {} values, found {}",
                tag, expected, found
            ),
            GeoTiffError::MissingTag(tag) => write!(f, "Tag {} is not set", tag),
        }
    }
}

impl std::error::Error for GeoTiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoTiffError::IoError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoTiffError {
    fn from(error: io::Error) -> Self {
        GeoTiffError::io(0, 0, error)
    }
}

/// Result type for GeoTIFF operations
pub type GeoTiffResult<T> = Result<T, GeoTiffError>;
