//! Byte order handling for TIFF files
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading TIFF data.
//! Handlers decode either straight from a stream or from raw byte runs
//! that were already pulled out of an IFD entry.

use byteorder::{BigEndian, ByteOrder as ByteOrderExt, LittleEndian, ReadBytesExt};
use std::io::Result;

use crate::io::seekable::SeekableReader;
use crate::tiff::constants::header;
use crate::tiff::errors::{GeoTiffError, GeoTiffResult};

/// Represents the byte order of a TIFF file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order (II)
    LittleEndian,
    /// Big-endian byte order (MM)
    BigEndian,
}

impl ByteOrder {
    /// Maps the two magic bytes at the start of a TIFF file to a byte order
    pub fn from_marker(marker: [u8; 2]) -> GeoTiffResult<Self> {
        match marker {
            header::LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian),
            header::BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),
            _ => Err(GeoTiffError::InvalidFormat(marker)),
        }
    }

    /// Detects the byte order from the TIFF header
    pub fn detect(reader: &mut dyn SeekableReader) -> GeoTiffResult<Self> {
        let offset = reader.stream_position()?;
        let mut marker = [0u8; 2];
        reader
            .read_exact(&mut marker)
            .map_err(|e| GeoTiffError::io(offset, 2, e))?;
        Self::from_marker(marker)
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Little Endian (II)",
            ByteOrder::BigEndian => "Big Endian (MM)",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
///
/// The `*_from_bytes` methods expect a slice of at least the value's width;
/// only the leading bytes are used, so left-aligned inline values can be
/// passed as-is.
pub trait ByteOrderHandler: Send + Sync {
    /// The byte order this handler decodes
    fn byte_order(&self) -> ByteOrder;

    /// Read a u16 value
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16>;

    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32>;

    /// Read a u64 value
    fn read_u64(&self, reader: &mut dyn SeekableReader) -> Result<u64>;

    /// Read an f64 value
    fn read_f64(&self, reader: &mut dyn SeekableReader) -> Result<f64>;

    /// Decode a u16 from the first two bytes of a slice
    fn u16_from_bytes(&self, bytes: &[u8]) -> u16;

    /// Decode a u32 from the first four bytes of a slice
    fn u32_from_bytes(&self, bytes: &[u8]) -> u32;

    /// Decode a u64 from the first eight bytes of a slice
    fn u64_from_bytes(&self, bytes: &[u8]) -> u64;

    /// Decode an IEEE-754 double from the first eight bytes of a slice
    ///
    /// The full 8-byte run is reversed for big-endian input.
    fn f64_from_bytes(&self, bytes: &[u8]) -> f64;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn byte_order(&self) -> ByteOrder {
        ByteOrder::LittleEndian
    }

    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_u64(&self, reader: &mut dyn SeekableReader) -> Result<u64> {
        reader.read_u64::<LittleEndian>()
    }

    fn read_f64(&self, reader: &mut dyn SeekableReader) -> Result<f64> {
        reader.read_f64::<LittleEndian>()
    }

    fn u16_from_bytes(&self, bytes: &[u8]) -> u16 {
        LittleEndian::read_u16(bytes)
    }

    fn u32_from_bytes(&self, bytes: &[u8]) -> u32 {
        LittleEndian::read_u32(bytes)
    }

    fn u64_from_bytes(&self, bytes: &[u8]) -> u64 {
        LittleEndian::read_u64(bytes)
    }

    fn f64_from_bytes(&self, bytes: &[u8]) -> f64 {
        LittleEndian::read_f64(bytes)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn byte_order(&self) -> ByteOrder {
        ByteOrder::BigEndian
    }

    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_u64(&self, reader: &mut dyn SeekableReader) -> Result<u64> {
        reader.read_u64::<BigEndian>()
    }

    fn read_f64(&self, reader: &mut dyn SeekableReader) -> Result<f64> {
        reader.read_f64::<BigEndian>()
    }

    fn u16_from_bytes(&self, bytes: &[u8]) -> u16 {
        BigEndian::read_u16(bytes)
    }

    fn u32_from_bytes(&self, bytes: &[u8]) -> u32 {
        BigEndian::read_u32(bytes)
    }

    fn u64_from_bytes(&self, bytes: &[u8]) -> u64 {
        BigEndian::read_u64(bytes)
    }

    fn f64_from_bytes(&self, bytes: &[u8]) -> f64 {
        BigEndian::read_f64(bytes)
    }
}
