//! TIFF/BigTIFF header parsing
//!
//! The header fixes three things for the rest of the parse: the byte order
//! ("II" or "MM"), the format variant (version 42 or 43) and the offset of
//! the first IFD.

use log::debug;

use crate::io::byte_order::ByteOrder;
use crate::io::byte_reader::ByteReader;
use crate::io::seekable::SeekableReader;
use crate::tiff::constants::{header, layout};
use crate::tiff::errors::{GeoTiffError, GeoTiffResult};

/// Parsed file header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for every multi-byte value in the file
    pub byte_order: ByteOrder,
    /// Whether the file uses 64-bit BigTIFF offsets
    pub is_big_tiff: bool,
    /// Offset of the first IFD
    pub ifd0_offset: u64,
}

impl TiffHeader {
    /// Version number as stored in the file
    pub fn version(&self) -> u16 {
        if self.is_big_tiff {
            header::BIG_TIFF_VERSION
        } else {
            header::TIFF_VERSION
        }
    }

    /// Size of the header in bytes
    pub fn header_size(&self) -> u64 {
        if self.is_big_tiff {
            header::BIG_TIFF_HEADER_SIZE
        } else {
            header::TIFF_HEADER_SIZE
        }
    }

    /// Size of one directory entry in bytes
    pub fn entry_size(&self) -> u64 {
        if self.is_big_tiff {
            layout::BIG_TIFF_ENTRY_SIZE
        } else {
            layout::TIFF_ENTRY_SIZE
        }
    }

    /// Number of value bytes that fit directly inside an entry
    pub fn inline_capacity(&self) -> usize {
        if self.is_big_tiff {
            layout::BIG_TIFF_INLINE_CAPACITY
        } else {
            layout::TIFF_INLINE_CAPACITY
        }
    }

    /// Short human-readable format name
    pub fn format_name(&self) -> &'static str {
        if self.is_big_tiff { "BigTIFF" } else { "TIFF" }
    }
}

/// Reads the header from the start of a TIFF stream
pub struct HeaderParser {
    allow_big_tiff: bool,
}

impl HeaderParser {
    /// Creates a parser; with `allow_big_tiff` off, version 43 is rejected
    pub fn new(allow_big_tiff: bool) -> Self {
        HeaderParser { allow_big_tiff }
    }

    /// Parses the header from a source positioned at offset 0
    ///
    /// Leaves the source positioned right after the header.
    pub fn parse(&self, reader: &mut dyn SeekableReader) -> GeoTiffResult<TiffHeader> {
        let byte_order = ByteOrder::detect(reader)?;
        debug!("Detected byte order: {}", byte_order.name());

        let mut bytes = ByteReader::new(reader, byte_order);
        let version = bytes.read_u16()?;
        debug!("TIFF version: {}", version);

        let is_big_tiff = match version {
            header::TIFF_VERSION => false,
            header::BIG_TIFF_VERSION if self.allow_big_tiff => true,
            _ => return Err(GeoTiffError::UnsupportedVersion(version)),
        };

        let ifd0_offset = if is_big_tiff {
            // Bytes 4-7 hold the offset byte size and a reserved word; not checked
            let offset_size = bytes.read_u16()?;
            let reserved = bytes.read_u16()?;
            debug!("BigTIFF offset size: {}, reserved: {}", offset_size, reserved);
            bytes.read_u64()?
        } else {
            bytes.read_u32()? as u64
        };
        debug!("First IFD offset: {}", ifd0_offset);

        Ok(TiffHeader {
            byte_order,
            is_big_tiff,
            ifd0_offset,
        })
    }
}
