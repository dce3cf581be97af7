//! Tag value resolution and decoding
//!
//! A directory entry either carries its value inline (left-aligned in the
//! value-or-offset field) or points at it elsewhere in the file. The
//! resolver fetches the raw bytes from wherever they live and decodes the
//! three types the GeoTIFF reader needs: SHORT, DOUBLE and ASCII.

use std::fmt;
use std::io;

use log::{debug, trace};

use crate::io::byte_order::ByteOrderHandler;
use crate::io::byte_reader::ByteReader;
use crate::tiff::constants::field_types;
use crate::tiff::errors::{GeoTiffError, GeoTiffResult};
use crate::tiff::header::TiffHeader;
use crate::tiff::ifd::TagEntry;
use crate::utils::{string_utils, tag_utils};

/// Decoded values of one directory entry
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedValue {
    /// SHORT values, widened to u32
    Shorts(Vec<u32>),
    /// DOUBLE values
    Doubles(Vec<f64>),
    /// NUL-separated Latin-1 strings
    Ascii(Vec<String>),
    /// A known type the reader does not decode
    Empty,
}

impl DecodedValue {
    /// Number of decoded values
    pub fn len(&self) -> usize {
        match self {
            DecodedValue::Shorts(v) => v.len(),
            DecodedValue::Doubles(v) => v.len(),
            DecodedValue::Ascii(v) => v.len(),
            DecodedValue::Empty => 0,
        }
    }

    /// Whether no values were decoded
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// SHORT values, or an empty slice for any other variant
    pub fn shorts(&self) -> &[u32] {
        match self {
            DecodedValue::Shorts(v) => v,
            _ => &[],
        }
    }

    /// DOUBLE values, or an empty slice for any other variant
    pub fn doubles(&self) -> &[f64] {
        match self {
            DecodedValue::Doubles(v) => v,
            _ => &[],
        }
    }

    /// ASCII segments, or an empty slice for any other variant
    pub fn strings(&self) -> &[String] {
        match self {
            DecodedValue::Ascii(v) => v,
            _ => &[],
        }
    }
}

impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Shorts(v) => write!(f, "{:?}", v),
            DecodedValue::Doubles(v) => write!(f, "{:?}", v),
            DecodedValue::Ascii(v) => write!(f, "{:?}", v),
            DecodedValue::Empty => write!(f, "(not decoded)"),
        }
    }
}

/// Size in bytes of one value of the given field type, 0 if unknown
pub fn type_size(field_type: u16) -> u64 {
    match field_type {
        field_types::BYTE | field_types::SBYTE | field_types::ASCII | field_types::UNDEFINED => 1,
        field_types::SHORT | field_types::SSHORT => 2,
        field_types::LONG | field_types::SLONG | field_types::IFD | field_types::FLOAT => 4,
        field_types::RATIONAL | field_types::SRATIONAL | field_types::LONG8
        | field_types::SLONG8 | field_types::IFD8 | field_types::DOUBLE => 8,
        _ => 0,
    }
}

/// Fetches and decodes the value of a retained directory entry
pub struct ValueResolver<'h> {
    header: &'h TiffHeader,
}

impl<'h> ValueResolver<'h> {
    /// Creates a resolver for a file with the given header
    pub fn new(header: &'h TiffHeader) -> Self {
        ValueResolver { header }
    }

    /// Resolves one entry
    ///
    /// `entry_end` is the offset just past the entry's fixed-size footprint;
    /// the reader is left there whether or not the value lived elsewhere.
    /// Returns `None` for unknown types and zero-length values.
    pub fn resolve(
        &self,
        reader: &mut ByteReader,
        entry: &TagEntry,
        entry_end: u64,
    ) -> GeoTiffResult<Option<DecodedValue>> {
        let size = type_size(entry.field_type);
        if size == 0 {
            debug!("Skipping tag {} with unknown field type {}", entry.tag, entry.field_type);
            return Ok(None);
        }

        let total_bytes = size.checked_mul(entry.count).ok_or_else(|| {
            GeoTiffError::io(
                entry_end - self.header.entry_size(),
                u64::MAX,
                io::Error::new(io::ErrorKind::InvalidData, "value size overflows u64"),
            )
        })?;
        if total_bytes == 0 {
            debug!("Skipping tag {} with zero-length value", entry.tag);
            return Ok(None);
        }

        let inline_capacity = self.header.inline_capacity();
        let is_inline = total_bytes <= inline_capacity as u64;
        trace!(
            "Tag {} ({}) value storage: {} bytes, {} inline (max {} bytes)",
            entry.tag,
            tag_utils::get_tag_name(entry.tag),
            total_bytes,
            if is_inline { "is" } else { "not" },
            inline_capacity
        );

        let raw = if is_inline {
            entry.value_or_offset[..total_bytes as usize].to_vec()
        } else {
            let offset = self.value_offset(reader.handler(), entry);
            let data = reader.read_bytes_at(offset, total_bytes)?;
            reader.seek(entry_end)?;
            data
        };

        Ok(Some(decode_values(entry.field_type, &raw, reader.handler())))
    }

    /// Interprets the value-or-offset field as an offset
    fn value_offset(&self, handler: &dyn ByteOrderHandler, entry: &TagEntry) -> u64 {
        if self.header.is_big_tiff {
            handler.u64_from_bytes(&entry.value_or_offset)
        } else {
            handler.u32_from_bytes(&entry.value_or_offset) as u64
        }
    }
}

/// Decodes a raw value run according to its field type
///
/// Only SHORT, DOUBLE and ASCII are decoded; other types give `Empty`.
pub fn decode_values(field_type: u16, raw: &[u8], handler: &dyn ByteOrderHandler) -> DecodedValue {
    match field_type {
        field_types::ASCII => DecodedValue::Ascii(string_utils::split_latin1_segments(raw)),
        field_types::SHORT => DecodedValue::Shorts(
            raw.chunks_exact(2)
                .map(|chunk| handler.u16_from_bytes(chunk) as u32)
                .collect(),
        ),
        field_types::DOUBLE => DecodedValue::Doubles(
            raw.chunks_exact(8)
                .map(|chunk| handler.f64_from_bytes(chunk))
                .collect(),
        ),
        _ => DecodedValue::Empty,
    }
}
