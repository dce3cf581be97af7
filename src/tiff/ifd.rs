//! Image File Directory (IFD) structures and methods
//!
//! The reader walks the first IFD only. Each fixed-size entry is read in
//! full, but only the five tags the GeoTIFF reader cares about are kept
//! and resolved; everything else is dropped on the spot.

use std::fmt;

use log::{debug, info, trace, warn};

use crate::io::byte_reader::ByteReader;
use crate::tiff::constants::tags;
use crate::tiff::errors::GeoTiffResult;
use crate::tiff::header::TiffHeader;
use crate::tiff::value::{DecodedValue, ValueResolver};
use crate::utils::tag_utils;

/// Raw directory entry as it appears in the file
///
/// Entries are consumed by the value resolver right after being read and
/// are not kept around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type
    pub field_type: u16,
    /// Number of values
    pub count: u64,
    /// Raw value-or-offset field (4 bytes classic, 8 bytes BigTIFF)
    pub value_or_offset: Vec<u8>,
}

impl TagEntry {
    /// Creates a new entry
    pub fn new(tag: u16, field_type: u16, count: u64, value_or_offset: Vec<u8>) -> Self {
        trace!(
            "Read IFD entry: tag={} ({}), type={} ({}), count={}, value/offset={:02x?}",
            tag,
            tag_utils::get_tag_name(tag),
            field_type,
            tag_utils::get_field_type_name(field_type),
            count,
            value_or_offset
        );

        TagEntry {
            tag,
            field_type,
            count,
            value_or_offset,
        }
    }
}

/// A retained tag together with its decoded value
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedTag {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type the value was stored with
    pub field_type: u16,
    /// Declared number of values
    pub count: u64,
    /// Decoded value
    pub value: DecodedValue,
}

impl fmt::Display for DecodedTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} [{} x {}]",
            self.tag,
            tag_utils::get_tag_name(self.tag),
            self.value,
            tag_utils::get_field_type_name(self.field_type),
            self.count
        )
    }
}

/// The retained, decoded contents of one IFD
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    /// Offset of this IFD in the file
    pub offset: u64,
    /// Number of entries declared in the IFD, retained or not
    pub entry_count: u64,
    /// Retained tags in directory order
    pub tags: Vec<DecodedTag>,
    /// Offset of the next IFD, if it could be read; never followed
    pub next_ifd_offset: Option<u64>,
}

impl Directory {
    /// All occurrences of a tag, in directory order
    pub fn get_all(&self, tag: u16) -> impl Iterator<Item = &DecodedTag> {
        self.tags.iter().filter(move |t| t.tag == tag)
    }

    /// The last occurrence of a tag
    pub fn get_last(&self, tag: u16) -> Option<&DecodedTag> {
        self.tags.iter().rev().find(|t| t.tag == tag)
    }

    /// Checks if a tag was retained
    pub fn has_tag(&self, tag: u16) -> bool {
        self.tags.iter().any(|t| t.tag == tag)
    }
}

/// Whether a tag is one of the five the reader keeps
pub fn is_retained_tag(tag: u16) -> bool {
    tags::RETAINED.contains(&tag)
}

/// Reads the first IFD of a TIFF or BigTIFF file
pub struct IfdReader<'h> {
    header: &'h TiffHeader,
}

impl<'h> IfdReader<'h> {
    /// Creates a reader for a file with the given header
    pub fn new(header: &'h TiffHeader) -> Self {
        IfdReader { header }
    }

    /// Reads the IFD at `header.ifd0_offset`, resolving retained tags
    pub fn read(&self, reader: &mut ByteReader) -> GeoTiffResult<Directory> {
        let offset = self.header.ifd0_offset;
        debug!("Reading IFD at offset: {}", offset);
        reader.seek(offset)?;

        let entry_count = self.read_entry_count(reader)?;
        debug!("IFD entry count: {}", entry_count);

        let resolver = ValueResolver::new(self.header);
        let mut decoded = Vec::new();

        for _ in 0..entry_count {
            let entry = self.read_entry(reader)?;
            if !is_retained_tag(entry.tag) {
                continue;
            }

            let entry_end = reader.position()?;
            if let Some(value) = resolver.resolve(reader, &entry, entry_end)? {
                decoded.push(DecodedTag {
                    tag: entry.tag,
                    field_type: entry.field_type,
                    count: entry.count,
                    value,
                });
            }
        }

        let next_ifd_offset = match self.read_next_ifd_offset(reader) {
            Ok(next) => {
                debug!("Next IFD offset: {} (not followed)", next);
                Some(next)
            }
            Err(e) => {
                warn!("Could not read next IFD offset: {}", e);
                None
            }
        };

        info!("Read IFD with {} entries, {} retained", entry_count, decoded.len());
        Ok(Directory {
            offset,
            entry_count,
            tags: decoded,
            next_ifd_offset,
        })
    }

    /// Reads the entry count (u16 classic, u64 BigTIFF)
    pub fn read_entry_count(&self, reader: &mut ByteReader) -> GeoTiffResult<u64> {
        if self.header.is_big_tiff {
            reader.read_u64()
        } else {
            reader.read_u16().map(|v| v as u64)
        }
    }

    /// Reads a single fixed-size entry
    pub fn read_entry(&self, reader: &mut ByteReader) -> GeoTiffResult<TagEntry> {
        let tag = reader.read_u16()?;
        let field_type = reader.read_u16()?;
        let count = if self.header.is_big_tiff {
            reader.read_u64()?
        } else {
            reader.read_u32()? as u64
        };
        let value_or_offset = reader.read_bytes(self.header.inline_capacity() as u64)?;

        Ok(TagEntry::new(tag, field_type, count, value_or_offset))
    }

    /// Reads the next-IFD offset that follows the entries
    fn read_next_ifd_offset(&self, reader: &mut ByteReader) -> GeoTiffResult<u64> {
        if self.header.is_big_tiff {
            reader.read_u64()
        } else {
            reader.read_u32().map(|v| v as u64)
        }
    }
}
