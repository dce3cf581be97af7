//! TIFF file format parsing module
//!
//! This module provides structures and functions for reading the
//! georeferencing of TIFF and BigTIFF format files.

pub mod errors;
pub mod header;
pub mod ifd;
pub mod value;
pub mod types;
pub mod reader;
pub mod constants;
#[cfg(test)]
mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use errors::{GeoTiffError, GeoTiffResult};
pub use header::{HeaderParser, TiffHeader};
pub use ifd::{DecodedTag, Directory, IfdReader, TagEntry};
pub use value::{DecodedValue, ValueResolver};
pub use reader::{GeoTiffReader, ReaderConfig, ReaderConfigBuilder};
pub use types::GeoTiff;
