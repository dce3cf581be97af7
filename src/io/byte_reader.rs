//! Byte-order aware reader over a seekable source
//!
//! `ByteReader` pairs a `SeekableReader` with the `ByteOrderHandler` chosen
//! from the TIFF header, and reports every failed seek or short read as a
//! `GeoTiffError::IoError` carrying the offset and length that were attempted.

use std::io::{self, Read, SeekFrom};

use crate::io::byte_order::{ByteOrder, ByteOrderHandler};
use crate::io::seekable::SeekableReader;
use crate::tiff::errors::{GeoTiffError, GeoTiffResult};

/// Seekable byte source with an established byte order
pub struct ByteReader<'a> {
    reader: &'a mut dyn SeekableReader,
    handler: Box<dyn ByteOrderHandler>,
}

impl<'a> ByteReader<'a> {
    /// Wraps a reader, decoding multi-byte values in the given byte order
    pub fn new(reader: &'a mut dyn SeekableReader, byte_order: ByteOrder) -> Self {
        ByteReader {
            reader,
            handler: byte_order.create_handler(),
        }
    }

    /// Byte order used for all typed reads
    pub fn byte_order(&self) -> ByteOrder {
        self.handler.byte_order()
    }

    /// Handler for decoding raw byte runs in this reader's byte order
    pub fn handler(&self) -> &dyn ByteOrderHandler {
        self.handler.as_ref()
    }

    /// Current position in the underlying source
    pub fn position(&mut self) -> GeoTiffResult<u64> {
        self.reader
            .stream_position()
            .map_err(|e| GeoTiffError::io(0, 0, e))
    }

    /// Moves to an absolute offset
    pub fn seek(&mut self, offset: u64) -> GeoTiffResult<()> {
        self.reader
            .seek(SeekFrom::Start(offset))
            .map(|_| ())
            .map_err(|e| GeoTiffError::io(offset, 0, e))
    }

    /// Reads a u16 at the current position
    pub fn read_u16(&mut self) -> GeoTiffResult<u16> {
        let offset = self.position()?;
        self.handler
            .read_u16(&mut *self.reader)
            .map_err(|e| GeoTiffError::io(offset, 2, e))
    }

    /// Reads a u32 at the current position
    pub fn read_u32(&mut self) -> GeoTiffResult<u32> {
        let offset = self.position()?;
        self.handler
            .read_u32(&mut *self.reader)
            .map_err(|e| GeoTiffError::io(offset, 4, e))
    }

    /// Reads a u64 at the current position
    pub fn read_u64(&mut self) -> GeoTiffResult<u64> {
        let offset = self.position()?;
        self.handler
            .read_u64(&mut *self.reader)
            .map_err(|e| GeoTiffError::io(offset, 8, e))
    }

    /// Reads exactly `length` bytes at the current position
    ///
    /// The buffer grows with the data actually present, so a bogus length
    /// from a corrupt entry fails at end-of-stream instead of allocating
    /// the whole amount up front.
    pub fn read_bytes(&mut self, length: u64) -> GeoTiffResult<Vec<u8>> {
        let offset = self.position()?;
        let mut buffer = Vec::new();
        let read = (&mut *self.reader)
            .take(length)
            .read_to_end(&mut buffer)
            .map_err(|e| GeoTiffError::io(offset, length, e))?;

        if (read as u64) < length {
            return Err(GeoTiffError::io(
                offset,
                length,
                io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    format!("only {} of {} bytes available", read, length),
                ),
            ));
        }

        Ok(buffer)
    }

    /// Seeks to `offset` and reads exactly `length` bytes there
    pub fn read_bytes_at(&mut self, offset: u64, length: u64) -> GeoTiffResult<Vec<u8>> {
        self.seek(offset)?;
        self.read_bytes(length)
    }
}
