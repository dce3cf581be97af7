//! GeoTIFF file reader implementation
//!
//! Runs a single pass over the byte source: header, first IFD (resolving
//! the retained tags as they are met), interpretation, and finally the
//! bounding box. No pixel data is ever read.

use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, SeekFrom};
use std::path::Path;

use crate::coordinate::BoundingBox;
use crate::geo::GeoInterpreter;
use crate::io::byte_reader::ByteReader;
use crate::io::seekable::SeekableReader;
use crate::tiff::errors::{GeoTiffError, GeoTiffResult};
use crate::tiff::header::{HeaderParser, TiffHeader};
use crate::tiff::ifd::{Directory, IfdReader};
use crate::tiff::types::GeoTiff;

/// Reader configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Whether version 43 (BigTIFF) files are accepted
    pub allow_big_tiff: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig { allow_big_tiff: true }
    }
}

impl ReaderConfig {
    /// Starts building a configuration from the defaults
    pub fn builder() -> ReaderConfigBuilder {
        ReaderConfigBuilder::default()
    }
}

/// Builder for ReaderConfig
#[derive(Debug, Default)]
pub struct ReaderConfigBuilder {
    config: ReaderConfig,
}

impl ReaderConfigBuilder {
    /// Accept or reject BigTIFF files
    pub fn allow_big_tiff(mut self, allow: bool) -> Self {
        self.config.allow_big_tiff = allow;
        self
    }

    /// Build the configuration
    pub fn build(self) -> ReaderConfig {
        self.config
    }
}

/// Reader for the georeferencing of TIFF and BigTIFF files
#[derive(Debug, Default, Clone)]
pub struct GeoTiffReader {
    config: ReaderConfig,
}

impl GeoTiffReader {
    /// Creates a new reader
    pub fn new(config: ReaderConfig) -> Self {
        GeoTiffReader { config }
    }

    /// Loads a GeoTIFF file from the given path
    ///
    /// This is the main entry point for loading a file.
    /// It opens the file and delegates to the read() method.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> GeoTiffResult<GeoTiff> {
        let path = path.as_ref();
        info!("Loading GeoTIFF file: {}", path.display());

        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        self.read(&mut reader)
    }

    /// Reads georeferencing from the given reader
    ///
    /// Either every required tag resolves and validates, or the whole read
    /// fails; there is no partial result.
    pub fn read(&self, reader: &mut dyn SeekableReader) -> GeoTiffResult<GeoTiff> {
        let (header, directory) = self.read_directory(reader)?;

        let metadata = GeoInterpreter::interpret(&directory.tags)?;
        let bounding_box = BoundingBox::from_metadata(&metadata);
        info!("Bounding box: {}", bounding_box);

        Ok(GeoTiff {
            header,
            metadata,
            bounding_box,
        })
    }

    /// Reads the header and the retained tags of the first IFD
    ///
    /// No validation of the tag values happens here.
    pub fn read_directory(&self, reader: &mut dyn SeekableReader) -> GeoTiffResult<(TiffHeader, Directory)> {
        debug!("GeoTiffReader::read starting");
        reader
            .seek(SeekFrom::Start(0))
            .map_err(|e| GeoTiffError::io(0, 0, e))?;

        let header = HeaderParser::new(self.config.allow_big_tiff).parse(reader)?;

        let mut bytes = ByteReader::new(reader, header.byte_order);
        let directory = IfdReader::new(&header).read(&mut bytes)?;

        Ok((header, directory))
    }
}
