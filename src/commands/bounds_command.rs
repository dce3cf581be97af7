//! Bounding box report command
//!
//! Prints the format, dimensions, name and corner coordinates of a
//! GeoTIFF file.

use std::io::Write;

use log::debug;

use crate::commands::command_traits::Command;
use crate::tiff::errors::GeoTiffResult;
use crate::tiff::reader::{GeoTiffReader, ReaderConfig};

/// Command for reporting the bounding box of a file
pub struct BoundsCommand {
    /// Path to the input file
    input_file: String,
    /// Reader configuration
    config: ReaderConfig,
}

impl BoundsCommand {
    /// Create a new bounds command
    pub fn new(input_file: &str, config: ReaderConfig) -> Self {
        BoundsCommand {
            input_file: input_file.to_string(),
            config,
        }
    }
}

impl Command for BoundsCommand {
    fn execute(&self, out: &mut dyn Write) -> GeoTiffResult<()> {
        debug!("Computing bounds for {}", self.input_file);
        let geotiff = GeoTiffReader::new(self.config).load(&self.input_file)?;

        writeln!(out, "{}", self.input_file)?;
        writeln!(out, "{}", geotiff)?;
        Ok(())
    }
}
