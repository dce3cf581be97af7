//! Retained tag dump command
//!
//! Lists the header and the decoded values of the retained tags without
//! validating them, which helps with files that fail to georeference.

use std::fs::File;
use std::io::{BufReader, Write};

use crate::commands::command_traits::Command;
use crate::tiff::errors::GeoTiffResult;
use crate::tiff::reader::{GeoTiffReader, ReaderConfig};

/// Command for dumping the retained tags of a file
pub struct TagsCommand {
    /// Path to the input file
    input_file: String,
    /// Reader configuration
    config: ReaderConfig,
}

impl TagsCommand {
    /// Create a new tags command
    pub fn new(input_file: &str, config: ReaderConfig) -> Self {
        TagsCommand {
            input_file: input_file.to_string(),
            config,
        }
    }
}

impl Command for TagsCommand {
    fn execute(&self, out: &mut dyn Write) -> GeoTiffResult<()> {
        let mut reader = BufReader::new(File::open(&self.input_file)?);
        let (header, directory) = GeoTiffReader::new(self.config).read_directory(&mut reader)?;

        writeln!(out, "{}", self.input_file)?;
        writeln!(out, "  Format: {} ({})", header.format_name(), header.byte_order.name())?;
        writeln!(out, "  IFD #0 (offset: {}), {} entries", directory.offset, directory.entry_count)?;
        for tag in &directory.tags {
            writeln!(out, "    {}", tag)?;
        }
        Ok(())
    }
}
