//! Command pattern interfaces
//!
//! This module defines the core Command pattern interfaces
//! for the CLI application, enabling a clean separation of concerns.

use crate::tiff::errors::GeoTiffResult;

/// Represents an executable command in the application
///
/// Command objects encapsulate the logic for a specific CLI operation,
/// allowing for separation of concerns and better testability.
pub trait Command {
    /// Execute the command, writing its report to `out`
    fn execute(&self, out: &mut dyn std::io::Write) -> GeoTiffResult<()>;
}

/// Factory for creating commands from CLI arguments
///
/// This trait defines the interface for command factories
/// which can parse CLI arguments and create the appropriate Command.
pub trait CommandFactory {
    /// Create a Command for one input file based on CLI arguments
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `input` - Path of the file the command operates on
    fn create_command(&self, args: &clap::ArgMatches, input: &str) -> GeoTiffResult<Box<dyn Command>>;
}
