//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod bounds_command;
pub mod tags_command;

pub use command_traits::{Command, CommandFactory};
pub use bounds_command::BoundsCommand;
pub use tags_command::TagsCommand;

use std::io::Write;

use clap::{Arg, ArgAction, ArgMatches, Command as ClapCommand};
use crate::tiff::errors::GeoTiffResult;
use crate::tiff::reader::ReaderConfig;

/// Command-line interface definition
pub fn build_cli() -> ClapCommand {
    ClapCommand::new("geotiff-bounds")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Read the georeferenced bounding box and name of GeoTIFF files")
        .arg(
            Arg::new("input")
                .help("Input TIFF file(s)")
                .required(true)
                .num_args(1..)
                .index(1),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("tags")
                .long("tags")
                .help("Dump the decoded georeferencing tags instead of the bounding box")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("no-bigtiff")
                .long("no-bigtiff")
                .help("Reject BigTIFF files")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Also write log output to this file")
                .value_name("FILE")
                .required(false),
        )
}

/// Factory for creating command instances based on CLI arguments
///
/// This factory examines the command-line arguments and creates
/// the appropriate command instance for execution.
pub struct GeoTiffCommandFactory;

impl GeoTiffCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        GeoTiffCommandFactory
    }

    /// Reader configuration derived from the arguments
    pub fn reader_config(args: &ArgMatches) -> ReaderConfig {
        ReaderConfig::builder()
            .allow_big_tiff(!args.get_flag("no-bigtiff"))
            .build()
    }
}

impl Default for GeoTiffCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for GeoTiffCommandFactory {
    fn create_command(&self, args: &ArgMatches, input: &str) -> GeoTiffResult<Box<dyn Command>> {
        let config = Self::reader_config(args);

        if args.get_flag("tags") {
            Ok(Box::new(TagsCommand::new(input, config)))
        } else {
            // Default to the bounds report
            Ok(Box::new(BoundsCommand::new(input, config)))
        }
    }
}

/// Runs one command per input, writing one error line per failed input
///
/// Returns the number of inputs that failed.
pub fn run_inputs(
    factory: &dyn CommandFactory,
    args: &ArgMatches,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> usize {
    let mut failures = 0;

    for input in args.get_many::<String>("input").into_iter().flatten() {
        let result = factory
            .create_command(args, input)
            .and_then(|command| command.execute(out));

        if let Err(e) = result {
            let _ = writeln!(err, "Error: {}: {}", input, e);
            failures += 1;
        }
    }

    failures
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_accepts_multiple_inputs() {
        let matches = build_cli()
            .try_get_matches_from(["geotiff-bounds", "-v", "a.tif", "b.tif"])
            .unwrap();

        let inputs: Vec<&String> = matches.get_many::<String>("input").unwrap().collect();
        assert_eq!(inputs, ["a.tif", "b.tif"]);
        assert!(matches.get_flag("verbose"));
        assert!(!matches.get_flag("tags"));
    }

    #[test]
    fn test_cli_requires_input() {
        assert!(build_cli().try_get_matches_from(["geotiff-bounds"]).is_err());
    }

    #[test]
    fn test_reader_config_from_flags() {
        let matches = build_cli()
            .try_get_matches_from(["geotiff-bounds", "--no-bigtiff", "a.tif"])
            .unwrap();
        assert!(!GeoTiffCommandFactory::reader_config(&matches).allow_big_tiff);

        let matches = build_cli().try_get_matches_from(["geotiff-bounds", "a.tif"]).unwrap();
        assert!(GeoTiffCommandFactory::reader_config(&matches).allow_big_tiff);
    }

    #[test]
    fn test_each_failed_input_reported_once() {
        let matches = build_cli()
            .try_get_matches_from(["geotiff-bounds", "/nonexistent/a.tif", "/nonexistent/b.tif"])
            .unwrap();

        let mut out = Vec::new();
        let mut err = Vec::new();
        let failures = run_inputs(&GeoTiffCommandFactory::new(), &matches, &mut out, &mut err);

        let errors = String::from_utf8(err).unwrap();
        assert_eq!(failures, 2);
        assert_eq!(errors.lines().count(), 2);
        assert_eq!(errors.matches("/nonexistent/a.tif").count(), 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_file_reports_error() {
        let matches = build_cli()
            .try_get_matches_from(["geotiff-bounds", "/nonexistent/file.tif"])
            .unwrap();
        let command = GeoTiffCommandFactory::new()
            .create_command(&matches, "/nonexistent/file.tif")
            .unwrap();

        let mut out = Vec::new();
        assert!(command.execute(&mut out).is_err());
        assert!(out.is_empty());
    }
}
