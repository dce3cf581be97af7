use std::io::{self, Write};
use std::process;

use log::LevelFilter;

use geotiff_bounds::commands::{build_cli, run_inputs, GeoTiffCommandFactory};
use geotiff_bounds::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        }
        None => {
            // RUST_LOG still overrides the default level
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        }
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let failures = run_inputs(&GeoTiffCommandFactory::new(), &matches, &mut out, &mut io::stderr());

    let _ = out.flush();
    if failures > 0 {
        process::exit(1);
    }
}
