use clap::Parser;
use pwc_cli::args::Args;
use pwc_cli::config::Config;
use pwc_cli::{logging, presentation};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = match Config::try_from(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration Error: {e}");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(?config, "resolved configuration");

    // Per-file errors are printed inline and do not change the exit status.
    match pwc_engine::run(&config) {
        Ok(result) => match presentation::print_report(&result, config.metrics) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("Output Error: {e}");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("Application Error: {e}");
            ExitCode::FAILURE
        }
    }
}
