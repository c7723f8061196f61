//! Standings Race - Main Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use standings_common::init_logging;
use standings_config::{ConfigLoader, Overrides};
use standings_race::{exit_status, RunOutcome, StandingsRace};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Season identifier, defaults to the current year
    #[arg(short, long)]
    season: Option<String>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Root directory holding `<season>/<league>.json`
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Write the animation to this file instead of the derived path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Log level filter
    #[arg(short, long)]
    log_level: Option<String>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            season: self.season.clone(),
            data_dir: self.data_dir.clone(),
            output: self.output.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let mut loader = ConfigLoader::new().with_overrides(args.overrides());
    if let Some(path) = &args.config {
        loader = loader.with_file(path);
    }
    let config = loader.load().context("Failed to load configuration")?;

    init_logging(config.logging.to_logging_config()).context("Failed to initialise logging")?;

    info!("Starting standings race for season {}", config.season);

    let result = StandingsRace::new(config).run();
    match (exit_status(&result), result) {
        (Some(code), Ok(outcome)) => {
            if let RunOutcome::Rendered(summary) = outcome {
                info!("Done: {} frames", summary.frames);
            }
            Ok(code)
        }
        (Some(code), Err(err)) => {
            error!("{err}");
            Ok(code)
        }
        (None, result) => result
            .map(|_| ExitCode::FAILURE)
            .context("Standings race failed"),
    }
}
