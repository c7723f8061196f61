//! One end-to-end run: load the season, aggregate, render.

use crate::error::RaceResult;
use standings_config::Config;
use standings_graphs::{load_standings, AnimationRenderer, Aggregation, BarRaceRenderer, RenderSummary, StandingsTable};
use std::process::ExitCode;
use tracing::{info, instrument, warn};

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The animation was written.
    Rendered(RenderSummary),
    /// The season file has no final scores yet; nothing was written.
    NoCompletedMatches,
}

/// Orchestrates a single season render.
#[derive(Debug)]
pub struct StandingsRace {
    config: Config,
}

impl StandingsRace {
    /// Creates a run for the given configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// The configuration this run uses.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Runs with the GIF bar-race renderer.
    ///
    /// # Errors
    ///
    /// See [`StandingsRace::run_with`].
    pub fn run(&self) -> RaceResult<RunOutcome> {
        self.run_with(&BarRaceRenderer::new(self.config.clone()))
    }

    /// Runs with any renderer.
    ///
    /// # Errors
    ///
    /// `NotFound` when the season file is missing, parse errors for a
    /// malformed document and whatever the renderer reports.
    #[instrument(skip(self, renderer), fields(season = %self.config.season, renderer = renderer.name()))]
    pub fn run_with<R: AnimationRenderer>(&self, renderer: &R) -> RaceResult<RunOutcome> {
        let input = self.config.input_path();
        info!("Reading season data from {}", input.display());

        let table = match load_standings(&input)? {
            Aggregation::Standings(table) => table,
            Aggregation::Empty => {
                warn!("No completed matches in {} yet, nothing to render", input.display());
                return Ok(RunOutcome::NoCompletedMatches);
            }
        };

        log_final_standings(&table);

        let summary = renderer.render(&table, &self.config.output_path())?;
        info!(frames = summary.frames, "Animation saved to {}", summary.path.display());
        Ok(RunOutcome::Rendered(summary))
    }
}

/// Exit status for the result of a run.
///
/// Rendering and a season without results both exit 0, a missing season
/// file exits 1. `None` means the error is fatal and should be reported
/// with its full chain.
#[must_use]
pub fn exit_status(result: &RaceResult<RunOutcome>) -> Option<ExitCode> {
    match result {
        Ok(RunOutcome::Rendered(_) | RunOutcome::NoCompletedMatches) => Some(ExitCode::SUCCESS),
        Err(err) if err.is_not_found() => Some(err.exit_code()),
        Err(_) => None,
    }
}

fn log_final_standings(table: &StandingsTable) {
    let Some(&last) = table.rounds().last() else {
        return;
    };
    if let Some(frame) = table.frame(last) {
        info!(
            rounds = table.rounds().len(),
            teams = table.teams().len(),
            "Standings after round {last}"
        );
        for (rank, entry) in frame.entries.iter().enumerate() {
            info!("{:>3}. {:<30} {:>3}", rank + 1, entry.team, entry.points);
        }
    }
}
