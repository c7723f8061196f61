//! Application-wide error types using thiserror.

use standings_common::StandingsError;
use standings_config::ConfigError;
use std::process::ExitCode;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum RaceError {
    /// Configuration could not be loaded or failed validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Loading, aggregation or rendering failed.
    #[error(transparent)]
    Standings(#[from] StandingsError),
}

impl RaceError {
    /// Whether the season file could not be located.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Standings(err) if err.is_not_found())
    }

    /// Process exit status for this failure.
    #[must_use]
    pub fn exit_code(&self) -> ExitCode {
        if self.is_not_found() {
            ExitCode::from(1)
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Result type for the application.
pub type RaceResult<T> = Result<T, RaceError>;
