//! Structured logging infrastructure for standings-race

use crate::{Result, StandingsError};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Configuration for the logging system
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "`standings_graphs=trace`")
    pub level: String,
    /// Whether to emit one JSON object per event
    pub json_format: bool,
    /// Whether to enable pretty formatting with colors
    pub pretty_format: bool,
    /// Optional file path for log output, appended to
    pub file_path: Option<PathBuf>,
    /// Whether to include target module information
    pub include_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            file_path: None,
            include_targets: false,
        }
    }
}

impl LoggingConfig {
    /// Build the filter. `RUST_LOG` wins over the configured level, and an
    /// unparseable level falls back to `info`.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// Fails if the log file cannot be opened or a global subscriber is
/// already installed.
pub fn init_logging(config: LoggingConfig) -> Result<()> {
    let registry = tracing_subscriber::registry().with(config.env_filter());

    let file = match &config.file_path {
        Some(path) => Some(
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)?,
        ),
        None => None,
    };

    let result = if config.json_format {
        let layer = fmt::layer().json().with_target(config.include_targets);
        match file {
            Some(file) => registry.with(layer.with_writer(file)).try_init(),
            None => registry.with(layer).try_init(),
        }
    } else if config.pretty_format {
        let layer = fmt::layer().pretty().with_target(config.include_targets);
        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init(),
            None => registry.with(layer).try_init(),
        }
    } else {
        let layer = fmt::layer().compact().with_target(config.include_targets);
        match file {
            Some(file) => registry
                .with(layer.with_ansi(false).with_writer(file))
                .try_init(),
            None => registry.with(layer).try_init(),
        }
    };

    result.map_err(|e| StandingsError::config_with_source("Failed to initialize logging", e))
}
