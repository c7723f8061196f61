//! Configuration loading: YAML file, environment overrides, command-line
//! overrides, then validation.

use crate::schema::Config;
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Files probed in the working directory when no path is given.
const DEFAULT_CONFIG_FILES: [&str; 2] = ["standings.yaml", "standings.yml"];

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        /// Variable name
        var: String,
        /// Underlying parse failure
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Explicitly requested configuration file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    MissingConfig(PathBuf),
}

/// Values supplied on the command line. They take precedence over both
/// the file and the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Season identifier
    pub season: Option<String>,
    /// Season data root directory
    pub data_dir: Option<PathBuf>,
    /// Explicit output file
    pub output: Option<PathBuf>,
    /// Log level filter
    pub log_level: Option<String>,
}

/// Configuration loader for the application
#[derive(Debug, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    overrides: Overrides,
}

impl ConfigLoader {
    /// Creates a loader that probes the default file names.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from this file; it must exist.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Apply command-line overrides after the environment.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Load, override and validate the configuration using the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Fails on unreadable or malformed files, unparseable environment
    /// values and validation failures.
    pub fn load(&self) -> Result<Config, ConfigError> {
        self.load_with_env(|key| env::var(key).ok())
    }

    /// Same as [`ConfigLoader::load`] with an explicit variable lookup.
    ///
    /// # Errors
    ///
    /// See [`ConfigLoader::load`].
    pub fn load_with_env<F>(&self, lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match &self.path {
            Some(path) if !path.exists() => return Err(ConfigError::MissingConfig(path.clone())),
            Some(path) => Self::load_file(path)?,
            None => match DEFAULT_CONFIG_FILES.iter().map(Path::new).find(|p| p.exists()) {
                Some(path) => Self::load_file(path)?,
                None => {
                    debug!("No configuration file found, using defaults");
                    Config::default()
                }
            },
        };

        Self::apply_env_overrides(&mut config, lookup)?;
        self.apply_overrides(&mut config);

        config.validate_all()?;
        Ok(config)
    }

    /// Parse a YAML file. Missing sections fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or is not valid YAML.
    pub fn load_file(path: &Path) -> Result<Config, ConfigError> {
        debug!("Loading configuration from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Apply environment variable overrides to configuration
    fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(season) = lookup("STANDINGS_SEASON") {
            config.season = season;
        }

        if let Some(dir) = lookup("STANDINGS_DATA_DIR") {
            config.data.data_dir = PathBuf::from(dir);
        }

        if let Some(dir) = lookup("STANDINGS_OUTPUT_DIR") {
            config.output.output_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("STANDINGS_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(delay) = lookup("STANDINGS_FRAME_DELAY_MS") {
            config.animation.frame_delay_ms =
                delay.trim().parse().map_err(|e| ConfigError::EnvParseError {
                    var: "STANDINGS_FRAME_DELAY_MS".to_string(),
                    source: Box::new(e),
                })?;
        }

        Ok(())
    }

    fn apply_overrides(&self, config: &mut Config) {
        let overrides = &self.overrides;
        if let Some(season) = &overrides.season {
            config.season.clone_from(season);
        }
        if let Some(dir) = &overrides.data_dir {
            config.data.data_dir.clone_from(dir);
        }
        if let Some(output) = &overrides.output {
            config.output.path = Some(output.clone());
        }
        if let Some(level) = &overrides.log_level {
            config.logging.level.clone_from(level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_file_values_are_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("standings.yaml");
        std::fs::write(
            &path,
            "season: \"2024\"\ndata:\n  league_code: en.1\nanimation:\n  frame_delay_ms: 250\n",
        )
        .unwrap();

        let config = ConfigLoader::new()
            .with_file(&path)
            .load_with_env(env_of(&[]))
            .unwrap();

        assert_eq!(config.season, "2024");
        assert_eq!(config.data.league_code, "en.1");
        assert_eq!(config.animation.frame_delay_ms, 250);
        // Untouched sections keep their defaults
        assert_eq!(config.output.prefix, "j1");
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = ConfigLoader::new()
            .with_file("/definitely/not/here.yaml")
            .load_with_env(env_of(&[]));

        assert!(matches!(result, Err(ConfigError::MissingConfig(_))));
    }

    #[test]
    fn test_precedence_file_env_cli() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("standings.yaml");
        std::fs::write(&path, "season: \"2023\"\n").unwrap();

        let env = env_of(&[("STANDINGS_SEASON", "2024"), ("STANDINGS_DATA_DIR", "/data")]);

        let from_env = ConfigLoader::new().with_file(&path).load_with_env(&env).unwrap();
        assert_eq!(from_env.season, "2024");
        assert_eq!(from_env.data.data_dir, PathBuf::from("/data"));

        let from_cli = ConfigLoader::new()
            .with_file(&path)
            .with_overrides(Overrides {
                season: Some("2025".to_string()),
                ..Overrides::default()
            })
            .load_with_env(&env)
            .unwrap();
        assert_eq!(from_cli.season, "2025");
        assert_eq!(from_cli.data.data_dir, PathBuf::from("/data"));
    }

    #[test]
    fn test_bad_env_number() {
        let result = ConfigLoader::new()
            .with_file(write_empty_config().path())
            .load_with_env(env_of(&[("STANDINGS_FRAME_DELAY_MS", "slow")]));

        assert!(matches!(result, Err(ConfigError::EnvParseError { ref var, .. }) if var == "STANDINGS_FRAME_DELAY_MS"));
    }

    #[test]
    fn test_unsafe_season_fails_validation() {
        let result = ConfigLoader::new()
            .with_file(write_empty_config().path())
            .with_overrides(Overrides {
                season: Some("../etc".to_string()),
                ..Overrides::default()
            })
            .load_with_env(env_of(&[]));

        match result {
            Err(ConfigError::ValidationError(errors)) => {
                assert!(errors.field_errors().contains_key("season"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    fn write_empty_config() -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), "{}\n").unwrap();
        file
    }
}
