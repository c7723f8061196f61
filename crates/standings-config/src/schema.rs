//! Configuration schema definitions using serde with validation attributes.

use serde::{Deserialize, Serialize};
use standings_common::LoggingConfig;
use std::path::PathBuf;
use validator::Validate;

/// Main configuration structure for standings-race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Season identifier; selects both the input file and the output GIF.
    #[validate(custom(
        function = "crate::validation::validate_season",
        message = "Season must be a non-empty path-safe identifier"
    ))]
    pub season: String,
    /// Input data configuration.
    #[validate]
    pub data: DataConfig,
    /// Output artifact configuration.
    #[validate]
    pub output: OutputConfig,
    /// Animation rendering configuration.
    #[validate]
    pub animation: AnimationConfig,
    /// Logging configuration.
    #[validate]
    pub logging: LoggingSettings,
}

/// Where the season match data lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct DataConfig {
    /// Root directory holding one sub-directory per season.
    pub data_dir: PathBuf,
    /// Competition code used as the file stem, e.g. `jp.1`.
    #[validate(length(min = 1, message = "League code cannot be empty"))]
    pub league_code: String,
    /// Relative input path; `{season}` and `{league}` are substituted.
    #[validate(custom(
        function = "crate::validation::validate_season_template",
        message = "Input template must contain {season}"
    ))]
    pub input_template: String,
}

/// Where the animation is written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the GIF is written into.
    pub output_dir: PathBuf,
    /// Short competition prefix for the file name, e.g. `j1`.
    #[validate(length(min = 1, message = "Output prefix cannot be empty"))]
    pub prefix: String,
    /// File name; `{prefix}` and `{season}` are substituted.
    #[validate(custom(
        function = "crate::validation::validate_season_template",
        message = "Output template must contain {season}"
    ))]
    pub file_template: String,
    /// Explicit output file, bypassing `output_dir` and `file_template`.
    pub path: Option<PathBuf>,
}

/// Bar-chart race rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct AnimationConfig {
    /// Frame width in pixels
    #[validate(range(min = 200, max = 4000, message = "Width must be between 200 and 4000 pixels"))]
    pub width: u32,

    /// Frame height in pixels
    #[validate(range(min = 200, max = 4000, message = "Height must be between 200 and 4000 pixels"))]
    pub height: u32,

    /// Delay between frames in milliseconds
    #[validate(range(min = 20, max = 10000, message = "Frame delay must be between 20 and 10000 ms"))]
    pub frame_delay_ms: u32,

    /// Points added past the season maximum on the x-axis
    #[validate(range(min = 1, max = 100, message = "Axis margin must be between 1 and 100"))]
    pub axis_margin: u32,

    /// Bar fill color (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Bar color must be valid hex color"))]
    pub bar_color: String,

    /// Background color (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Background color must be valid hex color"))]
    pub background_color: String,

    /// Caption and label color (hex format)
    #[validate(regex(path = "crate::validation::HEX_COLOR_REGEX", message = "Text color must be valid hex color"))]
    pub text_color: String,

    /// Font family for all text
    #[validate(length(min = 1, message = "Font family cannot be empty"))]
    pub font_family: String,

    /// Caption font size
    #[validate(range(min = 8, max = 72, message = "Title font size must be between 8 and 72"))]
    pub title_font_size: u32,

    /// Team and value label font size
    #[validate(range(min = 8, max = 72, message = "Label font size must be between 8 and 72"))]
    pub label_font_size: u32,

    /// Caption; `{season}` and `{round}` are substituted per frame.
    #[validate(length(min = 1, message = "Title template cannot be empty"))]
    pub title_template: String,
}

/// Logging settings as they appear in the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level filter, e.g. `info` or `standings_graphs=debug`
    #[validate(length(min = 1, message = "Log level cannot be empty"))]
    pub level: String,
    /// Emit JSON lines instead of compact text
    pub json_format: bool,
    /// Multi-line human-readable output; ignored when `json_format` is set
    pub pretty_format: bool,
    /// Show the module target of each event
    pub include_targets: bool,
    /// Append logs to this file instead of stdout
    pub file_path: Option<PathBuf>,
}

impl LoggingSettings {
    /// Subscriber settings for [`standings_common::init_logging`].
    #[must_use]
    pub fn to_logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.level.clone(),
            json_format: self.json_format,
            pretty_format: self.pretty_format,
            file_path: self.file_path.clone(),
            include_targets: self.include_targets,
        }
    }
}

/// Substitute `{key}` placeholders in a template.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    values.iter().fold(template.to_string(), |acc, (key, value)| {
        acc.replace(&format!("{{{key}}}"), value)
    })
}

impl Config {
    /// Resolved path of the season's match data.
    #[must_use]
    pub fn input_path(&self) -> PathBuf {
        let relative = fill_template(
            &self.data.input_template,
            &[("season", self.season.as_str()), ("league", self.data.league_code.as_str())],
        );
        self.data.data_dir.join(relative)
    }

    /// Resolved path of the animated GIF.
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        if let Some(path) = &self.output.path {
            return path.clone();
        }
        let file_name = fill_template(
            &self.output.file_template,
            &[("prefix", self.output.prefix.as_str()), ("season", self.season.as_str())],
        );
        self.output.output_dir.join(file_name)
    }

    /// Caption of the frame for `round`.
    #[must_use]
    pub fn frame_title(&self, round: u32) -> String {
        let round = round.to_string();
        fill_template(
            &self.animation.title_template,
            &[("season", self.season.as_str()), ("round", round.as_str())],
        )
    }

    /// Validates the configuration, including nested sections.
    ///
    /// # Errors
    ///
    /// Returns every failed constraint.
    pub fn validate_all(&self) -> Result<(), validator::ValidationErrors> {
        self.validate()
    }
}
