//! Default values matching the J1 League data layout.

use crate::schema::{AnimationConfig, Config, DataConfig, LoggingSettings, OutputConfig};
use chrono::Datelike;
use std::path::PathBuf;

/// Default season: the current calendar year.
#[must_use]
pub fn default_season() -> String {
    chrono::Local::now().year().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            season: default_season(),
            data: DataConfig::default(),
            output: OutputConfig::default(),
            animation: AnimationConfig::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::new(),
            league_code: "jp.1".to_string(),
            input_template: "{season}/{league}.json".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::new(),
            prefix: "j1".to_string(),
            file_template: "{prefix}_{season}_points.gif".to_string(),
            path: None,
        }
    }
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 700,
            frame_delay_ms: 600,
            axis_margin: 5,
            bar_color: "#f5a623".to_string(),
            background_color: "#ffffff".to_string(),
            text_color: "#000000".to_string(),
            font_family: "sans-serif".to_string(),
            title_font_size: 24,
            label_font_size: 14,
            title_template: "J1 {season} cumulative points - Matchday {round}".to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json_format: false,
            pretty_format: false,
            include_targets: false,
            file_path: None,
        }
    }
}
