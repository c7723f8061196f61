//! Validation utilities and regex patterns

use regex::Regex;
use std::sync::LazyLock;
use validator::ValidationError;

/// Regex pattern for validating hex color codes (e.g., #FFFFFF, #F5A623)
pub static HEX_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid hex color regex pattern")
});

/// Validate a season identifier. It becomes a path component of both the
/// input and output paths, so separators and parent references are refused.
///
/// # Errors
///
/// Returns a validation error for empty or path-unsafe identifiers.
pub fn validate_season(season: &str) -> Result<(), ValidationError> {
    if season.trim().is_empty() {
        return Err(ValidationError::new("empty_season"));
    }

    if season.contains(['/', '\\']) || season.contains("..") {
        return Err(ValidationError::new("unsafe_season"));
    }

    Ok(())
}

/// Validate that a path template is keyed by season.
///
/// # Errors
///
/// Returns a validation error when `{season}` is absent.
pub fn validate_season_template(template: &str) -> Result<(), ValidationError> {
    if template.contains("{season}") {
        Ok(())
    } else {
        Err(ValidationError::new("template_missing_season"))
    }
}
