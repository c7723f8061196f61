//! Season file loading

use crate::{aggregate, Aggregation, CompletedMatch, MatchRecord, SeasonFile};
use standings_common::{Result, StandingsError};
use std::path::Path;
use tracing::{debug, info, instrument};

impl SeasonFile {
    /// Read and parse a season document.
    ///
    /// # Errors
    ///
    /// `NotFound` when the file does not exist; a parse error when the
    /// content is not a season document.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(StandingsError::not_found(path));
        }

        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StandingsError::not_found(path),
            _ => StandingsError::Io(e),
        })?;

        Self::from_json(&content)
    }

    /// Parse a season document from a JSON string.
    ///
    /// # Errors
    ///
    /// Fails when the content is not JSON or has no `matches` list of
    /// well-formed records.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Keep the played matches, parsing their rounds.
///
/// # Errors
///
/// Fails on the first played record with a malformed round label.
pub fn completed_matches(records: &[MatchRecord]) -> Result<Vec<CompletedMatch>> {
    let played = records
        .iter()
        .filter_map(|record| CompletedMatch::from_record(record).transpose())
        .collect::<Result<Vec<_>>>()?;

    debug!(
        total = records.len(),
        played = played.len(),
        skipped = records.len() - played.len(),
        "Filtered unplayed fixtures"
    );
    Ok(played)
}

/// Load a season file and aggregate it into standings.
///
/// # Errors
///
/// Propagates [`SeasonFile::load`] and [`completed_matches`] failures.
/// A season without results is `Ok(Aggregation::Empty)`.
#[instrument(skip(path), fields(path = %path.display()))]
pub fn load_standings(path: &Path) -> Result<Aggregation> {
    let season = SeasonFile::load(path)?;
    info!(
        competition = season.name.as_deref().unwrap_or("unnamed"),
        fixtures = season.matches.len(),
        "Loaded season data"
    );

    let played = completed_matches(&season.matches)?;
    Ok(aggregate(&played))
}
