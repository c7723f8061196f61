//! Test utilities and shared fixtures for the standings-race workspace.
//!
//! Builders here produce season documents in the same JSON shape as the
//! real match data, so loader, aggregator and binary tests all exercise the
//! real parsing path.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

/// Initialize test logging once per test run.
static INIT: Once = Once::new();

/// Initialize logging for tests with a sensible default configuration.
/// This function is safe to call multiple times and will only initialize once.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// One fixture line: round label, home team, away team, optional full-time score.
pub type FixtureRow<'a> = (&'a str, &'a str, &'a str, Option<(u32, u32)>);

/// Build a season document from fixture rows.
///
/// Unplayed fixtures get `"score": {}` so the missing-`ft` path is covered
/// alongside the played `"ft": [h, a]` shape.
#[must_use]
pub fn season_json(rows: &[FixtureRow<'_>]) -> Value {
    let matches: Vec<Value> = rows
        .iter()
        .map(|(round, home, away, score)| {
            let score = match score {
                Some((h, a)) => json!({ "ht": [0, 0], "ft": [h, a] }),
                None => json!({}),
            };
            json!({
                "round": round,
                "date": "2025-02-14",
                "team1": home,
                "team2": away,
                "score": score,
            })
        })
        .collect();

    json!({ "name": "Test League 2025", "matches": matches })
}

/// Write a season document to `<dir>/<season>/<league>.json` and return the path.
///
/// # Panics
///
/// Panics if the fixture cannot be written.
pub fn write_season_file(dir: &Path, season: &str, league: &str, document: &Value) -> PathBuf {
    let season_dir = dir.join(season);
    std::fs::create_dir_all(&season_dir).expect("Failed to create season directory");
    let path = season_dir.join(format!("{league}.json"));
    std::fs::write(&path, document.to_string()).expect("Failed to write season fixture");
    path
}

/// Create a temporary directory for tests that automatically cleans up.
///
/// # Panics
///
/// Panics if the directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// A short three-round season between four clubs with one unplayed fixture.
#[must_use]
pub fn sample_season() -> Value {
    season_json(&[
        ("Matchday 1", "Kashima", "Urawa", Some((2, 1))),
        ("Matchday 1", "Kobe", "Machida", Some((0, 0))),
        ("Matchday 2", "Urawa", "Kobe", Some((1, 3))),
        ("Matchday 2", "Machida", "Kashima", Some((2, 2))),
        ("Matchday 3", "Kashima", "Kobe", Some((1, 0))),
        ("Matchday 3", "Urawa", "Machida", None),
    ])
}
