//! Season record types and per-match scoring

use serde::{Deserialize, Serialize};
use standings_common::{Result, StandingsError};
use std::cmp::Ordering;

/// A whole season document: the top-level object of the match data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonFile {
    /// Competition name, e.g. "Japan J1 League 2025"
    #[serde(default)]
    pub name: Option<String>,
    /// Every scheduled fixture, played or not
    pub matches: Vec<MatchRecord>,
}

/// One scheduled fixture as it appears in the season file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Round label, e.g. "Matchday 12"
    pub round: String,
    /// Kick-off date as given by the source
    #[serde(default)]
    pub date: Option<String>,
    /// Kick-off time as given by the source
    #[serde(default)]
    pub time: Option<String>,
    /// Home team
    #[serde(rename = "team1")]
    pub home: String,
    /// Away team
    #[serde(rename = "team2")]
    pub away: String,
    /// Absent or empty until the match has been played
    #[serde(default)]
    pub score: Option<Score>,
}

/// Score block of a fixture.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    /// Full-time goals, `[home, away]`
    #[serde(default)]
    pub ft: Option<[u32; 2]>,
    /// Half-time goals, `[home, away]`
    #[serde(default)]
    pub ht: Option<[u32; 2]>,
}

impl MatchRecord {
    /// Full-time result, if the match has been played.
    #[must_use]
    pub fn final_score(&self) -> Option<(u32, u32)> {
        self.score.and_then(|score| score.ft).map(|[home, away]| (home, away))
    }
}

/// A played fixture with its round already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedMatch {
    /// Round ordinal
    pub round: u32,
    /// Home team
    pub home: String,
    /// Away team
    pub away: String,
    /// Home goals
    pub home_goals: u32,
    /// Away goals
    pub away_goals: u32,
}

impl CompletedMatch {
    /// Build from a raw record. `Ok(None)` means the match is unplayed.
    ///
    /// # Errors
    ///
    /// Fails with a parse error when a played record has a malformed
    /// round label.
    pub fn from_record(record: &MatchRecord) -> Result<Option<Self>> {
        let Some((home_goals, away_goals)) = record.final_score() else {
            return Ok(None);
        };

        Ok(Some(Self {
            round: parse_round(&record.round)?,
            home: record.home.clone(),
            away: record.away.clone(),
            home_goals,
            away_goals,
        }))
    }

    /// Standings points earned by each side.
    #[must_use]
    pub fn points(&self) -> PointsEntry {
        PointsEntry::from_score(self.home_goals, self.away_goals)
    }
}

/// Points awarded to both sides of one match under 3/1/0 scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointsEntry {
    /// Home side points
    pub home: u32,
    /// Away side points
    pub away: u32,
}

impl PointsEntry {
    /// Points for a win
    pub const WIN: u32 = 3;
    /// Points for a draw
    pub const DRAW: u32 = 1;
    /// Points for a loss
    pub const LOSS: u32 = 0;

    /// Score a final result.
    #[must_use]
    pub const fn from_score(home_goals: u32, away_goals: u32) -> Self {
        match compare(home_goals, away_goals) {
            Ordering::Greater => Self { home: Self::WIN, away: Self::LOSS },
            Ordering::Equal => Self { home: Self::DRAW, away: Self::DRAW },
            Ordering::Less => Self { home: Self::LOSS, away: Self::WIN },
        }
    }
}

// `Ord::cmp` is not const.
const fn compare(a: u32, b: u32) -> Ordering {
    if a > b {
        Ordering::Greater
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Equal
    }
}

/// Extract the round ordinal from a label such as "Matchday 23".
///
/// # Errors
///
/// Fails with a parse error when the trailing token is not an unsigned
/// integer.
pub fn parse_round(label: &str) -> Result<u32> {
    let token = label
        .split_whitespace()
        .last()
        .ok_or_else(|| StandingsError::parse("Empty round label"))?;

    token.parse::<u32>().map_err(|e| {
        StandingsError::parse_with_source(format!("Round label '{label}' does not end in a number"), e)
    })
}
