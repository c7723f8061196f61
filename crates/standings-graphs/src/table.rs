//! Cumulative standings table and per-round frames

use std::collections::BTreeMap;

/// Cumulative points per (round, team).
///
/// Rows are the rounds that had at least one completed match, ascending.
/// Columns are the teams that played at least one completed match, sorted
/// by name. Values never decrease down a column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsTable {
    rounds: Vec<u32>,
    teams: Vec<String>,
    // rows[round_index][team_index]
    rows: Vec<Vec<u32>>,
}

impl StandingsTable {
    /// Build the cumulative table from per-round point totals.
    ///
    /// A team missing from a round's map earned nothing that round and keeps
    /// its previous total. Returns `None` when there are no rounds.
    #[must_use]
    pub fn from_round_totals(per_round: &BTreeMap<u32, BTreeMap<String, u32>>) -> Option<Self> {
        if per_round.is_empty() {
            return None;
        }

        let mut teams: Vec<String> = per_round
            .values()
            .flat_map(|totals| totals.keys().cloned())
            .collect();
        teams.sort();
        teams.dedup();

        let mut running = vec![0u32; teams.len()];
        let mut rounds = Vec::with_capacity(per_round.len());
        let mut rows = Vec::with_capacity(per_round.len());

        for (&round, totals) in per_round {
            for (total, team) in running.iter_mut().zip(&teams) {
                *total += totals.get(team).copied().unwrap_or(0);
            }
            rounds.push(round);
            rows.push(running.clone());
        }

        Some(Self { rounds, teams, rows })
    }

    /// Rounds covered, ascending.
    #[must_use]
    pub fn rounds(&self) -> &[u32] {
        &self.rounds
    }

    /// Teams covered, by name.
    #[must_use]
    pub fn teams(&self) -> &[String] {
        &self.teams
    }

    /// Cumulative points of `team` through `round`, if both are in the table.
    #[must_use]
    pub fn points(&self, round: u32, team: &str) -> Option<u32> {
        let row = self.rounds.binary_search(&round).ok()?;
        let column = self.teams.binary_search_by(|t| t.as_str().cmp(team)).ok()?;
        Some(self.rows[row][column])
    }

    /// Highest cumulative total anywhere in the table. Since totals only
    /// grow this is the best team's total in the last round.
    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.rows
            .last()
            .and_then(|row| row.iter().max())
            .copied()
            .unwrap_or(0)
    }

    /// Snapshot of one round, or `None` if the round is not in the table.
    #[must_use]
    pub fn frame(&self, round: u32) -> Option<Frame> {
        let row = self.rounds.binary_search(&round).ok()?;
        Some(self.frame_at(row))
    }

    /// One frame per round, ascending.
    #[must_use]
    pub fn frames(&self) -> Vec<Frame> {
        (0..self.rounds.len()).map(|row| self.frame_at(row)).collect()
    }

    fn frame_at(&self, row: usize) -> Frame {
        let mut entries: Vec<FrameEntry> = self
            .teams
            .iter()
            .zip(&self.rows[row])
            .map(|(team, &points)| FrameEntry {
                team: team.clone(),
                points,
            })
            .collect();

        // Ties fall back to team name so re-runs produce identical frames.
        entries.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.team.cmp(&b.team)));

        Frame {
            round: self.rounds[row],
            entries,
        }
    }
}

/// Standings at one round, best team first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Round ordinal
    pub round: u32,
    /// Teams by descending points, then name ascending
    pub entries: Vec<FrameEntry>,
}

/// One team's line in a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameEntry {
    /// Team name
    pub team: String,
    /// Cumulative points
    pub points: u32,
}
