//! Standings aggregation: per-match points folded into cumulative totals

use crate::{CompletedMatch, StandingsTable};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Result of aggregating a season.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Aggregation {
    /// At least one match has been played
    Standings(StandingsTable),
    /// No match has a final score yet, e.g. before the season starts
    Empty,
}

impl Aggregation {
    /// The table, if there is one.
    #[must_use]
    pub const fn table(&self) -> Option<&StandingsTable> {
        match self {
            Self::Standings(table) => Some(table),
            Self::Empty => None,
        }
    }

    /// Whether no completed match was found.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Sum points per team within each round.
///
/// A team with several fixtures in the same round gets all of them added
/// before any cumulative step.
#[must_use]
pub fn round_totals(matches: &[CompletedMatch]) -> BTreeMap<u32, BTreeMap<String, u32>> {
    let mut per_round: BTreeMap<u32, BTreeMap<String, u32>> = BTreeMap::new();

    for played in matches {
        let points = played.points();
        let totals = per_round.entry(played.round).or_default();
        *totals.entry(played.home.clone()).or_insert(0) += points.home;
        *totals.entry(played.away.clone()).or_insert(0) += points.away;
    }

    per_round
}

/// Build the cumulative standings from completed matches.
#[instrument(skip(matches), fields(match_count = matches.len()))]
#[must_use]
pub fn aggregate(matches: &[CompletedMatch]) -> Aggregation {
    let per_round = round_totals(matches);

    match StandingsTable::from_round_totals(&per_round) {
        Some(table) => {
            debug!(
                rounds = table.rounds().len(),
                teams = table.teams().len(),
                "Aggregated standings"
            );
            Aggregation::Standings(table)
        }
        None => Aggregation::Empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn played(round: u32, home: &str, away: &str, home_goals: u32, away_goals: u32) -> CompletedMatch {
        CompletedMatch {
            round,
            home: home.to_string(),
            away: away.to_string(),
            home_goals,
            away_goals,
        }
    }

    #[test]
    fn test_no_matches_is_empty() {
        assert_eq!(aggregate(&[]), Aggregation::Empty);
        assert!(aggregate(&[]).table().is_none());
    }

    #[test]
    fn test_single_match() {
        let result = aggregate(&[played(1, "Team A", "Team B", 2, 1)]);
        let table = result.table().unwrap();

        assert_eq!(table.rounds(), &[1]);
        assert_eq!(table.points(1, "Team A"), Some(3));
        assert_eq!(table.points(1, "Team B"), Some(0));
    }

    #[test]
    fn test_rematch_in_same_round_is_summed_first() {
        let matches = [
            played(1, "Team A", "Team B", 1, 1),
            played(1, "Team B", "Team A", 1, 1),
            played(2, "Team A", "Team B", 0, 1),
        ];

        let totals = round_totals(&matches);
        assert_eq!(totals[&1]["Team A"], 2);
        assert_eq!(totals[&1]["Team B"], 2);

        let table = aggregate(&matches).table().cloned().unwrap();
        assert_eq!(table.rounds(), &[1, 2]);
        assert_eq!(table.points(1, "Team A"), Some(2));
        assert_eq!(table.points(2, "Team A"), Some(2));
        assert_eq!(table.points(2, "Team B"), Some(5));
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let forward = [
            played(1, "A", "B", 2, 0),
            played(2, "B", "C", 1, 1),
            played(3, "C", "A", 3, 2),
        ];
        let mut backward = forward.clone();
        backward.reverse();

        assert_eq!(aggregate(&forward), aggregate(&backward));
    }

    fn match_strategy() -> impl Strategy<Value = CompletedMatch> {
        let teams = prop::sample::select(vec!["A", "B", "C", "D", "E"]);
        (1u32..12, teams.clone(), teams, 0u32..6, 0u32..6)
            .prop_filter("distinct sides", |(_, home, away, _, _)| home != away)
            .prop_map(|(round, home, away, hg, ag)| played(round, home, away, hg, ag))
    }

    proptest! {
        #[test]
        fn prop_cumulative_points_never_decrease(matches in prop::collection::vec(match_strategy(), 1..60)) {
            let result = aggregate(&matches);
            let table = result.table().unwrap();

            for team in table.teams() {
                let column: Vec<u32> = table
                    .rounds()
                    .iter()
                    .map(|&round| table.points(round, team).unwrap())
                    .collect();
                prop_assert!(column.windows(2).all(|w| w[0] <= w[1]), "{team}: {column:?}");
            }
        }

        #[test]
        fn prop_final_totals_match_direct_sum(matches in prop::collection::vec(match_strategy(), 1..60)) {
            let result = aggregate(&matches);
            let table = result.table().unwrap();
            let last = *table.rounds().last().unwrap();

            for team in table.teams() {
                let direct: u32 = matches
                    .iter()
                    .map(|m| {
                        let points = m.points();
                        if &m.home == team {
                            points.home
                        } else if &m.away == team {
                            points.away
                        } else {
                            0
                        }
                    })
                    .sum();
                prop_assert_eq!(table.points(last, team), Some(direct));
            }
        }

        #[test]
        fn prop_rows_are_exactly_played_rounds(matches in prop::collection::vec(match_strategy(), 1..60)) {
            let result = aggregate(&matches);
            let table = result.table().unwrap();

            let mut expected: Vec<u32> = matches.iter().map(|m| m.round).collect();
            expected.sort_unstable();
            expected.dedup();
            prop_assert_eq!(table.rounds(), expected.as_slice());
        }
    }
}
