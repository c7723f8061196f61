//! Frame layout: what goes where, independent of the drawing backend

use crate::{Frame, StandingsTable};

/// One horizontal bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarRow {
    /// 0 for the leader
    pub rank: usize,
    /// Vertical slot counted from the bottom of the plot
    pub slot: usize,
    /// Team name
    pub team: String,
    /// Cumulative points, the bar length
    pub points: u32,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLayout {
    /// Round ordinal
    pub round: u32,
    /// Caption
    pub title: String,
    /// Upper bound of the x-axis, shared by every frame
    pub x_max: u32,
    /// Bars, leader first
    pub bars: Vec<BarRow>,
}

/// Upper x-axis bound for the whole animation.
#[must_use]
pub fn axis_limit(table: &StandingsTable, margin: u32) -> u32 {
    table.max_points().saturating_add(margin).max(1)
}

impl FrameLayout {
    /// Lay out a frame; the leader takes the top slot.
    #[must_use]
    pub fn new(frame: &Frame, x_max: u32, title: String) -> Self {
        let count = frame.entries.len();
        let bars = frame
            .entries
            .iter()
            .enumerate()
            .map(|(rank, entry)| BarRow {
                rank,
                slot: count - 1 - rank,
                team: entry.team.clone(),
                points: entry.points,
            })
            .collect();

        Self {
            round: frame.round,
            title,
            x_max,
            bars,
        }
    }

    /// Team drawn in `slot`, for y-axis labels.
    #[must_use]
    pub fn team_at_slot(&self, slot: usize) -> Option<&str> {
        let rank = self.bars.len().checked_sub(slot + 1)?;
        self.bars.get(rank).map(|bar| bar.team.as_str())
    }

    /// Width of the y label area that fits the longest team name.
    #[must_use]
    pub fn label_area_width(&self, font_size: u32) -> u32 {
        let longest = self
            .bars
            .iter()
            .map(|bar| bar.team.chars().count())
            .max()
            .unwrap_or(0);
        let longest = u32::try_from(longest).unwrap_or(u32::MAX);

        // Roughly 0.6 em per glyph plus padding.
        (longest.saturating_mul(font_size).saturating_mul(3) / 5 + 16).clamp(60, 400)
    }
}
