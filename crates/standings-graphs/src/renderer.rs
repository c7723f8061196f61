//! Animated bar-chart race rendering

use crate::{axis_limit, FrameLayout, StandingsTable};
use plotters::coord::ranged1d::SegmentValue;
use plotters::coord::Shift;
use plotters::prelude::*;
use standings_common::{Result, StandingsError};
use standings_config::Config;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// What a finished render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// File the animation was written to
    pub path: PathBuf,
    /// Number of frames, one per round
    pub frames: usize,
}

/// Trait for turning a standings table into an animation file.
pub trait AnimationRenderer {
    /// Render every round of `table` and write the animation to `output`.
    ///
    /// # Errors
    ///
    /// Drawing and encoding failures are returned as graph errors.
    fn render(&self, table: &StandingsTable, output: &Path) -> Result<RenderSummary>;

    /// Gets the name of this renderer.
    fn name(&self) -> &'static str;
}

/// Parse a `#RRGGBB` color string to `RGBColor`
#[must_use]
pub fn parse_color(color_str: &str) -> RGBColor {
    if let Some(hex) = color_str.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return RGBColor(r, g, b);
            }
        }
    }
    // Default to black if parsing fails
    RGBColor(0, 0, 0)
}

/// Horizontal bar-chart race written as an animated GIF.
#[derive(Debug, Clone)]
pub struct BarRaceRenderer {
    config: Config,
}

impl BarRaceRenderer {
    /// Create a renderer using the animation settings of `config`.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Lay out every frame of the animation, in round order.
    #[must_use]
    pub fn layouts(&self, table: &StandingsTable) -> Vec<FrameLayout> {
        let x_max = axis_limit(table, self.config.animation.axis_margin);
        table
            .frames()
            .iter()
            .map(|frame| FrameLayout::new(frame, x_max, self.config.frame_title(frame.round)))
            .collect()
    }

    fn draw_frame<DB>(&self, root: &DrawingArea<DB, Shift>, layout: &FrameLayout) -> Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: std::error::Error + Send + Sync + 'static,
    {
        let style = &self.config.animation;
        let text_color = parse_color(&style.text_color);
        let bar_color = parse_color(&style.bar_color);

        root.fill(&parse_color(&style.background_color))?;

        let slots = layout.bars.len();
        let family = style.font_family.as_str();
        let title_font = (family, style.title_font_size).into_font().color(&text_color);
        let label_font = (family, style.label_font_size).into_font().color(&text_color);

        let mut chart = ChartBuilder::on(root)
            .caption(&layout.title, title_font)
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(i32::try_from(layout.label_area_width(style.label_font_size)).unwrap_or(400))
            .build_cartesian_2d(0u32..layout.x_max, (0usize..slots).into_segmented())?;

        let y_label = |value: &SegmentValue<usize>| match value {
            SegmentValue::CenterOf(slot) => layout.team_at_slot(*slot).unwrap_or_default().to_string(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_y_mesh()
            .y_labels(slots)
            .y_label_formatter(&y_label)
            .label_style(label_font.clone())
            .axis_desc_style(label_font.clone())
            .x_desc("Points")
            .draw()?;

        chart.draw_series(layout.bars.iter().map(|bar| {
            let mut rect = Rectangle::new(
                [
                    (0, SegmentValue::Exact(bar.slot)),
                    (bar.points, SegmentValue::Exact(bar.slot + 1)),
                ],
                bar_color.filled(),
            );
            rect.set_margin(3, 3, 0, 0);
            rect
        }))?;

        let text_offset = i32::try_from(style.label_font_size / 2).unwrap_or(0);
        chart.draw_series(layout.bars.iter().map(|bar| {
            EmptyElement::at((bar.points, SegmentValue::CenterOf(bar.slot)))
                + Text::new(bar.points.to_string(), (5, -text_offset), label_font.clone())
        }))?;

        Ok(())
    }
}

impl AnimationRenderer for BarRaceRenderer {
    #[instrument(skip(self, table, output), fields(output = %output.display()))]
    fn render(&self, table: &StandingsTable, output: &Path) -> Result<RenderSummary> {
        let layouts = self.layouts(table);
        if layouts.is_empty() {
            return Err(StandingsError::graph("No rounds to render"));
        }

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let style = &self.config.animation;
        let backend = BitMapBackend::gif(output, (style.width, style.height), style.frame_delay_ms)
            .map_err(|e| StandingsError::graph_with_source("Failed to create GIF encoder", e))?;
        let root = backend.into_drawing_area();

        for layout in &layouts {
            self.draw_frame(&root, layout)?;
            root.present()?;
            debug!(round = layout.round, leader = ?layout.bars.first().map(|b| &b.team), "Frame written");
        }

        info!("Successfully rendered {} frames to {}", layouts.len(), output.display());
        Ok(RenderSummary {
            path: output.to_path_buf(),
            frames: layouts.len(),
        })
    }

    fn name(&self) -> &'static str {
        "bar_race"
    }
}
