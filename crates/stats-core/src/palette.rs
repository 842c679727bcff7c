// File: crates/stats-core/src/palette.rs
// Summary: Immutable series name -> color/label styling map.

use std::collections::HashMap;

use crate::error::StatsError;

/// RGBA color with 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const STEEL_BLUE: Self = Self::from_rgb8(70, 130, 180);
    pub const ORANGE: Self = Self::from_rgb8(255, 165, 0);
    pub const RED: Self = Self::from_rgb8(255, 0, 0);
}

/// Stroke color and human-readable label for one series name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeriesStyle {
    pub color: Color,
    pub label: String,
}

/// Lookup table from series name to style, fixed at construction.
///
/// Unknown names are an error rather than a fallback style; a chart with an
/// unmapped series fails its render call instead of drawing something
/// unidentifiable.
#[derive(Clone, Debug, Default)]
pub struct Palette {
    styles: HashMap<String, SeriesStyle>,
}

impl Palette {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, name: &str, color: Color, label: &str) -> Self {
        self.styles.insert(
            name.to_string(),
            SeriesStyle {
                color,
                label: label.to_string(),
            },
        );
        self
    }

    /// The conversation activity styling: votes/comments/views in steel
    /// blue, first-vote participants in orange, first-comment commenters in
    /// red.
    pub fn conversation_default() -> Self {
        Self::new()
            .with_style("voteTimes", Color::STEEL_BLUE, "Votes")
            .with_style("firstVoteTimes", Color::ORANGE, "Participants")
            .with_style("commentTimes", Color::STEEL_BLUE, "Comments")
            .with_style("firstCommentTimes", Color::RED, "Commenters")
            .with_style("viewTimes", Color::STEEL_BLUE, "Viewers")
    }

    pub fn style_for(&self, name: &str) -> Result<&SeriesStyle, StatsError> {
        self.styles
            .get(name)
            .ok_or_else(|| StatsError::UnknownSeries(name.to_string()))
    }
}
