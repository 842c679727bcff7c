// File: crates/stats-core/src/layout.rs
// Summary: Chart surface dimensions, margins, and the derived plot rectangle.

/// Default surface width in pixels.
pub const WIDTH: u32 = 550;
/// Default surface height in pixels.
pub const HEIGHT: u32 = 200;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Insets {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(20, 20, 20, 50)
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Overall chart geometry: surface size plus margins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartLayout {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
}

impl ChartLayout {
    pub const fn new(width: u32, height: u32, insets: Insets) -> Self {
        Self {
            width,
            height,
            insets,
        }
    }

    /// The plotting rectangle inside the margins. Series paths are clipped
    /// to this rectangle so panned/zoomed content never spills outside it.
    pub fn plot_rect(&self) -> PlotRect {
        let right = (self.width.saturating_sub(self.insets.right)) as f32;
        let bottom = (self.height.saturating_sub(self.insets.bottom)) as f32;
        PlotRect {
            left: self.insets.left as f32,
            top: self.insets.top as f32,
            right: right.max(self.insets.left as f32 + 1.0),
            bottom: bottom.max(self.insets.top as f32 + 1.0),
        }
    }
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT, Insets::default())
    }
}
