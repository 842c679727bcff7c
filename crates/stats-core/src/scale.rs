// File: crates/stats-core/src/scale.rs
// Summary: Time (X) and count (Y) scale transforms between data and pixel space.

use crate::extent::CountRange;
use crate::view::TimeView;

/// Smallest usable span, guards the divisions below.
const MIN_TIME_SPAN_MS: f64 = 1e-6;
const MIN_COUNT_SPAN: f64 = 1e-9;

/// Horizontal scale mapping a visible time window onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub min_ms: f64,
    pub px_per_ms: f64,
}

impl TimeScale {
    pub fn fit(view: TimeView, left_px: f32, right_px: f32) -> Self {
        let span = view.span_ms().max(MIN_TIME_SPAN_MS);
        let width = (right_px - left_px).max(1.0) as f64;
        Self {
            left_px,
            min_ms: view.min_ms,
            px_per_ms: width / span,
        }
    }

    #[inline]
    pub fn to_px(&self, t_ms: f64) -> f32 {
        self.left_px + ((t_ms - self.min_ms) * self.px_per_ms) as f32
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        self.min_ms + (px - self.left_px) as f64 / self.px_per_ms
    }
}

/// Vertical linear scale mapping a count range onto `[bottom_px, top_px]`
/// (screen Y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct CountScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub min: f64,
    pub max: f64,
}

impl CountScale {
    pub fn fit(range: CountRange, top_px: f32, bottom_px: f32) -> Self {
        let mut max = range.max as f64;
        let min = range.min as f64;
        if (max - min).abs() < MIN_COUNT_SPAN {
            max = min + 1.0;
        }
        Self {
            top_px,
            bottom_px,
            min,
            max,
        }
    }

    #[inline]
    pub fn to_px(&self, count: f64) -> f32 {
        let span = (self.max - self.min).max(MIN_COUNT_SPAN);
        self.bottom_px - ((count - self.min) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.max - self.min).max(MIN_COUNT_SPAN);
        self.min + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }
}
