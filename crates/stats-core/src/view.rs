// File: crates/stats-core/src/view.rs
// Summary: Interactive pan/zoom state over the time axis.

use crate::extent::TimeDomain;

/// The currently visible time window.
///
/// This is the only state pan/zoom interactions mutate. The count axis has
/// no counterpart: it is rebuilt from the unchanged [`CountRange`] on every
/// redraw, so vertical extent never moves during interaction.
///
/// [`CountRange`]: crate::extent::CountRange
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeView {
    pub min_ms: f64,
    pub max_ms: f64,
}

impl TimeView {
    pub fn from_domain(domain: TimeDomain) -> Self {
        Self {
            min_ms: domain.min_ms,
            max_ms: domain.max_ms,
        }
    }

    pub fn span_ms(&self) -> f64 {
        self.max_ms - self.min_ms
    }

    /// Shift the window by a pixel delta. Dragging right (positive `dx_px`)
    /// moves the window into the past.
    pub fn pan_by_pixels(&mut self, dx_px: f64, plot_w: f64) {
        let shift = -dx_px / plot_w.max(1.0) * self.span_ms();
        self.min_ms += shift;
        self.max_ms += shift;
    }

    /// Scale the window around the time under the cursor so that instant
    /// stays put. Positive `scroll` zooms in. The factor is clamped to keep
    /// a single wheel notch from collapsing or exploding the window.
    pub fn zoom_at_pixel(&mut self, scroll: f64, cursor_x_px: f64, plot_left: f64, plot_w: f64) {
        let plot_w = plot_w.max(1.0);
        let cx = cursor_x_px.clamp(plot_left, plot_left + plot_w);
        let span = self.span_ms().max(1e-6);
        let anchor_ms = self.min_ms + (cx - plot_left) / plot_w * span;
        let factor = (1.0 - scroll).clamp(0.1, 10.0);
        let new_span = span * factor;
        let anchor_frac = (anchor_ms - self.min_ms) / span;
        self.min_ms = anchor_ms - anchor_frac * new_span;
        self.max_ms = self.min_ms + new_span;
    }
}
