// File: crates/stats-core/src/error.rs
// Summary: Error taxonomy for the charting pipeline.

use thiserror::Error;

/// Failures surfaced by the core pipeline. None of these are allowed to
/// degrade into a silent NaN/Infinity inside a scale; callers get an
/// explicit kind and decide whether to skip the chart or the series.
#[derive(Debug, Error)]
pub enum StatsError {
    /// A raw timestamp was NaN or infinite. Data contract violation from
    /// the upstream stats endpoint; the affected series must not be drawn.
    #[error("series '{series}': non-numeric timestamp {value} at index {index}")]
    InvalidTimestamp {
        series: String,
        index: usize,
        value: f64,
    },

    /// No style registered for a series name. The render call for that
    /// chart fails instead of drawing an unstyled line.
    #[error("no style registered for series '{0}'")]
    UnknownSeries(String),

    /// Every selected series was empty, so there is no usable time domain
    /// or count range. The chart is skipped, not drawn with sentinel bounds.
    #[error("all selected series are empty; nothing to render")]
    NothingToRender,

    /// Redraw/pan/zoom was requested before the initial render bound any
    /// scales.
    #[error("chart has not been rendered yet")]
    NotRendered,
}
