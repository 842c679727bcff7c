// File: crates/stats-core/src/series.rs
// Summary: Named series built from raw arrival timestamps, extended to "now".

use crate::error::StatsError;
use crate::sample::{evenly_sample, validate_events, SampledPoint};

/// One named, sampled, time-ordered activity stream ready for charting.
///
/// Color and display label are not stored here; they are resolved at render
/// time from a [`Palette`](crate::palette::Palette) so that an unknown name
/// fails the render instead of drawing unstyled.
#[derive(Clone, Debug)]
pub struct StatSeries {
    pub name: String,
    pub points: Vec<SampledPoint>,
}

impl StatSeries {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&SampledPoint> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&SampledPoint> {
        self.points.last()
    }
}

/// Validate, sample, and extend one raw timestamp stream into a series.
///
/// When the sampled sequence is non-empty, exactly one synthetic trailing
/// point `{ count: last.count, created_ms: now_ms }` is appended so the line
/// visually holds its last value up to the present instant. An empty stream
/// stays empty; no synthetic point is fabricated from a nonexistent last
/// element.
///
/// `now_ms` is injected by the caller; the core never reads the clock.
pub fn build_series(
    name: &str,
    raw_events: &[f64],
    target: usize,
    now_ms: f64,
) -> Result<StatSeries, StatsError> {
    validate_events(name, raw_events)?;
    let mut points = evenly_sample(raw_events, target);
    if let Some(last) = points.last().copied() {
        points.push(SampledPoint {
            count: last.count,
            created_ms: now_ms,
        });
    }
    Ok(StatSeries {
        name: name.to_string(),
        points,
    })
}
