// File: crates/stats-core/src/sample.rs
// Summary: Even-stride downsampling of arrival timestamps into cumulative-count points.

use crate::error::StatsError;

/// One point of a cumulative activity curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampledPoint {
    /// 1-based running occurrence index within the original, unsampled stream.
    pub count: u64,
    /// Arrival time in milliseconds since epoch.
    pub created_ms: f64,
}

/// Reject NaN/infinite timestamps before they can reach a scale.
pub fn validate_events(series: &str, events: &[f64]) -> Result<(), StatsError> {
    for (index, &value) in events.iter().enumerate() {
        if !value.is_finite() {
            return Err(StatsError::InvalidTimestamp {
                series: series.to_string(),
                index,
                value,
            });
        }
    }
    Ok(())
}

/// Reduce an ordered timestamp stream to at most `target` points by even
/// positional stride, always keeping the first and last original points.
///
/// Counts are assigned over the full stream before reduction, so each kept
/// point carries its true cumulative count rather than a post-sampling index.
/// Input is assumed non-decreasing and is not re-sorted here.
///
/// `events.len() <= target` returns the stream at full fidelity. A `target`
/// below 2 cannot keep both endpoints and degenerates to the first point.
pub fn evenly_sample(events: &[f64], target: usize) -> Vec<SampledPoint> {
    let n = events.len();
    if n == 0 {
        return Vec::new();
    }
    if n <= target {
        return events
            .iter()
            .enumerate()
            .map(|(i, &t)| SampledPoint {
                count: (i + 1) as u64,
                created_ms: t,
            })
            .collect();
    }
    if target < 2 {
        return vec![SampledPoint {
            count: 1,
            created_ms: events[0],
        }];
    }

    // n > target >= 2 here, so the stride exceeds 1 and the rounded indices
    // are strictly increasing; k = 0 lands on index 0 and k = target - 1 on
    // index n - 1.
    let stride = (n - 1) as f64 / (target - 1) as f64;
    let mut out = Vec::with_capacity(target);
    for k in 0..target {
        let idx = ((k as f64 * stride).round() as usize).min(n - 1);
        out.push(SampledPoint {
            count: (idx + 1) as u64,
            created_ms: events[idx],
        });
    }
    out
}
