// File: crates/stats-core/src/extent.rs
// Summary: Shared time domain and count range across a selected set of series.

use crate::series::StatSeries;

/// Time-axis bounds for one chart, in milliseconds since epoch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeDomain {
    pub min_ms: f64,
    pub max_ms: f64,
}

/// Count-axis bounds for one chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountRange {
    pub min: u64,
    pub max: u64,
}

/// Union of first/last timestamps over the non-empty series in the selection.
///
/// Empty series are excluded from the scan entirely; they never contribute an
/// infinity sentinel to the comparison. `None` when every series is empty.
pub fn time_domain(series: &[StatSeries]) -> Option<TimeDomain> {
    let mut domain: Option<TimeDomain> = None;
    for s in series {
        let (Some(first), Some(last)) = (s.first(), s.last()) else {
            continue;
        };
        domain = Some(match domain {
            None => TimeDomain {
                min_ms: first.created_ms,
                max_ms: last.created_ms,
            },
            Some(d) => TimeDomain {
                min_ms: d.min_ms.min(first.created_ms),
                max_ms: d.max_ms.max(last.created_ms),
            },
        });
    }
    domain
}

/// Union of first/last counts over the non-empty series, mirroring
/// [`time_domain`]'s exclusion rule.
pub fn count_range(series: &[StatSeries]) -> Option<CountRange> {
    let mut range: Option<CountRange> = None;
    for s in series {
        let (Some(first), Some(last)) = (s.first(), s.last()) else {
            continue;
        };
        range = Some(match range {
            None => CountRange {
                min: first.count,
                max: last.count,
            },
            Some(r) => CountRange {
                min: r.min.min(first.count),
                max: r.max.max(last.count),
            },
        });
    }
    range
}
