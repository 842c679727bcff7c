// File: crates/stats-client/src/dashboard.rs
// Summary: Fetch-and-rebuild cycle: raw stats -> sampled series -> three mounted charts.

use std::collections::HashMap;

use chrono::Utc;
use stats_core::series::build_series;
use stats_core::{DrawSink, Palette, StatSeries, StatsChart, StatsError};

use crate::config::StatsConfig;
use crate::error::ClientError;
use crate::fetch::{RawStats, StatsSource};

/// Mount point identifiers for the three independently rendered charts.
pub const PARTICIPANT_MOUNT: &str = "ptptCounts";
pub const VOTE_MOUNT: &str = "voteCounts";
pub const COMMENT_MOUNT: &str = "commentCounts";

/// Which series render together on which mount. Series absent from a payload
/// are simply not part of that cycle's selection.
const MOUNTS: [(&str, &[&str]); 3] = [
    (
        PARTICIPANT_MOUNT,
        &["firstVoteTimes", "firstCommentTimes", "viewTimes"],
    ),
    (VOTE_MOUNT, &["voteTimes"]),
    (COMMENT_MOUNT, &["commentTimes"]),
];

/// Owns the per-mount charts and rebuilds them wholesale on every refresh.
///
/// Between refreshes the charts stay interactive (pan/zoom through
/// [`StatsDashboard::chart_mut`]); a failed fetch leaves them untouched.
pub struct StatsDashboard<S> {
    source: S,
    config: StatsConfig,
    palette: Palette,
    charts: HashMap<&'static str, StatsChart>,
}

impl<S: StatsSource> StatsDashboard<S> {
    pub fn new(source: S, config: StatsConfig) -> Self {
        Self {
            source,
            config,
            palette: Palette::conversation_default(),
            charts: HashMap::new(),
        }
    }

    pub fn chart(&self, mount: &str) -> Option<&StatsChart> {
        self.charts.get(mount)
    }

    pub fn chart_mut(&mut self, mount: &str) -> Option<&mut StatsChart> {
        self.charts.get_mut(mount)
    }

    /// One fetch-and-rebuild cycle.
    ///
    /// Fetch failure is logged and the cycle is a no-op (previous charts are
    /// retained; the next tick retries). A validation failure or missing
    /// style skips that one chart; sibling charts still render. An all-empty
    /// selection is "nothing to render", not an error worth a warning.
    pub async fn refresh_once(
        &mut self,
        conversation_id: &str,
        sinks: &mut HashMap<String, Box<dyn DrawSink + Send>>,
    ) {
        let stats = match self.source.fetch_stats(conversation_id).await {
            Ok(stats) => stats,
            Err(e) => {
                tracing::warn!(error = %e, "error fetching stats; keeping previous charts");
                return;
            }
        };

        let now_ms = Utc::now().timestamp_millis() as f64;
        for (mount, keys) in MOUNTS {
            let Some(sink) = sinks.get_mut(mount) else {
                continue;
            };
            match self.rebuild_mount(mount, &stats, keys, now_ms, sink.as_mut()) {
                Ok(()) => tracing::debug!(mount, "chart rendered"),
                Err(ClientError::Core(StatsError::NothingToRender)) => {
                    tracing::debug!(mount, "no data for chart; skipping");
                }
                Err(e) => tracing::warn!(mount, error = %e, "chart skipped"),
            }
        }
    }

    fn rebuild_mount(
        &mut self,
        mount: &'static str,
        stats: &RawStats,
        keys: &[&str],
        now_ms: f64,
        sink: &mut dyn DrawSink,
    ) -> Result<(), ClientError> {
        let mut group: Vec<StatSeries> = Vec::new();
        for key in keys {
            let Some(events) = stats.get(*key) else {
                continue;
            };
            group.push(build_series(
                key,
                events,
                self.config.target_sample_count,
                now_ms,
            )?);
        }

        let mut chart = StatsChart::new(self.config.chart.layout(), self.palette.clone());
        chart.set_series(group);
        chart.render(sink)?;
        // Only a successfully rendered chart replaces the previous one.
        self.charts.insert(mount, chart);
        Ok(())
    }
}
