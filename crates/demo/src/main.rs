// File: crates/demo/src/main.rs
// Summary: Demo feeds synthetic conversation stats through the full pipeline and pages a comment list.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use async_trait::async_trait;
use stats_client::{
    ClientError, RawStats, StatsConfig, StatsDashboard, StatsSource, COMMENT_MOUNT,
    PARTICIPANT_MOUNT, VOTE_MOUNT,
};
use stats_core::render::DrawCommand;
use stats_core::{DrawSink, Pager};

/// In-memory stand-in for the stats endpoint.
struct SyntheticSource {
    stats: RawStats,
}

#[async_trait]
impl StatsSource for SyntheticSource {
    async fn fetch_stats(&self, _conversation_id: &str) -> Result<RawStats, ClientError> {
        Ok(self.stats.clone())
    }
}

/// Sink that shares its last command list with the demo for inspection.
struct SharedSink(Arc<Mutex<Vec<DrawCommand>>>);

impl DrawSink for SharedSink {
    fn submit(&mut self, commands: &[DrawCommand]) {
        *self.0.lock().unwrap() = commands.to_vec();
    }
}

fn minute_stream(start_ms: f64, n: usize, gap_ms: f64) -> Vec<f64> {
    (0..n).map(|i| start_ms + i as f64 * gap_ms).collect()
}

fn synthetic_stats() -> RawStats {
    let start = 1_700_000_000_000.0;
    let mut stats = RawStats::new();
    stats.insert("voteTimes".to_string(), minute_stream(start, 4_000, 15_000.0));
    stats.insert("firstVoteTimes".to_string(), minute_stream(start, 180, 300_000.0));
    stats.insert(
        "firstCommentTimes".to_string(),
        minute_stream(start + 120_000.0, 45, 900_000.0),
    );
    stats.insert("viewTimes".to_string(), minute_stream(start, 420, 120_000.0));
    stats.insert("commentTimes".to_string(), minute_stream(start + 60_000.0, 800, 60_000.0));
    stats
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = StatsConfig::default();
    let mut dashboard = StatsDashboard::new(
        SyntheticSource {
            stats: synthetic_stats(),
        },
        config,
    );

    let mounts = [PARTICIPANT_MOUNT, VOTE_MOUNT, COMMENT_MOUNT];
    let mut sinks: HashMap<String, Box<dyn DrawSink + Send>> = HashMap::new();
    let mut recorded = HashMap::new();
    for mount in mounts {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        recorded.insert(mount, buffer.clone());
        sinks.insert(mount.to_string(), Box::new(SharedSink(buffer)));
    }

    dashboard.refresh_once("demo-conversation", &mut sinks).await;

    for mount in mounts {
        let commands = recorded[mount].lock().unwrap();
        let paths = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Polyline { .. }))
            .count();
        println!("{mount}: {} commands, {} series paths", commands.len(), paths);
    }

    // Zoom into the vote chart; the data stays put, only the window narrows.
    if let Some(chart) = dashboard.chart_mut(VOTE_MOUNT) {
        let full = chart.view().unwrap().span_ms();
        let sink = sinks.get_mut(VOTE_MOUNT).unwrap();
        chart.zoom(0.5, 300.0, sink.as_mut())?;
        chart.pan(-40.0, sink.as_mut())?;
        let zoomed = chart.view().unwrap().span_ms();
        println!(
            "voteCounts window: {:.0} min -> {:.0} min after zoom",
            full / 60_000.0,
            zoomed / 60_000.0
        );
    }

    // Page through a comment id list the way the carousel does.
    let comment_ids: Vec<u32> = (0..95).collect();
    let mut pager = Pager::new(10);
    pager.move_by(3, comment_ids.len());
    println!("page {}: {:?}", pager.page(), pager.slice(&comment_ids));
    pager.move_by(10, comment_ids.len());
    println!("page {}: {:?}", pager.page(), pager.slice(&comment_ids));

    Ok(())
}
