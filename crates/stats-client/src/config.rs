// File: crates/stats-client/src/config.rs
// Summary: Client configuration: endpoints, refresh cadence, sampling target, chart geometry.

use serde::Deserialize;
use stats_core::{ChartLayout, Insets};

use crate::error::ClientError;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub stats_endpoint: String,
    pub beta_signup_endpoint: String,
    pub target_sample_count: usize,
    pub refresh_interval_ms: u64,
    pub page_size: usize,
    pub chart: ChartDims,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            stats_endpoint: "/api/v3/conversationStats".to_string(),
            beta_signup_endpoint: "/api/v3/beta".to_string(),
            target_sample_count: 300,
            refresh_interval_ms: 60_000,
            page_size: 10,
            chart: ChartDims::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChartDims {
    pub width: u32,
    pub height: u32,
    pub margin_top: u32,
    pub margin_right: u32,
    pub margin_bottom: u32,
    pub margin_left: u32,
}

impl Default for ChartDims {
    fn default() -> Self {
        Self {
            width: 550,
            height: 200,
            margin_top: 20,
            margin_right: 20,
            margin_bottom: 20,
            margin_left: 50,
        }
    }
}

impl ChartDims {
    pub fn layout(&self) -> ChartLayout {
        ChartLayout::new(
            self.width,
            self.height,
            Insets::new(
                self.margin_top,
                self.margin_right,
                self.margin_bottom,
                self.margin_left,
            ),
        )
    }
}

/// Load configuration from an optional file, falling back to defaults for
/// anything absent.
pub fn load_config(path: &str) -> Result<StatsConfig, ClientError> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .build()?;

    Ok(settings.try_deserialize()?)
}
