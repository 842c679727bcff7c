// File: crates/stats-client/src/fetch.rs
// Summary: Stats endpoint collaborator: per-series raw timestamp arrays over HTTP.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::ClientError;

/// Raw payload shape: series name -> ordered arrival timestamps (epoch ms).
pub type RawStats = HashMap<String, Vec<f64>>;

/// Source of raw per-series timestamp streams. Abstracted so tests and the
/// demo can inject an in-memory source in place of HTTP.
#[async_trait]
pub trait StatsSource: Send + Sync {
    async fn fetch_stats(&self, conversation_id: &str) -> Result<RawStats, ClientError>;
}

/// HTTP source: `GET {endpoint}?conversation_id={id}`.
#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpStatsSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl StatsSource for HttpStatsSource {
    async fn fetch_stats(&self, conversation_id: &str) -> Result<RawStats, ClientError> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("conversation_id", conversation_id)])
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ClientError::BadStatus(response.status().as_u16()));
        }

        Ok(response.json::<RawStats>().await?)
    }
}
