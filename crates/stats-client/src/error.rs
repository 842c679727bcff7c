// File: crates/stats-client/src/error.rs
// Summary: Client-side error taxonomy wrapping the core kinds.

use stats_core::StatsError;
use thiserror::Error;

/// A validation failure scoped to one form field, for inline display next
/// to the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or decode failure talking to the stats endpoint. Recovered
    /// locally: logged, the cycle becomes a no-op, the next tick retries.
    #[error("stats request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("stats endpoint returned status {0}")]
    BadStatus(u16),

    /// Core pipeline failure (bad timestamp, unknown style, empty charts).
    #[error(transparent)]
    Core(#[from] StatsError),

    /// Form rejected before submission; the fields carry their own messages.
    #[error("form validation failed ({0:?})")]
    FormInvalid(Vec<FieldError>),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
