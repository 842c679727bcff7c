// File: crates/stats-client/src/lib.rs
// Summary: Client library entry point; fetch, dashboard, scheduler, and signup glue.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod refresh;
pub mod signup;

pub use config::{load_config, ChartDims, StatsConfig};
pub use dashboard::{StatsDashboard, COMMENT_MOUNT, PARTICIPANT_MOUNT, VOTE_MOUNT};
pub use error::{ClientError, FieldError};
pub use fetch::{HttpStatsSource, RawStats, StatsSource};
pub use refresh::{spawn_refresh, RefreshHandle};
pub use signup::{submit_signup, validate_signup};
