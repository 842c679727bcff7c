// File: crates/stats-core/src/lib.rs
// Summary: Core library entry point; exports the sampling, scaling, and chart command API.

pub mod chart;
pub mod error;
pub mod extent;
pub mod layout;
pub mod page;
pub mod palette;
pub mod render;
pub mod sample;
pub mod scale;
pub mod series;
pub mod view;

pub use chart::StatsChart;
pub use error::StatsError;
pub use extent::{count_range, time_domain, CountRange, TimeDomain};
pub use layout::{ChartLayout, Insets, PlotRect};
pub use page::Pager;
pub use palette::{Color, Palette, SeriesStyle};
pub use render::{build_commands, DrawCommand, DrawSink, RecordingSink};
pub use sample::{evenly_sample, validate_events, SampledPoint};
pub use series::{build_series, StatSeries};
pub use view::TimeView;
