// File: crates/stats-core/src/render.rs
// Summary: Pure chart geometry: (view, range, series) -> drawing commands for an injected sink.

use chrono::{DateTime, Utc};

use crate::error::StatsError;
use crate::extent::CountRange;
use crate::layout::{ChartLayout, PlotRect};
use crate::palette::{Color, Palette};
use crate::scale::{CountScale, TimeScale};
use crate::series::StatSeries;
use crate::view::TimeView;

const AXIS_COLOR: Color = Color::from_rgb8(180, 180, 190);
const GRID_COLOR: Color = Color::from_rgb8(225, 225, 230);
const SERIES_STROKE_WIDTH: f32 = 2.0;
const X_TICKS: usize = 6;
const Y_TICKS: usize = 5;

/// Backend-agnostic drawing command. A sink (SVG, canvas, test recorder)
/// interprets these; the core never touches a draw surface directly.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Start clipping to a rectangle. Balanced by a later [`DrawCommand::ClipEnd`].
    ClipRect(PlotRect),
    /// End clipping.
    ClipEnd,
    /// A single straight line (axes, grid).
    Line {
        x0: f32,
        y0: f32,
        x1: f32,
        y1: f32,
        color: Color,
        width: f32,
    },
    /// One series' path through pixel space.
    Polyline {
        series: String,
        points: Vec<(f32, f32)>,
        color: Color,
        width: f32,
    },
    /// Axis tick label.
    TickLabel { x: f32, y: f32, text: String },
}

/// Injected draw surface. Receives the full command list for one (re)draw.
pub trait DrawSink {
    fn submit(&mut self, commands: &[DrawCommand]);
}

/// Sink that keeps the last submitted command list; used by tests and the demo.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub commands: Vec<DrawCommand>,
    pub submissions: usize,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DrawSink for RecordingSink {
    fn submit(&mut self, commands: &[DrawCommand]) {
        self.commands = commands.to_vec();
        self.submissions += 1;
    }
}

/// Build the full command list for one chart draw.
///
/// Geometry only: scales are fitted to the given view/range, axes and grid
/// are laid out, and every series with at least two points gets a clipped
/// polyline. Series styling comes from `palette`; an unmapped name fails the
/// whole call before any command is produced.
pub fn build_commands(
    layout: &ChartLayout,
    view: &TimeView,
    range: &CountRange,
    series: &[StatSeries],
    palette: &Palette,
) -> Result<Vec<DrawCommand>, StatsError> {
    // Resolve styles up front so a missing entry fails before anything draws.
    let styles = series
        .iter()
        .map(|s| palette.style_for(&s.name).map(|style| (s, style)))
        .collect::<Result<Vec<_>, _>>()?;

    let plot = layout.plot_rect();
    let x_scale = TimeScale::fit(*view, plot.left, plot.right);
    let y_scale = CountScale::fit(*range, plot.top, plot.bottom);

    let mut out = Vec::new();
    push_grid_and_axes(&mut out, &plot, &x_scale, &y_scale);

    out.push(DrawCommand::ClipRect(plot));
    for (s, style) in styles {
        if s.points.len() < 2 {
            continue;
        }
        let points = s
            .points
            .iter()
            .map(|p| (x_scale.to_px(p.created_ms), y_scale.to_px(p.count as f64)))
            .collect();
        out.push(DrawCommand::Polyline {
            series: s.name.clone(),
            points,
            color: style.color,
            width: SERIES_STROKE_WIDTH,
        });
    }
    out.push(DrawCommand::ClipEnd);
    Ok(out)
}

fn push_grid_and_axes(
    out: &mut Vec<DrawCommand>,
    plot: &PlotRect,
    x_scale: &TimeScale,
    y_scale: &CountScale,
) {
    // Full-length grid lines behind the data, one per tick.
    for x in linspace(plot.left as f64, plot.right as f64, X_TICKS) {
        let x = x as f32;
        out.push(DrawCommand::Line {
            x0: x,
            y0: plot.top,
            x1: x,
            y1: plot.bottom,
            color: GRID_COLOR,
            width: 1.0,
        });
        out.push(DrawCommand::TickLabel {
            x,
            y: plot.bottom + 14.0,
            text: format_time_tick(x_scale.from_px(x)),
        });
    }
    for y in linspace(plot.top as f64, plot.bottom as f64, Y_TICKS) {
        let y = y as f32;
        out.push(DrawCommand::Line {
            x0: plot.left,
            y0: y,
            x1: plot.right,
            y1: y,
            color: GRID_COLOR,
            width: 1.0,
        });
        out.push(DrawCommand::TickLabel {
            x: plot.left - 6.0,
            y,
            text: format!("{:.0}", y_scale.from_px(y)),
        });
    }

    // Axis lines on top of the grid.
    out.push(DrawCommand::Line {
        x0: plot.left,
        y0: plot.bottom,
        x1: plot.right,
        y1: plot.bottom,
        color: AXIS_COLOR,
        width: 1.5,
    });
    out.push(DrawCommand::Line {
        x0: plot.left,
        y0: plot.top,
        x1: plot.left,
        y1: plot.bottom,
        color: AXIS_COLOR,
        width: 1.5,
    });
}

fn format_time_tick(t_ms: f64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(t_ms as i64) {
        Some(dt) => dt.format("%m-%d %H:%M").to_string(),
        None => format!("{t_ms:.0}"),
    }
}

fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
