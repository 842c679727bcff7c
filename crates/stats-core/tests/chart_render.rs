// File: crates/stats-core/tests/chart_render.rs
// Purpose: End-to-end chart rendering: command structure, clipping, zoom purity, error paths.

use stats_core::render::DrawCommand;
use stats_core::series::build_series;
use stats_core::{ChartLayout, Palette, RecordingSink, StatsChart, StatsError};

const NOW_MS: f64 = 10_000_000.0;

fn minute_votes(n: usize) -> Vec<f64> {
    (0..n).map(|i| 5_000.0 + i as f64 * 60_000.0).collect()
}

fn chart_with(series_events: &[(&str, Vec<f64>)]) -> StatsChart {
    let mut chart = StatsChart::new(ChartLayout::default(), Palette::conversation_default());
    let series = series_events
        .iter()
        .map(|(name, events)| build_series(name, events, 300, NOW_MS).unwrap())
        .collect();
    chart.set_series(series);
    chart
}

fn polyline_names(sink: &RecordingSink) -> Vec<&str> {
    sink.commands
        .iter()
        .filter_map(|c| match c {
            DrawCommand::Polyline { series, .. } => Some(series.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_series_renders_no_path_and_contributes_no_bounds() {
    let mut chart = chart_with(&[
        ("voteTimes", minute_votes(60)),
        ("commentTimes", Vec::new()),
    ]);
    let mut sink = RecordingSink::new();
    chart.render(&mut sink).unwrap();

    assert_eq!(polyline_names(&sink), vec!["voteTimes"]);

    // Domain comes from the votes series alone: first vote through "now"
    // (the synthetic trailing point).
    let domain = chart.domain().unwrap();
    assert_eq!(domain.min_ms, 5_000.0);
    assert_eq!(domain.max_ms, NOW_MS);
}

#[test]
fn series_paths_are_clipped_to_the_plot_rect() {
    let mut chart = chart_with(&[("voteTimes", minute_votes(10))]);
    let mut sink = RecordingSink::new();
    chart.render(&mut sink).unwrap();

    let clip_start = sink
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::ClipRect(_)))
        .expect("clip begins");
    let clip_end = sink
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::ClipEnd))
        .expect("clip ends");
    let path = sink
        .commands
        .iter()
        .position(|c| matches!(c, DrawCommand::Polyline { .. }))
        .expect("one path drawn");
    assert!(clip_start < path && path < clip_end);

    let DrawCommand::ClipRect(rect) = &sink.commands[clip_start] else {
        unreachable!();
    };
    assert_eq!(*rect, chart.layout().plot_rect());
}

#[test]
fn zoom_redraw_leaves_series_points_untouched() {
    let mut chart = chart_with(&[
        ("voteTimes", minute_votes(120)),
        ("firstVoteTimes", minute_votes(30)),
    ]);
    let mut sink = RecordingSink::new();
    chart.render(&mut sink).unwrap();

    let before: Vec<Vec<_>> = chart.series().iter().map(|s| s.points.clone()).collect();
    let view_before = chart.view().unwrap();

    chart.zoom(0.4, 200.0, &mut sink).unwrap();
    chart.pan(25.0, &mut sink).unwrap();

    let after: Vec<Vec<_>> = chart.series().iter().map(|s| s.points.clone()).collect();
    assert_eq!(before, after, "interaction must never resample");
    assert_ne!(chart.view().unwrap(), view_before, "view should have moved");
    assert_eq!(sink.submissions, 3);
}

#[test]
fn zoom_narrows_only_the_time_window() {
    let mut chart = chart_with(&[("voteTimes", minute_votes(120))]);
    let mut sink = RecordingSink::new();
    chart.render(&mut sink).unwrap();

    let full = chart.view().unwrap();
    chart.zoom(0.5, 300.0, &mut sink).unwrap();
    let zoomed = chart.view().unwrap();
    assert!(zoomed.span_ms() < full.span_ms());
    // The data domain is untouched; only the view narrows.
    assert_eq!(chart.domain().unwrap().min_ms, 5_000.0);
}

#[test]
fn unknown_series_name_fails_the_render() {
    let mut chart = chart_with(&[("mysteryTimes", minute_votes(5))]);
    let mut sink = RecordingSink::new();
    let err = chart.render(&mut sink).unwrap_err();
    assert!(matches!(err, StatsError::UnknownSeries(name) if name == "mysteryTimes"));
    assert_eq!(sink.submissions, 0, "nothing may reach the sink");
}

#[test]
fn all_empty_selection_is_nothing_to_render() {
    let mut chart = chart_with(&[("voteTimes", Vec::new()), ("commentTimes", Vec::new())]);
    let mut sink = RecordingSink::new();
    assert!(matches!(
        chart.render(&mut sink),
        Err(StatsError::NothingToRender)
    ));
    assert_eq!(sink.submissions, 0);
}

#[test]
fn interaction_before_render_is_rejected() {
    let mut chart = chart_with(&[("voteTimes", minute_votes(10))]);
    let mut sink = RecordingSink::new();
    assert!(matches!(
        chart.redraw(&mut sink),
        Err(StatsError::NotRendered)
    ));
    assert!(matches!(
        chart.pan(10.0, &mut sink),
        Err(StatsError::NotRendered)
    ));
}
