// File: crates/stats-core/tests/sampling.rs
// Purpose: Validate even-stride sampling bounds, extremes, and count fidelity.

use stats_core::sample::{evenly_sample, validate_events};

fn minute_events(n: usize) -> Vec<f64> {
    (0..n).map(|i| 1_000_000.0 + i as f64 * 60_000.0).collect()
}

#[test]
fn output_bounded_by_target() {
    let events = minute_events(10_000);
    let sampled = evenly_sample(&events, 300);
    assert_eq!(sampled.len(), 300);
}

#[test]
fn full_fidelity_when_input_fits() {
    let events = minute_events(42);
    let sampled = evenly_sample(&events, 300);
    assert_eq!(sampled.len(), 42);
    for (i, p) in sampled.iter().enumerate() {
        assert_eq!(p.count, (i + 1) as u64);
        assert_eq!(p.created_ms, events[i]);
    }
}

#[test]
fn extremes_preserved() {
    let events = minute_events(7_919);
    let sampled = evenly_sample(&events, 300);
    assert_eq!(sampled.first().unwrap().created_ms, events[0]);
    assert_eq!(
        sampled.last().unwrap().created_ms,
        *events.last().unwrap()
    );
}

#[test]
fn counts_are_true_original_positions() {
    let events = minute_events(5_000);
    let sampled = evenly_sample(&events, 300);
    assert_eq!(sampled.first().unwrap().count, 1);
    assert_eq!(sampled.last().unwrap().count, 5_000);
    for pair in sampled.windows(2) {
        assert!(pair[0].count < pair[1].count, "counts must strictly increase");
    }
    // Each count is the 1-based index of its own timestamp in the input.
    for p in &sampled {
        assert_eq!(events[(p.count - 1) as usize], p.created_ms);
    }
}

#[test]
fn deterministic() {
    let events = minute_events(1_234);
    assert_eq!(evenly_sample(&events, 300), evenly_sample(&events, 300));
}

#[test]
fn empty_input_yields_empty_output() {
    assert!(evenly_sample(&[], 300).is_empty());
}

#[test]
fn degenerate_target_keeps_first_point() {
    let events = minute_events(50);
    let sampled = evenly_sample(&events, 1);
    assert_eq!(sampled.len(), 1);
    assert_eq!(sampled[0].count, 1);
    assert_eq!(sampled[0].created_ms, events[0]);
}

#[test]
fn duplicate_timestamps_tolerated() {
    let events = vec![100.0, 100.0, 100.0, 200.0];
    let sampled = evenly_sample(&events, 300);
    assert_eq!(sampled.len(), 4);
    assert_eq!(sampled[2].count, 3);
}

#[test]
fn non_finite_timestamp_rejected() {
    let err = validate_events("voteTimes", &[100.0, f64::NAN, 300.0]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("voteTimes"), "error should name the series: {msg}");
    assert!(msg.contains("index 1"), "error should name the index: {msg}");
}
