//! Pipeline Integration Test
//!
//! Runs the whole chain (generator, detector, report) with:
//! - The default seeded configuration
//! - A noise-free series where every flag can be worked out by hand

use chrono::NaiveDate;
use pumpwatch_core::Record;
use pumpwatch_report::{render_findings, render_panels, render_summary, to_json};
use pumpwatch_runner::{Pipeline, RunConfig, RunError};

/// Default episodes on a walk with no noise: flat price 100, flat volume 1000
fn noise_free_config() -> RunConfig {
    RunConfig::from_json(
        r#"{
            "series": { "price_step_std": 0.0, "volume_std": 0.0 }
        }"#,
    )
    .unwrap()
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, month, day).unwrap()
}

#[test]
fn test_default_run_flags_inside_episodes() {
    let _ = env_logger::try_init();
    let pipeline = Pipeline::new().unwrap();
    let output = pipeline.run().unwrap();
    let episodes = &pipeline.config().series.episodes;

    let flagged_indices: Vec<usize> = output
        .annotated
        .iter()
        .enumerate()
        .filter(|(_, r)| r.suspicious)
        .map(|(i, _)| i)
        .collect();

    assert!(
        flagged_indices
            .iter()
            .any(|&i| episodes.iter().any(|e| e.contains(i))),
        "expected a flag inside a planted episode, got {flagged_indices:?}"
    );
}

#[test]
fn test_default_run_is_reproducible() {
    let first = Pipeline::new().unwrap().run().unwrap();
    let second = Pipeline::new().unwrap().run().unwrap();
    assert_eq!(first.annotated, second.annotated);
    assert_eq!(first.summary, second.summary);
}

#[test]
fn test_noise_free_run_flags_expected_days() {
    let output = Pipeline::with_config(noise_free_config())
        .unwrap()
        .run()
        .unwrap();

    let flagged: Vec<NaiveDate> = output.summary.flagged.iter().map(|r| r.date()).collect();
    // day 30 moves exactly 5% and day 34 spikes exactly 2x: neither is strictly above
    assert_eq!(
        flagged,
        vec![date(5, 2), date(5, 3), date(6, 10), date(6, 11)]
    );
    assert_eq!(output.summary.total_days, 100);
}

#[test]
fn test_noise_free_report_text() {
    let output = Pipeline::with_config(noise_free_config())
        .unwrap()
        .run()
        .unwrap();

    let findings = render_findings(&output.summary);
    assert!(findings.starts_with(
        "Crypto Manipulation Detection Results\n\
         ========================================\n\
         Found 4 suspicious trading days:\n\
         \n\
         Date: 2025-05-02\n\
         \x20 Price change: 9.5%\n\
         \x20 Volume spike: 2.5x normal\n"
    ));
    assert!(findings.contains("Date: 2025-06-10\n  Price change: 8.0%\n  Volume spike: 2.3x normal\n"));

    let summary = render_summary(&output.summary);
    assert!(summary.contains("Total days analyzed: 100\n"));
    assert!(summary.contains("Suspicious days detected: 4\n"));
    assert!(summary.contains("Percentage of suspicious activity: 4.0%\n"));
}

#[test]
fn test_charts_and_export() {
    let config = noise_free_config();
    let pipeline = Pipeline::with_config(config.clone()).unwrap();
    let output = pipeline.run().unwrap();

    let charts = render_panels(&output.annotated, &config.chart);
    assert!(charts.contains("Cryptocurrency Price with Manipulation Detection"));
    assert!(charts.contains("Trading Volume"));
    // four flagged days in each panel, plus one legend glyph per panel
    assert_eq!(charts.matches('O').count(), 10);

    let json = to_json(&output.annotated).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value.as_array().unwrap().len(), 100);
    assert_eq!(value[31]["suspicious"], true);
}

#[test]
fn test_run_on_external_source() {
    let pipeline = Pipeline::new().unwrap();
    let records = vec![
        Record::new(date(4, 2), 100.0, 1000.0),
        Record::new(date(4, 1), 100.0, 1000.0),
    ];
    let err = pipeline.run_source(&records).unwrap_err();
    assert!(matches!(err, RunError::Series(_)));
}

#[test]
fn test_bad_episode_config_fails_fast() {
    let config = RunConfig::from_json(r#"{ "series": { "days": 50 } }"#).unwrap();
    assert!(matches!(
        Pipeline::with_config(config),
        Err(RunError::Generator(_))
    ));
}
