//! Plain-text report

use pumpwatch_detector::DetectionSummary;
use std::fmt::Write;

const TITLE: &str = "Crypto Manipulation Detection Results";

/// Header plus one block per flagged day
pub fn render_findings(summary: &DetectionSummary) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(40));
    let _ = writeln!(
        out,
        "Found {} suspicious trading days:",
        summary.suspicious_days()
    );
    let _ = writeln!(out);

    for day in &summary.flagged {
        let _ = writeln!(out, "Date: {}", day.date().format("%Y-%m-%d"));
        let _ = writeln!(
            out,
            "  Price change: {:.1}%",
            day.price_change_pct.unwrap_or(f64::NAN)
        );
        let _ = writeln!(
            out,
            "  Volume spike: {:.1}x normal",
            day.volume_spike.unwrap_or(f64::NAN)
        );
        let _ = writeln!(out);
    }

    out
}

/// Closing totals
pub fn render_summary(summary: &DetectionSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Summary:");
    let _ = writeln!(out, "Total days analyzed: {}", summary.total_days);
    let _ = writeln!(out, "Suspicious days detected: {}", summary.suspicious_days());
    let _ = writeln!(
        out,
        "Percentage of suspicious activity: {:.1}%",
        summary.suspicious_pct()
    );
    out
}
