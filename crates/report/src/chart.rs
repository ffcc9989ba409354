//! Terminal charts
//!
//! Draws a series on a fixed-height character grid:
//!
//! ```text
//! Cryptocurrency Price with Manipulation Detection
//!     143.12 |                              O
//!            |                            *  *
//!            |  **    *                 *      ***
//!      96.40 |**  ****  ******************
//!            +------------------------------------
//!             2025-04-01                2025-07-09
//! ```
//!
//! When the series is wider than the chart, each column shows the last
//! value of its bucket and is marked if any day in the bucket is flagged.

use chrono::NaiveDate;
use pumpwatch_core::AnnotatedRecord;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const POINT: char = '*';
const MARK: char = 'O';
const LABEL_WIDTH: usize = 10;

/// Chart layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Whether the runner draws charts at all
    pub enabled: bool,
    /// Grid rows per panel
    pub height: usize,
    /// Grid columns; `None` uses one column per record
    pub width: Option<usize>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            height: 12,
            width: None,
        }
    }
}

/// One chart panel
#[derive(Debug, Clone)]
pub struct TextChart {
    pub title: String,
    pub y_label: String,
    pub x_label: Option<String>,
    /// Legend entry for the plotted series
    pub series_label: String,
    pub height: usize,
    pub width: Option<usize>,
}

impl TextChart {
    pub fn new(title: &str, y_label: &str, series_label: &str, config: &ChartConfig) -> Self {
        Self {
            title: title.to_string(),
            y_label: y_label.to_string(),
            x_label: None,
            series_label: series_label.to_string(),
            height: config.height.max(2),
            width: config.width,
        }
    }

    pub fn with_x_label(mut self, x_label: &str) -> Self {
        self.x_label = Some(x_label.to_string());
        self
    }

    /// Render `values` against `dates`, drawing `marks` with the highlight glyph.
    ///
    /// The three slices are aligned by index. Non-finite values leave their
    /// column empty.
    pub fn render(&self, dates: &[NaiveDate], values: &[f64], marks: &[bool]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", self.title);
        let _ = writeln!(out, "{}", self.y_label);

        let n = values.len().min(dates.len()).min(marks.len());
        if n == 0 {
            let _ = writeln!(out, "(no data)");
            return out;
        }

        let columns = self.width.unwrap_or(n).clamp(1, n);
        let buckets = bucketize(&values[..n], &marks[..n], columns);

        let finite = buckets.iter().filter_map(|b| b.value);
        let (lo, hi) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if !lo.is_finite() {
            let _ = writeln!(out, "(no finite values)");
            return out;
        }

        let rows = self.height;
        let mut grid = vec![vec![' '; columns]; rows];
        for (col, bucket) in buckets.iter().enumerate() {
            if let Some(value) = bucket.value {
                let row = scale_row(value, lo, hi, rows);
                grid[row][col] = if bucket.marked { MARK } else { POINT };
            }
        }

        for row in (0..rows).rev() {
            let label = if row == rows - 1 {
                format!("{:>width$.2}", hi, width = LABEL_WIDTH)
            } else if row == 0 {
                format!("{:>width$.2}", lo, width = LABEL_WIDTH)
            } else {
                " ".repeat(LABEL_WIDTH)
            };
            let line: String = grid[row].iter().collect();
            let _ = writeln!(out, "{label} |{}", line.trim_end());
        }

        let _ = writeln!(out, "{} +{}", " ".repeat(LABEL_WIDTH), "-".repeat(columns));

        let first = dates[0].format("%Y-%m-%d").to_string();
        let last = dates[n - 1].format("%Y-%m-%d").to_string();
        let gap = (columns + 1).saturating_sub(first.len() + last.len()).max(1);
        let _ = writeln!(
            out,
            "{} {first}{}{last}",
            " ".repeat(LABEL_WIDTH + 1),
            " ".repeat(gap)
        );

        if let Some(x_label) = &self.x_label {
            let _ = writeln!(out, "{}{x_label}", " ".repeat(LABEL_WIDTH + 2));
        }

        let _ = writeln!(
            out,
            "Legend: {POINT} {}   {MARK} Suspicious Activity",
            self.series_label
        );
        out
    }
}

/// Price and volume panels for an annotated series, sharing one time axis
pub fn render_panels(annotated: &[AnnotatedRecord], config: &ChartConfig) -> String {
    let dates: Vec<NaiveDate> = annotated.iter().map(|r| r.date()).collect();
    let prices: Vec<f64> = annotated.iter().map(|r| r.price()).collect();
    let volumes: Vec<f64> = annotated.iter().map(|r| r.volume()).collect();
    let marks: Vec<bool> = annotated.iter().map(|r| r.suspicious).collect();

    let price_chart = TextChart::new(
        "Cryptocurrency Price with Manipulation Detection",
        "Price ($)",
        "Price",
        config,
    );
    let volume_chart =
        TextChart::new("Trading Volume", "Volume", "Volume", config).with_x_label("Date");

    format!(
        "{}\n{}",
        price_chart.render(&dates, &prices, &marks),
        volume_chart.render(&dates, &volumes, &marks)
    )
}

struct Bucket {
    value: Option<f64>,
    marked: bool,
}

fn bucketize(values: &[f64], marks: &[bool], columns: usize) -> Vec<Bucket> {
    let n = values.len();
    (0..columns)
        .map(|col| {
            let start = col * n / columns;
            let end = ((col + 1) * n / columns).max(start + 1);
            let value = values[start..end]
                .iter()
                .rev()
                .copied()
                .find(|v| v.is_finite());
            Bucket {
                value,
                marked: marks[start..end].iter().any(|&m| m),
            }
        })
        .collect()
}

fn scale_row(value: f64, lo: f64, hi: f64, rows: usize) -> usize {
    if hi <= lo {
        return rows / 2;
    }
    let fraction = (value - lo) / (hi - lo);
    ((fraction * (rows - 1) as f64).round() as usize).min(rows - 1)
}
