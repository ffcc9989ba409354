//! Reporting sink for detector runs
//!
//! - **Text report**: flagged days and a closing summary
//! - **Charts**: price and volume panels drawn as text, flagged days marked
//! - **Export**: the annotated series as JSON for external plotting tools

pub mod chart;
pub mod error;
pub mod export;
pub mod text;

pub use chart::{ChartConfig, TextChart, render_panels};
pub use error::{ReportError, Result};
pub use export::{to_json, write_json};
pub use text::{render_findings, render_summary};
