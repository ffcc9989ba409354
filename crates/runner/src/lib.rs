//! Pumpwatch Runner - end-to-end detection run
//!
//! Wires the pipeline stages together:
//!
//! - **Config**: JSON run file with defaults for every field
//! - **Pipeline**: series source → detector → summary
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────┐   records   ┌──────────────────────┐   annotated   ┌────────────┐
//! │  Series Source   │ ──────────► │ Manipulation Detector│ ────────────► │  Reporting │
//! │ (synthetic walk) │             │  (pure, one pass)    │               │ text/chart │
//! └──────────────────┘             └──────────────────────┘               └────────────┘
//! ```

pub mod config;
pub mod error;
pub mod pipeline;

// Re-export main types
pub use config::{ConfigError, RunConfig};
pub use error::{Result, RunError};
pub use pipeline::{Pipeline, PipelineOutput};
