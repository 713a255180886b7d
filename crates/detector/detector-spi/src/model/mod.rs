//! Data models for streaming anomaly detection.
//!
//! This module contains data structures passed between sources, the
//! detector and sinks.

mod alert;
mod classification;
mod sample;
mod window_stats;

pub use alert::{Alert, AlertSeverity};
pub use classification::{Classification, ClassifiedSample, RejectedSample, StepOutcome};
pub use sample::Sample;
pub use window_stats::WindowStats;
