//! # detector
//!
//! Streaming anomaly detection for one-dimensional sample streams.
//! Provides the sliding-window z-score detector, the driving pipeline,
//! sinks and alerting.

pub use detector_facade::*;
