//! Detector Core
//!
//! Implementations for streaming anomaly detection:
//!
//! - [`SlidingWindow`]: bounded FIFO of recent sample values
//! - [`ZScoreDetector`]: sliding-window z-score classifier
//! - [`StreamPipeline`]: source -> detector -> sink driving loop
//! - [`TracingSink`], [`MemorySink`]: ready-made sinks
//! - alert creation for anomalous samples

mod alerting;
mod pipeline;
mod sinks;
mod window;
mod zscore;

pub use alerting::*;
pub use pipeline::*;
pub use sinks::*;
pub use window::*;
pub use zscore::*;
