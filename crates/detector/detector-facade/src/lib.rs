//! Detector Facade
//!
//! High-level, simplified API for streaming anomaly detection.
//!
//! This facade provides a single entry point:
//! - contracts (`SampleSource`, `StreamDetector`, `SampleSink`) and models from SPI
//! - `DetectorConfig` from API
//! - `ZScoreDetector`, `StreamPipeline`, sinks and alerting from Core

// Re-export everything from SPI
pub use detector_spi::*;

// Re-export everything from API
pub use detector_api::{
    DetectorConfig, DEFAULT_WINDOW_SIZE, DEFAULT_Z_THRESHOLD, MIN_WINDOW_SIZE,
};

// Re-export everything from Core
pub use detector_core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{DetectorConfig, StreamPipeline, ZScoreDetector};
    pub use crate::{SampleSink, SampleSource, StreamDetector};
    pub use crate::{Classification, ClassifiedSample, Sample, WindowStats};
    pub use crate::{DetectorError, Result};
}
