//! Contract definitions for streaming anomaly detection.
//!
//! This module contains trait definitions that providers must implement.

mod sample_sink;
mod sample_source;
mod stream_detector;

pub use sample_sink::SampleSink;
pub use sample_source::SampleSource;
pub use stream_detector::StreamDetector;
