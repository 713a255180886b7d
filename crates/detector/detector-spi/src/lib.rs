//! Detector Service Provider Interface
//!
//! Defines the contracts, data models and errors shared by the sample
//! sources, the sliding-window detector and the sinks that consume its
//! output.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{SampleSink, SampleSource, StreamDetector};
pub use error::{DetectorError, Result};
pub use model::{
    Alert, AlertSeverity, Classification, ClassifiedSample, RejectedSample, Sample, StepOutcome,
    WindowStats,
};
