//! Detector error types.

use thiserror::Error;

/// Streaming anomaly detection errors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DetectorError {
    /// A sample that cannot take part in window statistics (NaN or infinite).
    #[error("Invalid sample at index {index}: {value} is not a finite number")]
    InvalidSample { index: u64, value: f64 },

    /// A configuration value outside its allowed range.
    #[error("Invalid configuration: {name} - {reason}")]
    InvalidConfiguration { name: String, reason: String },

    /// A sink refused a classified or rejected sample.
    #[error("Sink error: {0}")]
    Sink(String),
}

impl DetectorError {
    /// Shorthand for an [`DetectorError::InvalidConfiguration`].
    pub fn config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error only affects the sample it was raised for.
    ///
    /// Per-sample errors are reported to the sink and the stream carries on;
    /// everything else stops the driving loop.
    pub fn is_per_sample(&self) -> bool {
        matches!(self, Self::InvalidSample { .. })
    }
}

/// Result type for detector operations.
pub type Result<T> = std::result::Result<T, DetectorError>;
