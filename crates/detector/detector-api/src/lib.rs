//! Detector API
//!
//! Configuration types for the sliding-window z-score detector.

use serde::{Deserialize, Serialize};

// Re-export SPI types
pub use detector_spi::{
    Alert, AlertSeverity, Classification, ClassifiedSample, DetectorError, Result, Sample,
    WindowStats,
};

/// Default number of samples kept in the sliding window.
pub const DEFAULT_WINDOW_SIZE: usize = 50;

/// Default z-score threshold in standard deviations.
pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

/// Smallest window that can have a non-zero spread.
pub const MIN_WINDOW_SIZE: usize = 2;

// ============================================================================
// Detector Configuration
// ============================================================================

/// Sliding-window z-score detector configuration.
///
/// A larger `window_size` gives a steadier baseline but adapts to drift
/// more slowly. A lower `z_threshold` flags more points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Number of recent samples the baseline is computed over (default: 50).
    pub window_size: usize,
    /// Z-score above which a sample is anomalous (default: 3.0).
    pub z_threshold: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            z_threshold: DEFAULT_Z_THRESHOLD,
        }
    }
}

impl DetectorConfig {
    pub fn new(window_size: usize, z_threshold: f64) -> Self {
        Self {
            window_size,
            z_threshold,
        }
    }

    pub fn with_window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    pub fn with_z_threshold(mut self, z_threshold: f64) -> Self {
        self.z_threshold = z_threshold;
        self
    }

    /// Check every field, failing on the first invalid one.
    pub fn validate(&self) -> Result<()> {
        if self.window_size < MIN_WINDOW_SIZE {
            return Err(DetectorError::config(
                "window_size",
                format!(
                    "must be at least {}, got {}",
                    MIN_WINDOW_SIZE, self.window_size
                ),
            ));
        }
        if !self.z_threshold.is_finite() || self.z_threshold <= 0.0 {
            return Err(DetectorError::config(
                "z_threshold",
                format!("must be a positive finite number, got {}", self.z_threshold),
            ));
        }
        Ok(())
    }

    /// Validate and return `self`.
    pub fn validated(self) -> Result<Self> {
        self.validate()?;
        Ok(self)
    }
}
