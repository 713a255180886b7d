//! Sliding-window z-score detector.

use detector_api::DetectorConfig;
use detector_spi::{
    Classification, ClassifiedSample, DetectorError, Result, Sample, StreamDetector, WindowStats,
};
use tracing::{debug, trace};

use crate::window::SlidingWindow;

/// Online z-score anomaly detector over a sliding window.
///
/// Each accepted sample is appended to the window first, then scored
/// against the mean and population standard deviation of the window
/// contents, the new sample included. Anomalies are not filtered out of
/// the window, so a spike raises the spread it is measured against.
///
/// While the window is filling up the same formula runs over the partial
/// window; early scores are correspondingly noisy.
///
/// @algorithm SlidingZScore
/// @complexity O(N) per observation, O(N) memory
/// @thread_safe false
#[derive(Debug, Clone)]
pub struct ZScoreDetector {
    config: DetectorConfig,
    window: SlidingWindow,
    observed: u64,
}

impl ZScoreDetector {
    /// Create a detector with the given window size and z-score threshold.
    ///
    /// # Errors
    ///
    /// [`DetectorError::InvalidConfiguration`] if `window_size < 2` or the
    /// threshold is not a positive finite number.
    pub fn new(window_size: usize, z_threshold: f64) -> Result<Self> {
        Self::from_config(DetectorConfig::new(window_size, z_threshold))
    }

    /// Create from configuration.
    pub fn from_config(config: DetectorConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            window_size = config.window_size,
            z_threshold = config.z_threshold,
            "created z-score detector"
        );
        Ok(Self {
            window: SlidingWindow::new(config.window_size),
            config,
            observed: 0,
        })
    }

    /// Observe a bare value, indexing it by the number of samples accepted so far.
    pub fn observe_value(&mut self, value: f64) -> Result<ClassifiedSample> {
        self.observe(Sample::new(self.observed, value))
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn window_size(&self) -> usize {
        self.config.window_size
    }

    /// Read-only view of the window.
    pub fn window(&self) -> &SlidingWindow {
        &self.window
    }

    /// Whether fewer than `window_size` samples have been seen.
    pub fn is_warming_up(&self) -> bool {
        !self.window.is_full()
    }
}

impl Default for ZScoreDetector {
    fn default() -> Self {
        let config = DetectorConfig::default();
        Self {
            window: SlidingWindow::new(config.window_size),
            config,
            observed: 0,
        }
    }
}

impl StreamDetector for ZScoreDetector {
    fn observe(&mut self, sample: Sample) -> Result<ClassifiedSample> {
        if !sample.is_finite() {
            return Err(DetectorError::InvalidSample {
                index: sample.index,
                value: sample.value,
            });
        }

        if let Some(evicted) = self.window.push(sample.value) {
            trace!(index = sample.index, evicted, "window full, evicted oldest");
        }
        self.observed += 1;

        let stats = self.window.stats();
        let z_score = stats.z_score(sample.value);
        let classification = Classification::from_z_score(z_score, self.config.z_threshold);

        trace!(
            index = sample.index,
            value = sample.value,
            z_score,
            mean = stats.mean,
            std_dev = stats.std_dev,
            classification = classification.name(),
            "observed sample"
        );

        Ok(ClassifiedSample {
            sample,
            z_score,
            classification,
            stats,
        })
    }

    fn peek_stats(&self) -> WindowStats {
        self.window.stats()
    }

    fn threshold(&self) -> f64 {
        self.config.z_threshold
    }

    fn observed(&self) -> u64 {
        self.observed
    }
}
