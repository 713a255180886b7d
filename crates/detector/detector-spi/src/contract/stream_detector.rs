//! Streaming detector trait definition.

use crate::error::Result;
use crate::model::{ClassifiedSample, Sample, WindowStats};

/// Online anomaly detector fed one sample at a time.
///
/// Implementations own their history exclusively; `observe` is the single
/// mutation point.
pub trait StreamDetector: Send {
    /// Score and classify `sample`, folding it into the detector state.
    ///
    /// A sample that cannot be scored must be rejected without changing
    /// any state.
    fn observe(&mut self, sample: Sample) -> Result<ClassifiedSample>;

    /// Statistics of the current history without modifying it.
    fn peek_stats(&self) -> WindowStats;

    /// Anomaly threshold in standard deviations.
    fn threshold(&self) -> f64;

    /// Number of samples accepted so far.
    fn observed(&self) -> u64;
}
