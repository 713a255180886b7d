//! Ready-made sinks.

use detector_spi::{ClassifiedSample, RejectedSample, Result, SampleSink, StepOutcome};
use tracing::{debug, error, warn};

use crate::alerting::AlertBuilder;

/// One-line anomaly report in the demonstrator's console format.
pub fn console_line(classified: &ClassifiedSample) -> String {
    format!(
        "Anomaly detected at X-axis {} & Y-axis {}",
        classified.index(),
        classified.value()
    )
}

/// Logs anomalies and rejected samples through `tracing`.
///
/// Normal samples are logged at debug level only.
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    seen: u64,
    anomalies: u64,
    rejected: u64,
}

impl TracingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Samples classified so far.
    pub fn seen(&self) -> u64 {
        self.seen
    }

    pub fn anomalies(&self) -> u64 {
        self.anomalies
    }

    pub fn rejected(&self) -> u64 {
        self.rejected
    }
}

impl SampleSink for TracingSink {
    fn on_classified(&mut self, classified: &ClassifiedSample) -> Result<()> {
        self.seen += 1;
        if classified.is_anomaly() {
            self.anomalies += 1;
            let alert = AlertBuilder::new(classified.index(), classified.value(), classified.z_score)
                .message(console_line(classified))
                .build();
            warn!(
                index = alert.index,
                value = alert.value,
                z_score = alert.score,
                severity = alert.severity.name(),
                total = self.anomalies,
                "{}",
                alert.message
            );
        } else {
            debug!(
                index = classified.index(),
                value = classified.value(),
                z_score = classified.z_score,
                "normal sample"
            );
        }
        Ok(())
    }

    fn on_rejected(&mut self, rejected: &RejectedSample) -> Result<()> {
        self.rejected += 1;
        error!(
            index = rejected.sample.index,
            value = %rejected.sample.value,
            reason = %rejected.reason,
            "skipped sample"
        );
        Ok(())
    }
}

/// Keeps every outcome in memory, in arrival order.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    outcomes: Vec<StepOutcome>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcomes(&self) -> &[StepOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Classified samples only.
    pub fn classified(&self) -> Vec<ClassifiedSample> {
        self.outcomes
            .iter()
            .filter_map(StepOutcome::classified)
            .copied()
            .collect()
    }

    /// Classified samples flagged as anomalous.
    pub fn anomalies(&self) -> Vec<ClassifiedSample> {
        self.classified()
            .into_iter()
            .filter(ClassifiedSample::is_anomaly)
            .collect()
    }

    pub fn rejected(&self) -> Vec<RejectedSample> {
        self.outcomes
            .iter()
            .filter_map(|o| match o {
                StepOutcome::Rejected(r) => Some(r.clone()),
                StepOutcome::Classified(_) => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.outcomes.clear();
    }
}

impl SampleSink for MemorySink {
    fn on_classified(&mut self, classified: &ClassifiedSample) -> Result<()> {
        self.outcomes.push(StepOutcome::Classified(*classified));
        Ok(())
    }

    fn on_rejected(&mut self, rejected: &RejectedSample) -> Result<()> {
        self.outcomes.push(StepOutcome::Rejected(rejected.clone()));
        Ok(())
    }
}
