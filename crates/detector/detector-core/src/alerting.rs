//! Alerting system implementation.

use std::time::{SystemTime, UNIX_EPOCH};

use detector_spi::{Alert, AlertSeverity, ClassifiedSample};

/// Absolute z-score above which an alert is critical.
pub const CRITICAL_Z_SCORE: f64 = 5.0;

/// Severity for a z-score.
pub fn severity_for(score: f64) -> AlertSeverity {
    if score.abs() > CRITICAL_Z_SCORE {
        AlertSeverity::Critical
    } else {
        AlertSeverity::Warning
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn default_message(index: u64, value: f64, score: f64) -> String {
    format!(
        "Anomaly detected at index {}: value={:.2}, z-score={:.2}",
        index, value, score
    )
}

/// Create an alert for a classified sample.
pub fn create_alert(classified: &ClassifiedSample) -> Alert {
    AlertBuilder::new(classified.index(), classified.value(), classified.z_score).build()
}

/// Alert builder for alerts with a custom message.
///
/// Severity always follows [`severity_for`].
#[derive(Debug, Clone)]
pub struct AlertBuilder {
    index: u64,
    value: f64,
    score: f64,
    message: Option<String>,
}

impl AlertBuilder {
    /// Create a new alert builder.
    pub fn new(index: u64, value: f64, score: f64) -> Self {
        Self {
            index,
            value,
            score,
            message: None,
        }
    }

    /// Set custom message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Build the alert.
    pub fn build(self) -> Alert {
        let severity = severity_for(self.score);
        let message = self
            .message
            .unwrap_or_else(|| default_message(self.index, self.value, self.score));

        Alert {
            index: self.index,
            timestamp: now_secs(),
            value: self.value,
            score: self.score,
            severity,
            message,
        }
    }
}
