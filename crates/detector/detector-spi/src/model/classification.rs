//! Classification results.

use serde::{Deserialize, Serialize};

use super::{Sample, WindowStats};

/// Outcome of scoring one sample against its window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Classification {
    #[default]
    Normal,
    Anomaly,
}

impl Classification {
    /// Classify a z-score against a threshold: anomalous iff `|z| > threshold`.
    pub fn from_z_score(z_score: f64, threshold: f64) -> Self {
        if z_score.abs() > threshold {
            Classification::Anomaly
        } else {
            Classification::Normal
        }
    }

    pub fn is_anomaly(self) -> bool {
        self == Classification::Anomaly
    }

    pub fn name(self) -> &'static str {
        match self {
            Classification::Normal => "normal",
            Classification::Anomaly => "anomaly",
        }
    }
}

/// A sample together with its z-score and classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSample {
    pub sample: Sample,
    pub z_score: f64,
    pub classification: Classification,
    /// Window statistics the sample was scored against (after insertion).
    pub stats: WindowStats,
}

impl ClassifiedSample {
    pub fn index(&self) -> u64 {
        self.sample.index
    }

    pub fn value(&self) -> f64 {
        self.sample.value
    }

    pub fn is_anomaly(&self) -> bool {
        self.classification.is_anomaly()
    }
}

/// A sample the detector refused; the window was left untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedSample {
    pub sample: Sample,
    pub reason: String,
}

/// What happened to one sample pulled through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    Classified(ClassifiedSample),
    Rejected(RejectedSample),
}

impl StepOutcome {
    pub fn index(&self) -> u64 {
        match self {
            StepOutcome::Classified(c) => c.sample.index,
            StepOutcome::Rejected(r) => r.sample.index,
        }
    }

    pub fn classified(&self) -> Option<&ClassifiedSample> {
        match self {
            StepOutcome::Classified(c) => Some(c),
            StepOutcome::Rejected(_) => None,
        }
    }

    pub fn is_anomaly(&self) -> bool {
        self.classified().is_some_and(ClassifiedSample::is_anomaly)
    }
}
