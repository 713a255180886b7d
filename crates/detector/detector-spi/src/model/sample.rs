//! Sample type.

use serde::{Deserialize, Serialize};

/// A single observation tagged with its position in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Monotonic step index assigned by the producer.
    pub index: u64,
    /// Observed value.
    pub value: f64,
}

impl Sample {
    pub fn new(index: u64, value: f64) -> Self {
        Self { index, value }
    }

    /// Whether the value can take part in window statistics.
    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}
