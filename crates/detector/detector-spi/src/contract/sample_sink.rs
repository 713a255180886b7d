//! Sample sink trait definition.

use crate::error::Result;
use crate::model::{ClassifiedSample, RejectedSample};

/// Consumer of detector output.
///
/// Each pulled sample reaches the sink exactly once, either classified or
/// rejected, before the next one is produced.
pub trait SampleSink {
    /// Accept a classified sample.
    fn on_classified(&mut self, classified: &ClassifiedSample) -> Result<()>;

    /// Accept a sample the detector refused. Ignored by default.
    fn on_rejected(&mut self, _rejected: &RejectedSample) -> Result<()> {
        Ok(())
    }
}

impl<T: SampleSink + ?Sized> SampleSink for &mut T {
    fn on_classified(&mut self, classified: &ClassifiedSample) -> Result<()> {
        (**self).on_classified(classified)
    }

    fn on_rejected(&mut self, rejected: &RejectedSample) -> Result<()> {
        (**self).on_rejected(rejected)
    }
}

impl<A: SampleSink, B: SampleSink> SampleSink for (A, B) {
    fn on_classified(&mut self, classified: &ClassifiedSample) -> Result<()> {
        self.0.on_classified(classified)?;
        self.1.on_classified(classified)
    }

    fn on_rejected(&mut self, rejected: &RejectedSample) -> Result<()> {
        self.0.on_rejected(rejected)?;
        self.1.on_rejected(rejected)
    }
}
