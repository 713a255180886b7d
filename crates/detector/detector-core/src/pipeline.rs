//! Source -> detector -> sink driving loop.

use std::thread;
use std::time::Duration;

use detector_spi::{
    RejectedSample, Result, Sample, SampleSink, SampleSource, StepOutcome, StreamDetector,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Counters for a pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RunSummary {
    /// Samples pulled from the source, rejected ones included.
    pub processed: u64,
    pub anomalies: u64,
    pub rejected: u64,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &StepOutcome) {
        self.processed += 1;
        match outcome {
            StepOutcome::Classified(c) if c.is_anomaly() => self.anomalies += 1,
            StepOutcome::Classified(_) => {}
            StepOutcome::Rejected(_) => self.rejected += 1,
        }
    }
}

/// Pulls samples from a source, classifies them and hands them to a sink.
///
/// One call to [`StreamPipeline::step`] is one logical tick. The pipeline
/// never sleeps on its own unless driven through
/// [`StreamPipeline::run_paced`].
pub struct StreamPipeline<S, D> {
    source: S,
    detector: D,
    next_index: u64,
    exhausted: bool,
}

impl<S: SampleSource, D: StreamDetector> StreamPipeline<S, D> {
    pub fn new(source: S, detector: D) -> Self {
        Self {
            source,
            detector,
            next_index: 0,
            exhausted: false,
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Index the next pulled sample will get.
    pub fn next_index(&self) -> u64 {
        self.next_index
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn into_parts(self) -> (S, D) {
        (self.source, self.detector)
    }

    /// Process one sample.
    ///
    /// Returns `Ok(None)` once the source is exhausted. A sample the
    /// detector rejects is passed to [`SampleSink::on_rejected`] and the
    /// stream carries on; sink errors are returned to the caller.
    pub fn step<K: SampleSink + ?Sized>(&mut self, sink: &mut K) -> Result<Option<StepOutcome>> {
        if self.exhausted {
            return Ok(None);
        }

        let Some(value) = self.source.next_value() else {
            self.exhausted = true;
            debug!(pulled = self.next_index, "source exhausted");
            return Ok(None);
        };

        let sample = Sample::new(self.next_index, value);
        self.next_index += 1;

        match self.detector.observe(sample) {
            Ok(classified) => {
                sink.on_classified(&classified)?;
                Ok(Some(StepOutcome::Classified(classified)))
            }
            Err(err) if err.is_per_sample() => {
                let rejected = RejectedSample {
                    sample,
                    reason: err.to_string(),
                };
                sink.on_rejected(&rejected)?;
                Ok(Some(StepOutcome::Rejected(rejected)))
            }
            Err(err) => Err(err),
        }
    }

    /// Step until the source is exhausted or `limit` samples were processed.
    pub fn run<K: SampleSink + ?Sized>(
        &mut self,
        sink: &mut K,
        limit: Option<usize>,
    ) -> Result<RunSummary> {
        self.run_paced(sink, limit, Duration::ZERO)
    }

    /// Like [`StreamPipeline::run`], sleeping `tick` after every sample.
    pub fn run_paced<K: SampleSink + ?Sized>(
        &mut self,
        sink: &mut K,
        limit: Option<usize>,
        tick: Duration,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        while limit.map_or(true, |l| summary.processed < l as u64) {
            let Some(outcome) = self.step(sink)? else {
                break;
            };
            summary.record(&outcome);
            if !tick.is_zero() {
                thread::sleep(tick);
            }
        }
        info!(
            processed = summary.processed,
            anomalies = summary.anomalies,
            rejected = summary.rejected,
            "pipeline run finished"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MemorySink, ZScoreDetector};
    use detector_spi::{ClassifiedSample, DetectorError};

    struct VecSource(std::vec::IntoIter<f64>);

    impl VecSource {
        fn new(values: Vec<f64>) -> Self {
            Self(values.into_iter())
        }
    }

    impl SampleSource for VecSource {
        fn next_value(&mut self) -> Option<f64> {
            self.0.next()
        }
    }

    struct FailingSink;

    impl SampleSink for FailingSink {
        fn on_classified(&mut self, _classified: &ClassifiedSample) -> Result<()> {
            Err(DetectorError::Sink("closed".into()))
        }
    }

    #[test]
    fn test_step_tags_indices_and_stops() {
        let mut pipeline =
            StreamPipeline::new(VecSource::new(vec![1.0, 2.0]), ZScoreDetector::default());
        let mut sink = MemorySink::new();

        assert_eq!(pipeline.step(&mut sink).unwrap().unwrap().index(), 0);
        assert_eq!(pipeline.step(&mut sink).unwrap().unwrap().index(), 1);
        assert!(pipeline.step(&mut sink).unwrap().is_none());
        assert!(pipeline.is_exhausted());
        assert!(pipeline.step(&mut sink).unwrap().is_none());
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_rejected_sample_does_not_stop_stream() {
        let mut pipeline = StreamPipeline::new(
            VecSource::new(vec![1.0, f64::NAN, 3.0]),
            ZScoreDetector::new(5, 3.0).unwrap(),
        );
        let mut sink = MemorySink::new();
        let summary = pipeline.run(&mut sink, None).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                processed: 3,
                anomalies: 0,
                rejected: 1
            }
        );
        assert_eq!(sink.rejected()[0].sample.index, 1);
        assert_eq!(pipeline.detector().window().to_vec(), vec![1.0, 3.0]);
        // stream indices keep counting across the rejected sample
        assert_eq!(sink.classified()[1].index(), 2);
    }

    #[test]
    fn test_run_respects_limit() {
        let mut pipeline = StreamPipeline::new(
            VecSource::new((0..100).map(f64::from).collect()),
            ZScoreDetector::default(),
        );
        let mut sink = MemorySink::new();
        let summary = pipeline.run(&mut sink, Some(10)).unwrap();
        assert_eq!(summary.processed, 10);
        assert_eq!(pipeline.next_index(), 10);
        assert!(!pipeline.is_exhausted());
    }

    #[test]
    fn test_sink_error_propagates() {
        let mut pipeline =
            StreamPipeline::new(VecSource::new(vec![1.0]), ZScoreDetector::default());
        let err = pipeline.step(&mut FailingSink).unwrap_err();
        assert_eq!(err, DetectorError::Sink("closed".into()));
    }

    #[test]
    fn test_run_paced_sleeps_between_samples() {
        let mut pipeline = StreamPipeline::new(
            VecSource::new(vec![1.0, 2.0, 3.0]),
            ZScoreDetector::default(),
        );
        let started = std::time::Instant::now();
        let summary = pipeline
            .run_paced(&mut MemorySink::new(), None, Duration::from_millis(5))
            .unwrap();
        assert_eq!(summary.processed, 3);
        assert!(started.elapsed() >= Duration::from_millis(15));
    }
}
