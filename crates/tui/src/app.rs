//! Render state for the live stream view.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use detector::{create_alert, Alert, ClassifiedSample, RejectedSample, Result, SampleSink};

use crate::config::DisplayConfig;

/// Fastest allowed tick.
pub const MIN_TICK: Duration = Duration::from_millis(1);
/// Slowest allowed tick.
pub const MAX_TICK: Duration = Duration::from_millis(2_000);

/// Everything the UI draws, owned by the sink side of the pipeline.
///
/// The pipeline pushes one sample at a time through [`SampleSink`]; drawing
/// only reads from here.
pub struct App {
    /// Whether the app should quit
    pub should_quit: bool,
    /// Whether sample production is on hold
    pub paused: bool,
    /// Source has no more samples
    pub finished: bool,
    /// Time between two pipeline steps
    pub tick_rate: Duration,
    /// Status message with expiry
    pub status_message: Option<(String, Instant)>,
    /// One-line description of the detector settings
    pub detector_label: String,
    /// One-line description of the sample source
    pub source_label: String,
    /// Samples processed, rejected ones included
    pub processed: u64,
    /// Anomalies flagged since start
    pub anomaly_count: u64,
    /// Samples skipped as invalid
    pub rejected: u64,
    /// Most recent classified sample
    pub last: Option<ClassifiedSample>,
    step_requested: bool,
    history_limit: usize,
    alert_limit: usize,
    points: VecDeque<(f64, f64)>,
    anomalies: VecDeque<(f64, f64)>,
    alerts: VecDeque<Alert>,
}

impl App {
    pub fn new(
        display: &DisplayConfig,
        detector_label: impl Into<String>,
        source_label: impl Into<String>,
    ) -> Self {
        Self {
            should_quit: false,
            paused: false,
            finished: false,
            tick_rate: display.tick().clamp(MIN_TICK, MAX_TICK),
            status_message: None,
            detector_label: detector_label.into(),
            source_label: source_label.into(),
            processed: 0,
            anomaly_count: 0,
            rejected: 0,
            last: None,
            step_requested: false,
            history_limit: display.history.max(2),
            alert_limit: display.alert_rows.max(1),
            points: VecDeque::with_capacity(display.history),
            anomalies: VecDeque::new(),
            alerts: VecDeque::new(),
        }
    }

    /// Set a status message that will be displayed temporarily.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Clear expired status messages (older than 5 seconds).
    pub fn clear_expired_status(&mut self) {
        if let Some((_, instant)) = &self.status_message {
            if instant.elapsed().as_secs() > 5 {
                self.status_message = None;
            }
        }
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.set_status(if self.paused { "Paused" } else { "Resumed" });
    }

    /// Ask for exactly one step while paused.
    pub fn request_step(&mut self) {
        if self.paused {
            self.step_requested = true;
        } else {
            self.set_status("Pause first to step one sample at a time");
        }
    }

    /// Halve the tick.
    pub fn speed_up(&mut self) {
        self.tick_rate = (self.tick_rate / 2).max(MIN_TICK);
        self.set_status(format!("Tick: {} ms", self.tick_rate.as_millis()));
    }

    /// Double the tick.
    pub fn slow_down(&mut self) {
        self.tick_rate = (self.tick_rate * 2).min(MAX_TICK);
        self.set_status(format!("Tick: {} ms", self.tick_rate.as_millis()));
    }

    /// Whether the driving loop should pull the next sample on this tick.
    ///
    /// Consumes a pending single-step request.
    pub fn should_advance(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if !self.paused {
            return true;
        }
        std::mem::take(&mut self.step_requested)
    }

    pub fn mark_finished(&mut self) {
        if !self.finished {
            self.finished = true;
            self.set_status(format!(
                "Stream ended after {} samples ({} anomalies)",
                self.processed, self.anomaly_count
            ));
        }
    }

    /// Visible `(index, value)` points, oldest first.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.points.iter().copied()
    }

    /// Visible anomalous `(index, value)` points, oldest first.
    pub fn anomaly_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.anomalies.iter().copied()
    }

    pub fn visible_len(&self) -> usize {
        self.points.len()
    }

    /// Recent alerts, newest first.
    pub fn recent_alerts(&self) -> impl Iterator<Item = &Alert> + '_ {
        self.alerts.iter().rev()
    }

    fn trim_history(&mut self) {
        while self.points.len() > self.history_limit {
            self.points.pop_front();
        }
        if let Some(&(first_x, _)) = self.points.front() {
            while self.anomalies.front().is_some_and(|&(x, _)| x < first_x) {
                self.anomalies.pop_front();
            }
        }
    }
}

impl SampleSink for App {
    fn on_classified(&mut self, classified: &ClassifiedSample) -> Result<()> {
        let point = (classified.index() as f64, classified.value());
        self.processed += 1;
        self.points.push_back(point);

        if classified.is_anomaly() {
            self.anomaly_count += 1;
            self.anomalies.push_back(point);
            self.alerts.push_back(create_alert(classified));
            while self.alerts.len() > self.alert_limit {
                self.alerts.pop_front();
            }
        }

        self.trim_history();
        self.last = Some(*classified);
        Ok(())
    }

    fn on_rejected(&mut self, rejected: &RejectedSample) -> Result<()> {
        self.processed += 1;
        self.rejected += 1;
        self.set_status(format!("Skipped sample {}: {}", rejected.sample.index, rejected.reason));
        Ok(())
    }
}
