//! Deterministic sources for tests and replays.

use detector_spi::SampleSource;

/// Replays a fixed sequence of values.
#[derive(Debug, Clone)]
pub struct FixedSource {
    values: Vec<f64>,
    position: usize,
    cycle: bool,
}

impl FixedSource {
    /// Replay `values` once.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            position: 0,
            cycle: false,
        }
    }

    /// Replay `values` forever. An empty sequence still ends immediately.
    pub fn cycling(values: impl Into<Vec<f64>>) -> Self {
        Self {
            cycle: true,
            ..Self::new(values)
        }
    }

    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.position)
    }
}

impl SampleSource for FixedSource {
    fn next_value(&mut self) -> Option<f64> {
        if self.cycle && self.position == self.values.len() && !self.values.is_empty() {
            self.position = 0;
        }
        let value = self.values.get(self.position).copied()?;
        self.position += 1;
        Some(value)
    }

    fn describe(&self) -> String {
        let mode = if self.cycle { "cycling" } else { "once" };
        format!("fixed: {} values ({mode})", self.values.len())
    }
}

/// Adapts any iterator of values into a [`SampleSource`].
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iter: I,
    label: String,
}

impl<I> IterSource<I>
where
    I: Iterator<Item = f64> + Send,
{
    pub fn new(iter: I) -> Self {
        Self {
            iter,
            label: String::from("iterator"),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

impl<I> SampleSource for IterSource<I>
where
    I: Iterator<Item = f64> + Send,
{
    fn next_value(&mut self) -> Option<f64> {
        self.iter.next()
    }

    fn describe(&self) -> String {
        self.label.clone()
    }
}
