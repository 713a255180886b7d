//! Synthetic waveform generator.

use detector_spi::{DetectorError, Result, SampleSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Synthetic stream configuration.
///
/// `value(i) = sin(i * season_frequency) * season_amplitude
///           + i * trend_slope + N(0, noise_std)`
/// plus, with probability `spike_probability`, a spike drawn from
/// `N(spike_mean, spike_std)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub season_amplitude: f64,
    /// Radians per step.
    pub season_frequency: f64,
    pub trend_slope: f64,
    pub noise_std: f64,
    pub spike_probability: f64,
    pub spike_mean: f64,
    pub spike_std: f64,
    /// Decimal places values are rounded to; `None` keeps full precision.
    pub round_decimals: Option<u32>,
    /// Stop after this many samples; `None` for an endless stream.
    pub num_points: Option<usize>,
    /// Fixed RNG seed for reproducible streams.
    pub seed: Option<u64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            season_amplitude: 10.0,
            season_frequency: 0.05,
            trend_slope: 0.01,
            noise_std: 1.0,
            spike_probability: 0.01,
            spike_mean: 50.0,
            spike_std: 10.0,
            round_decimals: Some(2),
            num_points: None,
            seed: None,
        }
    }
}

impl SyntheticConfig {
    pub fn with_num_points(mut self, num_points: usize) -> Self {
        self.num_points = Some(num_points);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_spike_probability(mut self, probability: f64) -> Self {
        self.spike_probability = probability;
        self
    }

    pub fn with_noise_std(mut self, noise_std: f64) -> Self {
        self.noise_std = noise_std;
        self
    }

    pub fn validate(&self) -> Result<()> {
        let finite = [
            ("season_amplitude", self.season_amplitude),
            ("season_frequency", self.season_frequency),
            ("trend_slope", self.trend_slope),
            ("spike_mean", self.spike_mean),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(DetectorError::config(name, "must be a finite number"));
            }
        }

        for (name, value) in [("noise_std", self.noise_std), ("spike_std", self.spike_std)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DetectorError::config(
                    name,
                    format!("must be a non-negative finite number, got {value}"),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.spike_probability) {
            return Err(DetectorError::config(
                "spike_probability",
                format!("must be within [0, 1], got {}", self.spike_probability),
            ));
        }

        if self.num_points == Some(0) {
            return Err(DetectorError::config(
                "num_points",
                "must be a positive integer",
            ));
        }

        if let Some(decimals) = self.round_decimals {
            if decimals > 15 {
                return Err(DetectorError::config(
                    "round_decimals",
                    format!("must be at most 15, got {decimals}"),
                ));
            }
        }

        Ok(())
    }
}

/// Seasonal + trend + noise stream with occasional spikes.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    config: SyntheticConfig,
    rng: StdRng,
    noise: Normal<f64>,
    spike: Normal<f64>,
    step: usize,
}

impl SyntheticSource {
    pub fn new(config: SyntheticConfig) -> Result<Self> {
        config.validate()?;

        let noise = Normal::new(0.0, config.noise_std)
            .map_err(|e| DetectorError::config("noise_std", e.to_string()))?;
        let spike = Normal::new(config.spike_mean, config.spike_std)
            .map_err(|e| DetectorError::config("spike_std", e.to_string()))?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        debug!(
            num_points = ?config.num_points,
            seed = ?config.seed,
            spike_probability = config.spike_probability,
            "created synthetic source"
        );

        Ok(Self {
            config,
            rng,
            noise,
            spike,
            step: 0,
        })
    }

    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }

    /// Samples produced so far.
    pub fn produced(&self) -> usize {
        self.step
    }

    /// Noise-free value at step `i`.
    pub fn baseline(&self, i: usize) -> f64 {
        let t = i as f64;
        (t * self.config.season_frequency).sin() * self.config.season_amplitude
            + t * self.config.trend_slope
    }

    fn round(&self, value: f64) -> f64 {
        match self.config.round_decimals {
            Some(decimals) => {
                let factor = 10f64.powi(decimals as i32);
                (value * factor).round() / factor
            }
            None => value,
        }
    }
}

impl SampleSource for SyntheticSource {
    fn next_value(&mut self) -> Option<f64> {
        if self.config.num_points.is_some_and(|n| self.step >= n) {
            return None;
        }

        let mut value = self.baseline(self.step) + self.noise.sample(&mut self.rng);
        if self.rng.gen::<f64>() < self.config.spike_probability {
            let spike = self.spike.sample(&mut self.rng);
            trace!(step = self.step, spike, "injected spike");
            value += spike;
        }

        self.step += 1;
        Some(self.round(value))
    }

    fn describe(&self) -> String {
        let length = match self.config.num_points {
            Some(n) => format!("{n} points"),
            None => "endless".to_string(),
        };
        format!(
            "synthetic: sine + trend + noise, spike p={} ({})",
            self.config.spike_probability, length
        )
    }
}
