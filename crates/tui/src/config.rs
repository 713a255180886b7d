//! Layered configuration: defaults, optional JSON file, command line.

use std::fs;
use std::path::Path;
use std::time::Duration;

use detector::{DetectorConfig, DetectorError};
use serde::{Deserialize, Serialize};
use source::SyntheticConfig;

use crate::cli::Cli;

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to parse config file {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error(transparent)]
    Invalid(#[from] DetectorError),
}

/// Samples a headless run stops after when no bound is configured.
pub const DEFAULT_HEADLESS_POINTS: usize = 1_000;

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Milliseconds between two samples (default: 10).
    pub tick_ms: u64,
    /// Points kept on screen (default: 500).
    pub history: usize,
    /// Rows in the recent anomaly table (default: 10).
    pub alert_rows: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            tick_ms: 10,
            history: 500,
            alert_rows: 10,
        }
    }
}

impl DisplayConfig {
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }

    pub fn validate(&self) -> detector::Result<()> {
        if self.history < 2 {
            return Err(DetectorError::config("history", "must be at least 2"));
        }
        if self.alert_rows == 0 {
            return Err(DetectorError::config("alert_rows", "must be positive"));
        }
        Ok(())
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    pub detector: DetectorConfig,
    pub source: SyntheticConfig,
    pub display: DisplayConfig,
}

impl StreamConfig {
    /// Load from a JSON file; missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json(&content).map_err(|e| match e {
            ConfigError::Parse { reason, .. } => ConfigError::Parse {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            reason: e.to_string(),
        })
    }

    /// Resolve defaults, config file and command-line overrides, then validate.
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(cli);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(window_size) = cli.window_size {
            self.detector.window_size = window_size;
        }
        if let Some(threshold) = cli.threshold {
            self.detector.z_threshold = threshold;
        }
        if let Some(points) = cli.points {
            self.source.num_points = Some(points);
        }
        if let Some(seed) = cli.seed {
            self.source.seed = Some(seed);
        }
        if let Some(tick_ms) = cli.tick_ms {
            self.display.tick_ms = tick_ms;
        }
        // headless output is printed at the end, so the stream must end
        if cli.headless && self.source.num_points.is_none() {
            self.source.num_points = Some(DEFAULT_HEADLESS_POINTS);
        }
    }

    pub fn validate(&self) -> detector::Result<()> {
        self.detector.validate()?;
        self.source.validate()?;
        self.display.validate()
    }
}
