//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Live sliding-window z-score anomaly detection on a synthetic stream.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "zstream", version)]
#[command(about = "Live sliding-window z-score anomaly detection", long_about = None)]
pub struct Cli {
    /// JSON config file (detector / source / display sections)
    #[arg(short, long, env = "ZSTREAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Samples in the sliding window (>= 2)
    #[arg(short, long, env = "ZSTREAM_WINDOW_SIZE")]
    pub window_size: Option<usize>,

    /// Z-score threshold in standard deviations (> 0)
    #[arg(short, long, env = "ZSTREAM_Z_THRESHOLD")]
    pub threshold: Option<f64>,

    /// Stop after this many samples (default: endless, 1000 when headless)
    #[arg(short = 'n', long, env = "ZSTREAM_POINTS")]
    pub points: Option<usize>,

    /// RNG seed for a reproducible stream
    #[arg(long, env = "ZSTREAM_SEED")]
    pub seed: Option<u64>,

    /// Milliseconds between samples
    #[arg(long, env = "ZSTREAM_TICK_MS")]
    pub tick_ms: Option<u64>,

    /// Run without the terminal UI, logging anomalies to stderr and
    /// printing a JSON summary once the stream ends
    #[arg(long)]
    pub headless: bool,

    /// Write logs to this file (the terminal UI discards logs otherwise)
    #[arg(long, env = "ZSTREAM_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}
