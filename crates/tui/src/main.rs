//! zstream - live sliding-window z-score anomaly detection in the terminal.

mod app;
mod cli;
mod config;
mod event;
mod logging;
mod runner;
mod ui;
mod widgets;

use clap::Parser;
use detector::{SampleSource, StreamPipeline, ZScoreDetector};
use source::SyntheticSource;
use tracing::info;

use cli::Cli;
use config::StreamConfig;
use logging::{init_tracing, LogTarget};

fn main() -> anyhow::Result<()> {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(LogTarget::choose(cli.headless, cli.log_file.as_deref()))?;

    let config = StreamConfig::resolve(&cli)?;
    let detector = ZScoreDetector::from_config(config.detector)?;
    let source = SyntheticSource::new(config.source.clone())?;

    info!(
        window_size = config.detector.window_size,
        z_threshold = config.detector.z_threshold,
        source = %source.describe(),
        headless = cli.headless,
        "zstream v{} starting",
        env!("CARGO_PKG_VERSION")
    );

    let pipeline = StreamPipeline::new(source, detector);
    if cli.headless {
        let summary = runner::run_headless(pipeline, &config)?;
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    runner::run_tui(pipeline, &config)
}
