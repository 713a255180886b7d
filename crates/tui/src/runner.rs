//! Driving loops: terminal UI and headless.

use std::io;
use std::time::Instant;

use crossterm::{
    event::Event,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use detector::{
    RunSummary, SampleSource, StreamDetector, StreamPipeline, TracingSink,
};
use ratatui::prelude::*;
use tracing::{info, warn};

use crate::app::App;
use crate::config::StreamConfig;
use crate::event::{handle_key_event, poll_event};
use crate::ui::draw_ui;

/// One-line description of the detector settings.
pub fn detector_label(config: &StreamConfig) -> String {
    format!(
        "window N={}, threshold T={:.1}σ",
        config.detector.window_size, config.detector.z_threshold
    )
}

/// Run the pipeline without a terminal UI, logging anomalies as they occur.
pub fn run_headless<S, D>(
    mut pipeline: StreamPipeline<S, D>,
    config: &StreamConfig,
) -> anyhow::Result<RunSummary>
where
    S: SampleSource,
    D: StreamDetector,
{
    info!(tick_ms = config.display.tick_ms, "running headless");
    let mut sink = TracingSink::new();
    let summary = pipeline.run_paced(&mut sink, None, config.display.tick())?;
    Ok(summary)
}

/// Run the live terminal UI until the user quits.
pub fn run_tui<S, D>(pipeline: StreamPipeline<S, D>, config: &StreamConfig) -> anyhow::Result<()>
where
    S: SampleSource,
    D: StreamDetector,
{
    let mut app = App::new(
        &config.display,
        detector_label(config),
        pipeline.source().describe(),
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    let result = run_app(&mut terminal, &mut app, pipeline);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    let summary = result?;
    info!(
        processed = summary.processed,
        anomalies = summary.anomalies,
        rejected = summary.rejected,
        "session ended"
    );
    Ok(())
}

/// Draw, handle input, and advance the pipeline once per tick.
fn run_app<B, S, D>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut pipeline: StreamPipeline<S, D>,
) -> anyhow::Result<RunSummary>
where
    B: Backend,
    S: SampleSource,
    D: StreamDetector,
{
    let mut summary = RunSummary::default();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_ui(frame, app))?;

        // Clear expired status messages
        app.clear_expired_status();

        let timeout = app.tick_rate.saturating_sub(last_tick.elapsed());
        if let Some(event) = poll_event(timeout)? {
            match event {
                Event::Key(key) => handle_key_event(app, key),
                Event::Resize(_, _) => {} // Terminal will redraw automatically
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }

        if last_tick.elapsed() >= app.tick_rate {
            last_tick = Instant::now();
            if app.should_advance() {
                match pipeline.step(app)? {
                    Some(outcome) => summary.record(&outcome),
                    None => {
                        warn!(processed = summary.processed, "source exhausted");
                        app.mark_finished();
                    }
                }
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use detector::ZScoreDetector;
    use source::FixedSource;

    #[test]
    fn test_detector_label() {
        let label = detector_label(&StreamConfig::default());
        assert_eq!(label, "window N=50, threshold T=3.0σ");
    }

    #[test]
    fn test_headless_run_processes_bounded_source() {
        let config = StreamConfig {
            display: DisplayConfig {
                tick_ms: 0,
                ..DisplayConfig::default()
            },
            ..StreamConfig::default()
        };
        let mut values = vec![10.0; 39];
        values.push(f64::NAN);
        values.push(80.0);

        let pipeline = StreamPipeline::new(
            FixedSource::new(values),
            ZScoreDetector::new(40, 3.0).unwrap(),
        );
        let summary = run_headless(pipeline, &config).unwrap();
        assert_eq!(summary.processed, 41);
        assert_eq!(summary.rejected, 1);
        assert_eq!(summary.anomalies, 1);
    }
}
