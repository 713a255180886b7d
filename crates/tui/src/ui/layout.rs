//! Main layout for the TUI.

use ratatui::prelude::*;

use crate::app::App;
use crate::widgets::create_stream_chart;

use super::alerts::draw_alerts;
use super::footer::draw_footer;
use super::header::draw_header;
use super::stats::draw_stats;

/// Draw the main UI layout.
pub fn draw_ui(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Create main layout: header, chart, details, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),  // Header
            Constraint::Min(10),    // Chart
            Constraint::Length(12), // Stats + anomaly table
            Constraint::Length(2),  // Footer
        ])
        .split(size);

    draw_header(frame, chunks[0], app);
    draw_stream_chart(frame, chunks[1], app);

    let details = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[2]);
    draw_stats(frame, details[0], app);
    draw_alerts(frame, details[1], app);

    draw_footer(frame, chunks[3], app);
}

fn draw_stream_chart(frame: &mut Frame, area: Rect, app: &App) {
    let points: Vec<(f64, f64)> = app.points().collect();
    let anomalies: Vec<(f64, f64)> = app.anomaly_points().collect();

    let title = format!(
        " Real-time Data Stream with Anomaly Detection (Points Visualized: {}) ",
        app.processed
    );
    let legend = format!("Anomalies (Detected: {})", app.anomaly_count);

    let chart = create_stream_chart(&points, &anomalies, title, legend);
    frame.render_widget(chart, area);
}
