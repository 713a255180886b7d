//! Recent anomaly table.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use detector::AlertSeverity;

use crate::app::App;

/// Draw the most recent anomalies, newest first.
pub fn draw_alerts(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!(" Anomalies Found: {} ", app.anomaly_count);

    if app.anomaly_count == 0 {
        let placeholder = Paragraph::new("No anomalies yet")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(title));
        frame.render_widget(placeholder, area);
        return;
    }

    let rows: Vec<Row> = app
        .recent_alerts()
        .map(|alert| {
            let severity_style = match alert.severity {
                AlertSeverity::Critical => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                AlertSeverity::Warning => Style::default().fg(Color::Yellow),
            };
            Row::new(vec![
                Cell::from(alert.index.to_string()),
                Cell::from(format!("{:.2}", alert.value)),
                Cell::from(format!("{:+.2}σ", alert.score)),
                Cell::from(alert.severity.name()).style(severity_style),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["Index", "Value", "Z-score", "Severity"])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(title));

    frame.render_widget(table, area);
}
