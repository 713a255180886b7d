//! Current window statistics panel.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;

fn row<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

/// Draw the window statistics of the most recent sample.
pub fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    let state = if app.finished {
        Span::styled("finished", Style::default().fg(Color::DarkGray))
    } else if app.paused {
        Span::styled("paused", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("streaming", Style::default().fg(Color::Green))
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{:<12}", "State"), Style::default().fg(Color::Gray)),
        state,
    ])];

    match &app.last {
        Some(last) => {
            let z_style = if last.is_anomaly() {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            lines.push(row("Last value", format!("{:.2}", last.value())));
            lines.push(Line::from(vec![
                Span::styled(format!("{:<12}", "Z-score"), Style::default().fg(Color::Gray)),
                Span::styled(format!("{:+.2}σ", last.z_score), z_style),
            ]));
            lines.push(row("Window", format!("{} samples", last.stats.count)));
            lines.push(row("Mean", format!("{:.2}", last.stats.mean)));
            lines.push(row("Std dev", format!("{:.2}", last.stats.std_dev)));
        }
        None => lines.push(row("Last value", "-".to_string())),
    }

    lines.push(row("Processed", app.processed.to_string()));
    lines.push(row("Anomalies", app.anomaly_count.to_string()));
    lines.push(row("Skipped", app.rejected.to_string()));
    lines.push(row("Tick", format!("{} ms", app.tick_rate.as_millis())));

    let panel = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Window "));
    frame.render_widget(panel, area);
}
