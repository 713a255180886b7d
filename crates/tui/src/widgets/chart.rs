//! Chart widget for the live stream.

use ratatui::{
    prelude::*,
    symbols::Marker,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

/// Axis bounds for a set of `(index, value)` points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl ChartBounds {
    /// Fit bounds around `points` with a 5% vertical margin.
    ///
    /// Empty input and flat series still yield a non-empty range.
    pub fn fit(points: &[(f64, f64)]) -> Self {
        let Some(&(first_x, _)) = points.first() else {
            return Self {
                x: [0.0, 1.0],
                y: [-1.0, 1.0],
            };
        };
        let last_x = points.last().map_or(first_x, |&(x, _)| x);

        let (y_min, y_max) = points
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        let margin = ((y_max - y_min) * 0.05).max(1.0);

        Self {
            x: [first_x, last_x.max(first_x + 1.0)],
            y: [y_min - margin, y_max + margin],
        }
    }
}

/// Create the stream chart: a line for every visible sample and red
/// markers on anomalies.
pub fn create_stream_chart<'a>(
    points: &'a [(f64, f64)],
    anomalies: &'a [(f64, f64)],
    title: String,
    anomaly_label: String,
) -> Chart<'a> {
    let bounds = ChartBounds::fit(points);

    let datasets = vec![
        Dataset::default()
            .name("Data Stream")
            .marker(Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Cyan))
            .data(points),
        Dataset::default()
            .name(anomaly_label)
            .marker(Marker::Block)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Red))
            .data(anomalies),
    ];

    let [x_min, x_max] = bounds.x;
    let [y_min, y_max] = bounds.y;

    Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(title))
        .x_axis(
            Axis::default()
                .title("Index")
                .style(Style::default().fg(Color::Gray))
                .bounds(bounds.x)
                .labels(vec![
                    Span::raw(format!("{:.0}", x_min)),
                    Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
                    Span::raw(format!("{:.0}", x_max)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("Value")
                .style(Style::default().fg(Color::Gray))
                .bounds(bounds.y)
                .labels(vec![
                    Span::raw(format!("{:.1}", y_min)),
                    Span::raw(format!("{:.1}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{:.1}", y_max)),
                ]),
        )
}
