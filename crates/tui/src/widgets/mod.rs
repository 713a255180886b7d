//! Reusable widgets for the TUI.

mod chart;

pub use chart::{create_stream_chart, ChartBounds};
