//! UI module for the TUI.

mod alerts;
mod footer;
mod header;
mod layout;
mod stats;

pub use layout::draw_ui;
