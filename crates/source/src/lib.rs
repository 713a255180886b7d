//! # source
//!
//! Sample sources feeding the streaming detector.
//!
//! - [`SyntheticSource`]: seasonal sine + linear trend + Gaussian noise,
//!   with randomly injected spikes
//! - [`FixedSource`]: replays a fixed sequence, once or cyclically
//! - [`IterSource`]: adapts any `Iterator<Item = f64>`

mod fixed;
mod synthetic;

pub use fixed::{FixedSource, IterSource};
pub use synthetic::{SyntheticConfig, SyntheticSource};

pub use detector_spi::SampleSource;
