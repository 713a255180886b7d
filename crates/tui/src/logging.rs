//! Tracing subscriber setup.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "zstream=info,detector_core=info,source=info";

/// Where log lines go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Headless runs log to stderr.
    Stderr,
    /// Append to a file; used by the terminal UI.
    File(&'a Path),
    /// No subscriber; the terminal UI owns the screen.
    Disabled,
}

impl<'a> LogTarget<'a> {
    pub fn choose(headless: bool, log_file: Option<&'a Path>) -> Self {
        match (log_file, headless) {
            (Some(path), _) => LogTarget::File(path),
            (None, true) => LogTarget::Stderr,
            (None, false) => LogTarget::Disabled,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into())
}

/// Install the global subscriber for `target`.
pub fn init_tracing(target: LogTarget<'_>) -> anyhow::Result<()> {
    match target {
        LogTarget::Stderr => tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .with(env_filter())
            .try_init()?,
        LogTarget::File(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::registry()
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(env_filter())
                .try_init()?
        }
        LogTarget::Disabled => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_choose_target() {
        let path = Path::new("zstream.log");
        assert_eq!(LogTarget::choose(true, None), LogTarget::Stderr);
        assert_eq!(LogTarget::choose(false, None), LogTarget::Disabled);
        assert_eq!(LogTarget::choose(false, Some(path)), LogTarget::File(path));
        assert_eq!(LogTarget::choose(true, Some(path)), LogTarget::File(path));
    }

    #[test]
    fn test_default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }
}
