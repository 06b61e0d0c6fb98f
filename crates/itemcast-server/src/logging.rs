//! `tracing` subscriber initialization.

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, LogSection};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. Falls back to
/// `info` if neither parses.
pub fn init(settings: &LogSection) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    match settings.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
