use std::fs::OpenOptions;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Initialize tracing.
///
/// Logging is off by default so stdout and stderr stay clean for scripts.
/// It is enabled when the config names a log file, or when `debug` is set
/// (then at `debug` level on stderr). `RUST_LOG` overrides the level.
/// A configured file is appended to, never truncated.
pub fn init_tracing(config: &LoggingConfig, debug: bool) {
    if config.file.is_none() && !debug {
        return;
    }

    let level = if debug { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    match &config.file {
        Some(path) => {
            let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
                eprintln!("Warning: Failed to create log file: {}", path.display());
                return;
            };
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_writer(file))
                .init();
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(layer.with_writer(std::io::stderr))
                .init();
        }
    }
}
