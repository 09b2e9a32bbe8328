use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Locale for help text (e.g., "en", "de"). Defaults to English.
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Diagnostic logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter level: "trace", "debug", "info", "warn", "error" or "off".
    #[serde(default = "default_level")]
    pub level: String,
    /// Write logs to this file. Without it logs go to stderr, and only when
    /// `--debug` is given.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: None,
        }
    }
}
