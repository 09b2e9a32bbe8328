use thiserror::Error;

use crate::config::ConfigError;
use crate::fs::FsError;
use crate::i18n::I18nError;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Usage(#[from] clap::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Locale error: {0}")]
    Locale(#[from] I18nError),

    #[error("Cannot resolve '--{switch}': {source}")]
    Switch {
        switch: &'static str,
        #[source]
        source: FsError,
    },

    #[error("Cannot determine current directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
