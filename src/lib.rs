//! Command-line switches for the artifact CLI.

pub mod args;
pub mod config;
pub mod error;
pub mod fs;
pub mod i18n;
pub mod logging;
pub mod session;
