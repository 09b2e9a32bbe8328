//! Message catalog and translation.
//!
//! Every user-facing string is a [`Message`]: a stable key plus the English
//! text used when no translation is available. Locale catalogs are TOML
//! files with a single `[messages]` table mapping keys to translated text.

use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Locale used when nothing else is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// A translatable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message {
    pub key: &'static str,
    pub default: &'static str,
}

impl Message {
    pub const fn new(key: &'static str, default: &'static str) -> Self {
        Self { key, default }
    }
}

/// Errors that can occur when loading a locale catalog.
#[derive(Debug, Error)]
pub enum I18nError {
    #[error("Failed to read locale file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse locale file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    messages: HashMap<String, String>,
}

/// Translates messages for one locale, falling back to the English default.
#[derive(Debug, Clone)]
pub struct Translator {
    locale: String,
    catalog: HashMap<String, String>,
}

impl Translator {
    /// Translator with no catalog: every message renders its default text.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            catalog: HashMap::new(),
        }
    }

    pub fn with_catalog(locale: impl Into<String>, catalog: HashMap<String, String>) -> Self {
        Self {
            locale: locale.into(),
            catalog,
        }
    }

    /// Load `<dir>/<locale>.toml`.
    ///
    /// A missing file is not an error; the translator then serves defaults.
    pub fn load(locale: &str, dir: &Path) -> Result<Self, I18nError> {
        let path = dir.join(format!("{locale}.toml"));
        if !path.exists() {
            tracing::debug!("No catalog for locale '{}' at {}", locale, path.display());
            return Ok(Self::new(locale));
        }

        let content = fs::read_to_string(&path).map_err(|e| I18nError::ReadError {
            path: path.clone(),
            source: e,
        })?;
        let file: CatalogFile = toml::from_str(&content).map_err(|e| I18nError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(
            "Loaded {} messages for locale '{}'",
            file.messages.len(),
            locale
        );
        Ok(Self::with_catalog(locale, file.messages))
    }

    /// Directory holding the locale catalogs, next to the config file.
    pub fn catalog_dir() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("vcpkg-ce").join("locales")
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn translate(&self, message: &Message) -> String {
        match self.catalog.get(message.key) {
            Some(text) if !text.is_empty() => text.clone(),
            _ => message.default.to_string(),
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE)
    }
}
