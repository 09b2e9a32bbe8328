//! Runtime context shared by every switch during one invocation.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::Config;
use crate::error::CliError;
use crate::fs::{FileSystem, LocalFileSystem};
use crate::i18n::{Translator, DEFAULT_LOCALE};

/// Filesystem capability, working directory and translator for one run.
///
/// Passed explicitly to anything that needs it; there is no global session.
#[derive(Clone)]
pub struct Session {
    fs: Arc<dyn FileSystem>,
    cwd: PathBuf,
    translator: Translator,
}

impl Session {
    pub fn new(fs: Arc<dyn FileSystem>, cwd: PathBuf, translator: Translator) -> Self {
        Self { fs, cwd, translator }
    }

    /// Session for the running process: local filesystem, the process's
    /// current directory and the configured locale.
    pub fn from_env(config: &Config) -> Result<Self, CliError> {
        let cwd = std::env::current_dir().map_err(CliError::WorkingDirectory)?;
        let locale = config.locale.as_deref().unwrap_or(DEFAULT_LOCALE);
        let translator = Translator::load(locale, &Translator::catalog_dir())?;

        tracing::debug!(cwd = %cwd.display(), locale, "Session created");
        Ok(Self::new(Arc::new(LocalFileSystem), cwd, translator))
    }

    pub fn fs(&self) -> &dyn FileSystem {
        self.fs.as_ref()
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("cwd", &self.cwd)
            .field("locale", &self.translator.locale())
            .finish_non_exhaustive()
    }
}
