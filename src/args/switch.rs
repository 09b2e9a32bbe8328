//! The `Switch` trait — typed access to one registered switch.

use crate::args::parser::{help_lines, ParsedArguments};
use crate::args::registry::SwitchDef;
use crate::fs::{resolve, FileHandle, FsError};
use crate::i18n::Translator;
use crate::session::Session;

/// A switch whose raw text is interpreted as a typed value.
///
/// Registration, cardinality and help come from the [`SwitchDef`]; an
/// implementation only decides how raw values become `Value`. `value` is
/// recomputed on every call and never cached.
pub trait Switch {
    type Value;

    fn definition(&self) -> &'static SwitchDef;

    fn name(&self) -> &'static str {
        self.definition().name
    }

    fn allows_multiple(&self) -> bool {
        self.definition().allows_multiple()
    }

    /// Localized help lines. Always at least one.
    fn help(&self, translator: &Translator) -> Vec<String> {
        help_lines(self.definition(), translator)
    }

    fn value(&self, args: &ParsedArguments, session: &Session) -> Result<Self::Value, FsError>;
}

/// Resolve one raw path against the session into a file handle.
///
/// Absent or empty input yields `None` without calling the filesystem.
pub fn resolve_file(raw: Option<&str>, session: &Session) -> Result<Option<FileHandle>, FsError> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Ok(None);
    };
    let absolute = resolve(raw, session.cwd())?;
    session.fs().file(&absolute).map(Some)
}
