//! Concrete switches.

use crate::args::parser::ParsedArguments;
use crate::args::registry::{self, SwitchDef};
use crate::args::switch::{resolve_file, Switch};
use crate::fs::{FileHandle, FsError};
use crate::session::Session;

/// `--msbuild-props <PATH>`: file that will receive MSBuild properties.
///
/// The file need not exist; it is written later by whatever consumes the
/// handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct MsBuildProps;

impl Switch for MsBuildProps {
    type Value = Option<FileHandle>;

    fn definition(&self) -> &'static SwitchDef {
        &registry::MSBUILD_PROPS
    }

    fn value(&self, args: &ParsedArguments, session: &Session) -> Result<Self::Value, FsError> {
        let handle = resolve_file(args.first(self.name()), session)?;
        if let Some(h) = &handle {
            tracing::debug!(switch = self.name(), path = %h, "Resolved switch value");
        }
        Ok(handle)
    }
}

/// `--json <PATH>`: file that will receive the environment as JSON.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Switch for Json {
    type Value = Option<FileHandle>;

    fn definition(&self) -> &'static SwitchDef {
        &registry::JSON
    }

    fn value(&self, args: &ParsedArguments, session: &Session) -> Result<Self::Value, FsError> {
        resolve_file(args.first(self.name()), session)
    }
}

/// `--project <PATH>`: explicit project manifest.
#[derive(Debug, Clone, Copy, Default)]
pub struct Project;

impl Switch for Project {
    type Value = Option<FileHandle>;

    fn definition(&self) -> &'static SwitchDef {
        &registry::PROJECT
    }

    fn value(&self, args: &ParsedArguments, session: &Session) -> Result<Self::Value, FsError> {
        resolve_file(args.first(self.name()), session)
    }
}

/// `--overlay-ports <DIR>`, repeatable. Empty entries are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OverlayPorts;

impl Switch for OverlayPorts {
    type Value = Vec<FileHandle>;

    fn definition(&self) -> &'static SwitchDef {
        &registry::OVERLAY_PORTS
    }

    fn value(&self, args: &ParsedArguments, session: &Session) -> Result<Self::Value, FsError> {
        let mut handles = Vec::new();
        for raw in args.raw(self.name()) {
            if let Some(handle) = resolve_file(Some(raw), session)? {
                handles.push(handle);
            }
        }
        Ok(handles)
    }
}

/// Boolean switch backed by any flag definition.
#[derive(Debug, Clone, Copy)]
pub struct Flag(pub &'static SwitchDef);

impl Flag {
    pub const DEBUG: Flag = Flag(&registry::DEBUG);
    pub const VERBOSE: Flag = Flag(&registry::VERBOSE);
    pub const FORCE: Flag = Flag(&registry::FORCE);
}

impl Switch for Flag {
    type Value = bool;

    fn definition(&self) -> &'static SwitchDef {
        self.0
    }

    fn value(&self, args: &ParsedArguments, _session: &Session) -> Result<Self::Value, FsError> {
        Ok(args.is_set(self.name()))
    }
}
