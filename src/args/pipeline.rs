//! Pipeline — ties parsing and typed resolution together.

use serde::Serialize;
use std::ffi::OsString;

use crate::args::parser::{parse, ParsedArguments};
use crate::args::registry::switch_registry;
use crate::args::switch::Switch;
use crate::args::switches::{Flag, Json, MsBuildProps, OverlayPorts, Project};
use crate::error::CliError;
use crate::fs::FileHandle;
use crate::session::Session;

/// Every switch resolved for one invocation.
///
/// Fields are declared in key order so the JSON output is sorted. Paths are
/// native absolute paths; absent paths are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SwitchReport {
    pub debug: bool,
    pub force: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<String>,
    #[serde(rename = "msbuild-props", skip_serializing_if = "Option::is_none")]
    pub msbuild_props: Option<String>,
    #[serde(rename = "overlay-ports")]
    pub overlay_ports: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    pub verbose: bool,
}

impl SwitchReport {
    pub fn to_json(&self) -> Result<String, CliError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn native(handle: &FileHandle) -> String {
    handle.path().display().to_string()
}

fn resolved<S: Switch>(
    switch: S,
    args: &ParsedArguments,
    session: &Session,
) -> Result<S::Value, CliError> {
    switch
        .value(args, session)
        .map_err(|source| CliError::Switch {
            switch: switch.name(),
            source,
        })
}

/// Resolve every registered switch against `session`.
pub fn resolve_switches(args: &ParsedArguments, session: &Session) -> Result<SwitchReport, CliError> {
    let report = SwitchReport {
        debug: resolved(Flag::DEBUG, args, session)?,
        force: resolved(Flag::FORCE, args, session)?,
        json: resolved(Json, args, session)?.as_ref().map(native),
        msbuild_props: resolved(MsBuildProps, args, session)?.as_ref().map(native),
        overlay_ports: resolved(OverlayPorts, args, session)?
            .iter()
            .map(native)
            .collect(),
        project: resolved(Project, args, session)?.as_ref().map(native),
        verbose: resolved(Flag::VERBOSE, args, session)?,
    };
    tracing::info!(
        msbuild_props = report.msbuild_props.is_some(),
        overlay_ports = report.overlay_ports.len(),
        "Switches resolved"
    );
    Ok(report)
}

/// Parse `argv` with the full registry and resolve it.
///
/// Usage errors come back as [`CliError::Usage`] so the caller can let clap
/// print them and pick the exit status.
pub fn run<I, T>(argv: I, session: &Session) -> Result<SwitchReport, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let parsed = parse(&switch_registry(), session.translator(), argv)?;
    resolve_switches(&parsed, session)
}
