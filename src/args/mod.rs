//! Switch handling for the CLI.
//!
//! Switches are declared once and flow through a fixed set of stages:
//!
//! ```text
//! Registry → clap Command → ParsedArguments (raw) → Switch::value (typed)
//! ```
//!
//! Raw values are stored as text; typed values are derived on demand from
//! the raw text, the working directory and the session's filesystem.

mod parser;
mod pipeline;
mod registry;
mod switch;
mod switches;

pub use parser::{build_command, help_lines, parse, ParsedArguments};
pub use pipeline::{resolve_switches, run, SwitchReport};
pub use registry::{
    switch_registry, Cardinality, SwitchArity, SwitchDef, DEBUG, FORCE, JSON, MSBUILD_PROPS,
    OVERLAY_PORTS, PROJECT, VERBOSE,
};
pub use switch::{resolve_file, Switch};
pub use switches::{Flag, Json, MsBuildProps, OverlayPorts, Project};
