//! Switch registry — single source of truth for all switches.

use crate::i18n::Message;

/// How many times a switch may appear on one command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// At most once. A repeat is a usage error.
    Single,
    /// Any number of times; values accumulate in order.
    Multiple,
}

/// Whether a switch takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchArity {
    /// Boolean switch, no value (e.g., --debug).
    Flag,
    /// Takes exactly one value per occurrence (e.g., --msbuild-props <PATH>).
    Value,
}

/// A single switch definition.
#[derive(Debug, Clone, Copy)]
pub struct SwitchDef {
    /// Canonical name, matched as `--<name>` (e.g., "msbuild-props").
    pub name: &'static str,
    pub cardinality: Cardinality,
    pub arity: SwitchArity,
    /// Placeholder shown in usage (e.g., "PATH"). Unused for flags.
    pub value_name: &'static str,
    /// Help lines, in display order. Never empty.
    pub help: &'static [Message],
}

impl SwitchDef {
    pub fn allows_multiple(&self) -> bool {
        self.cardinality == Cardinality::Multiple
    }
}

pub const MSBUILD_PROPS: SwitchDef = SwitchDef {
    name: "msbuild-props",
    cardinality: Cardinality::Single,
    arity: SwitchArity::Value,
    value_name: "PATH",
    help: &[Message::new(
        "switch.msbuild-props",
        "Full path to the file in which MSBuild properties will be written.",
    )],
};

pub const JSON: SwitchDef = SwitchDef {
    name: "json",
    cardinality: Cardinality::Single,
    arity: SwitchArity::Value,
    value_name: "PATH",
    help: &[Message::new(
        "switch.json",
        "Full path to the file in which the activation environment will be written as JSON.",
    )],
};

pub const PROJECT: SwitchDef = SwitchDef {
    name: "project",
    cardinality: Cardinality::Single,
    arity: SwitchArity::Value,
    value_name: "PATH",
    help: &[
        Message::new(
            "switch.project",
            "Override the path to the project manifest.",
        ),
        Message::new(
            "switch.project.default",
            "Defaults to searching the current directory and its parents.",
        ),
    ],
};

pub const OVERLAY_PORTS: SwitchDef = SwitchDef {
    name: "overlay-ports",
    cardinality: Cardinality::Multiple,
    arity: SwitchArity::Value,
    value_name: "DIR",
    help: &[Message::new(
        "switch.overlay-ports",
        "Directory containing overlay ports. May be given more than once.",
    )],
};

pub const DEBUG: SwitchDef = SwitchDef {
    name: "debug",
    cardinality: Cardinality::Single,
    arity: SwitchArity::Flag,
    value_name: "",
    help: &[Message::new(
        "switch.debug",
        "Enables debug mode; displays internal messages.",
    )],
};

pub const VERBOSE: SwitchDef = SwitchDef {
    name: "verbose",
    cardinality: Cardinality::Single,
    arity: SwitchArity::Flag,
    value_name: "",
    help: &[Message::new("switch.verbose", "Enables verbose output.")],
};

pub const FORCE: SwitchDef = SwitchDef {
    name: "force",
    cardinality: Cardinality::Single,
    arity: SwitchArity::Flag,
    value_name: "",
    help: &[Message::new(
        "switch.force",
        "Proceed with the (potentially dangerous) action.",
    )],
};

/// Build the complete switch registry.
pub fn switch_registry() -> Vec<SwitchDef> {
    vec![
        // === Output files ===
        MSBUILD_PROPS,
        JSON,
        // === Inputs ===
        PROJECT,
        OVERLAY_PORTS,
        // === Behaviour flags ===
        DEBUG,
        VERBOSE,
        FORCE,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn names_are_unique() {
        let registry = switch_registry();
        let names: HashSet<_> = registry.iter().map(|d| d.name).collect();
        assert_eq!(names.len(), registry.len());
    }

    #[test]
    fn every_switch_has_help() {
        for def in switch_registry() {
            assert!(!def.help.is_empty(), "{} has no help", def.name);
        }
    }

    #[test]
    fn msbuild_props_is_single_valued() {
        assert!(!MSBUILD_PROPS.allows_multiple());
        assert_eq!(MSBUILD_PROPS.arity, SwitchArity::Value);
    }
}
