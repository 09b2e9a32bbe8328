//! Argument parser — registry + argv → raw values keyed by switch name.
//!
//! Matching, cardinality checks and help rendering are delegated to clap.
//! The command is built from the registry at runtime so the registry stays
//! the only place switches are declared.

use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::args::registry::{Cardinality, SwitchArity, SwitchDef};
use crate::i18n::{Message, Translator};

const ABOUT: Message = Message::new(
    "cli.about",
    "Acquire and activate the artifacts a project needs.",
);

/// Raw switch values collected from one command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArguments {
    values: BTreeMap<String, Vec<String>>,
    flags: BTreeSet<String>,
}

impl ParsedArguments {
    /// Build raw state directly, bypassing argv.
    ///
    /// Repeated names accumulate in order.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut parsed = Self::default();
        for (name, value) in pairs {
            parsed
                .values
                .entry((*name).to_string())
                .or_default()
                .push((*value).to_string());
        }
        parsed
    }

    pub fn with_flag(mut self, name: &str) -> Self {
        self.flags.insert(name.to_string());
        self
    }

    fn from_matches(registry: &[SwitchDef], matches: &ArgMatches) -> Self {
        let mut parsed = Self::default();
        for def in registry {
            match def.arity {
                SwitchArity::Flag => {
                    if matches.get_flag(def.name) {
                        parsed.flags.insert(def.name.to_string());
                    }
                }
                SwitchArity::Value => {
                    if let Some(values) = matches.get_many::<String>(def.name) {
                        parsed
                            .values
                            .insert(def.name.to_string(), values.cloned().collect());
                    }
                }
            }
        }
        parsed
    }

    /// All raw values for `name`, in command-line order.
    pub fn raw(&self, name: &str) -> &[String] {
        self.values.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The first raw value for `name`, if any.
    pub fn first(&self, name: &str) -> Option<&str> {
        self.raw(name).first().map(String::as_str)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.flags.contains(name)
    }
}

/// Help lines for a definition, translated.
pub fn help_lines(def: &SwitchDef, translator: &Translator) -> Vec<String> {
    def.help.iter().map(|m| translator.translate(m)).collect()
}

/// Build the clap command for `registry`.
pub fn build_command(registry: &[SwitchDef], translator: &Translator) -> Command {
    registry.iter().fold(
        Command::new("vcpkg-ce")
            .version(env!("CARGO_PKG_VERSION"))
            .about(translator.translate(&ABOUT)),
        |cmd, def| cmd.arg(to_arg(def, translator)),
    )
}

fn to_arg(def: &SwitchDef, translator: &Translator) -> Arg {
    let arg = Arg::new(def.name)
        .long(def.name)
        .help(help_lines(def, translator).join("\n"));

    match (def.arity, def.cardinality) {
        (SwitchArity::Flag, _) => arg.action(ArgAction::SetTrue),
        (SwitchArity::Value, Cardinality::Single) => arg
            .action(ArgAction::Set)
            .num_args(1)
            .value_name(def.value_name),
        (SwitchArity::Value, Cardinality::Multiple) => arg
            .action(ArgAction::Append)
            .num_args(1)
            .value_name(def.value_name),
    }
}

/// Parse `argv` (including the program name) against `registry`.
///
/// A single-valued switch given twice, an unknown switch or a missing value
/// is a usage error. `--help` and `--version` also come back as errors whose
/// `exit()` prints the text and exits successfully.
pub fn parse<I, T>(
    registry: &[SwitchDef],
    translator: &Translator,
    argv: I,
) -> Result<ParsedArguments, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_command(registry, translator).try_get_matches_from(argv)?;
    Ok(ParsedArguments::from_matches(registry, &matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::registry::switch_registry;

    fn parse_args(args: &[&str]) -> Result<ParsedArguments, clap::Error> {
        let argv = std::iter::once("vcpkg-ce").chain(args.iter().copied());
        parse(&switch_registry(), &Translator::default(), argv)
    }

    #[test]
    fn command_definition_is_consistent() {
        build_command(&switch_registry(), &Translator::default()).debug_assert();
    }

    #[test]
    fn collects_single_value() {
        let parsed = parse_args(&["--msbuild-props", "out/props.xml"]).unwrap();
        assert_eq!(parsed.first("msbuild-props"), Some("out/props.xml"));
        assert_eq!(parsed.raw("msbuild-props").len(), 1);
    }

    #[test]
    fn absent_switch_has_no_values() {
        let parsed = parse_args(&[]).unwrap();
        assert_eq!(parsed.first("msbuild-props"), None);
        assert!(parsed.raw("msbuild-props").is_empty());
    }

    #[test]
    fn equals_syntax_is_accepted() {
        let parsed = parse_args(&["--msbuild-props=a.props"]).unwrap();
        assert_eq!(parsed.first("msbuild-props"), Some("a.props"));
    }

    #[test]
    fn repeated_single_switch_is_usage_error() {
        let err = parse_args(&["--msbuild-props", "a", "--msbuild-props", "b"]).unwrap_err();
        assert!(err.to_string().contains("cannot be used multiple times"));
    }

    #[test]
    fn multiple_switch_accumulates_in_order() {
        let parsed =
            parse_args(&["--overlay-ports", "one", "--overlay-ports", "two"]).unwrap();
        assert_eq!(parsed.raw("overlay-ports"), ["one", "two"]);
    }

    #[test]
    fn missing_value_is_usage_error() {
        assert!(parse_args(&["--msbuild-props"]).is_err());
    }

    #[test]
    fn unknown_switch_is_usage_error() {
        let err = parse_args(&["--msbuild-propz", "x"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn flags_are_recorded() {
        let parsed = parse_args(&["--debug"]).unwrap();
        assert!(parsed.is_set("debug"));
        assert!(!parsed.is_set("force"));
    }

    #[test]
    fn help_text_lists_msbuild_props() {
        let help = build_command(&switch_registry(), &Translator::default())
            .render_long_help()
            .to_string();
        assert!(help.contains("--msbuild-props <PATH>"));
        assert!(help.contains("Full path to the file in which MSBuild properties will be written."));
    }
}
