use anyhow::Context;

use vcpkg_ce::args::{parse, resolve_switches, switch_registry, Flag, Switch, SwitchDef};
use vcpkg_ce::config::Config;
use vcpkg_ce::i18n::Translator;
use vcpkg_ce::logging::init_tracing;
use vcpkg_ce::session::Session;

/// Whether `--debug` is on the command line, decided before the config and
/// locale are known. Malformed command lines count as "no"; the real parse
/// below reports them.
fn debug_requested(registry: &[SwitchDef]) -> bool {
    parse(registry, &Translator::default(), std::env::args_os())
        .map(|parsed| parsed.is_set(Flag::DEBUG.name()))
        .unwrap_or(false)
}

fn main() -> anyhow::Result<()> {
    let registry = switch_registry();
    let config = Config::load().context("loading configuration")?;

    init_tracing(&config.logging, debug_requested(&registry));
    tracing::debug!(
        path = %Config::config_path().display(),
        locale = config.locale.as_deref().unwrap_or("default"),
        level = %config.logging.level,
        "Configuration loaded"
    );

    let session = Session::from_env(&config).context("creating session")?;

    let parsed = match parse(&registry, session.translator(), std::env::args_os()) {
        Ok(parsed) => parsed,
        // Prints help/version to stdout (status 0) or the usage error to stderr (status 2).
        Err(e) => e.exit(),
    };

    let report = resolve_switches(&parsed, &session)?;
    println!("{}", report.to_json()?);
    Ok(())
}
