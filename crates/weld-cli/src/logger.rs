//! Logging setup for the weld CLI.
//!
//! Verbosity is chosen in this order:
//! 1. `--verbose`: debug for the weld crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`, when set
//! 4. info for the weld crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "weld_cli=debug,weld_gen=debug,weld_registry=debug";
const QUIET_FILTER: &str = "error";
const DEFAULT_FILTER: &str = "weld_cli=info,weld_gen=info,weld_registry=info";

/// Build the filter for the given flags.
pub fn filter_for(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    }
}

/// Initialize the tracing subscriber. Call once, before any logging.
///
/// ```rust,no_run
/// use weld_cli::logger::init_logger;
///
/// init_logger(false, false, false);
/// tracing::info!("starting build");
/// ```
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter_for(verbose, quiet))
        .with(fmt_layer)
        .init();
}
