//! Command-line interface definition.
//!
//! - `weld` / `weld build` - generate the facade, declarations and bundles
//! - `weld emit` - print the facade source
//! - `weld inspect` - print the aggregation as JSON

mod tests;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Weld - one React facade module, its declarations and bundles
#[derive(Parser, Debug)]
#[command(
    name = "weld",
    version,
    about = "Build a single re-export facade over several React packages",
    long_about = "Weld merges the exports of several packages into one facade module,\n\
                  generates its TypeScript declarations, and bundles it twice:\n\
                  an unminified debug build and a minified production build."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Config file to use instead of weld.config.json in the project root
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    ///
    /// Libraries are resolved, and collaborators run, from this directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Subcommand to execute (defaults to `build`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available weld subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Generate the facade, its declarations and both bundles
    ///
    /// Resets the output directory, writes the facade source, runs the
    /// declaration generator, then bundles the debug and production variants.
    Build,

    /// Print the facade source to stdout without touching the filesystem
    Emit,

    /// Print named exports, shadowed and excluded symbols, and the default
    /// export's members as JSON
    Inspect,
}

impl Cli {
    /// The subcommand to run, `build` when none was given.
    pub fn effective_command(&self) -> Command {
        self.command.unwrap_or(Command::Build)
    }
}
