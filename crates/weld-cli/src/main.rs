//! Weld CLI entry point: parse arguments, set up logging, dispatch.

use clap::Parser;
use miette::Result;
use weld_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    if args.no_color {
        // Only fails if a hook is already installed.
        let _ = miette::set_hook(Box::new(|_| {
            Box::new(miette::MietteHandlerOpts::new().color(false).build())
        }));
    }

    let result = match args.effective_command() {
        cli::Command::Build => commands::build_execute(&args).await,
        cli::Command::Emit => commands::emit_execute(&args).await,
        cli::Command::Inspect => commands::inspect_execute(&args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
