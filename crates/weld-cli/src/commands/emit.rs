use crate::cli::Cli;
use crate::config::WeldConfig;
use crate::error::Result;
use crate::facade::build_facade;

/// Execute `weld emit`: print the facade source to stdout.
pub async fn emit_execute(cli: &Cli) -> Result<()> {
    let root = super::resolve_project_root(cli.cwd.as_deref())?;
    let config = WeldConfig::load(&root, cli.config.as_deref())?;

    let registry = super::load_registry(&root, &config).await?;
    let facade = build_facade(&registry)?;

    println!("{facade}");
    Ok(())
}
