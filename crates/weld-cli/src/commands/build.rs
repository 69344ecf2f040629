use std::path::Path;

use crate::cli::Cli;
use crate::collab::{BunBundler, BundleBuilder, DeclarationGenerator, TscDeclarations};
use crate::config::WeldConfig;
use crate::error::Result;
use crate::facade::build_facade;
use crate::inspect::{ModuleInspector, RuntimeInspector, SourceInspector, inspect_registry};
use crate::pipeline::{BuildContext, Pipeline, PipelineReport};
use crate::ui;

/// The external pieces a build talks to.
#[derive(Clone, Copy)]
pub struct Collaborators<'a> {
    pub runtime: &'a dyn ModuleInspector,
    pub statics: &'a dyn ModuleInspector,
    pub declarations: &'a dyn DeclarationGenerator,
    pub bundler: &'a dyn BundleBuilder,
}

/// Inspect, aggregate, emit and check the facade, then run the phase
/// pipeline.
///
/// Nothing is written before the pipeline starts: a library that cannot be
/// inspected or a facade that does not parse leaves the output directory
/// untouched.
pub async fn run_build(
    root: &Path,
    config: &WeldConfig,
    collaborators: Collaborators<'_>,
    progress: &mut (dyn FnMut(&str) + Send),
) -> Result<(BuildContext, PipelineReport)> {
    let registry =
        inspect_registry(&config.libraries, collaborators.runtime, collaborators.statics).await?;
    let facade = build_facade(&registry)?;

    let ctx = BuildContext::new(config, root, facade);
    let pipeline = Pipeline::standard(
        config,
        &ctx,
        collaborators.declarations,
        collaborators.bundler,
    );
    let report = pipeline.run(&ctx, progress).await?;

    Ok((ctx, report))
}

/// Execute `weld build`.
pub async fn build_execute(cli: &Cli) -> Result<()> {
    let root = super::resolve_project_root(cli.cwd.as_deref())?;
    let config = WeldConfig::load(&root, cli.config.as_deref())?;

    let runtime = RuntimeInspector::new(config.inspect_command.clone(), &root);
    let statics = SourceInspector::new(&root);
    let declarations = TscDeclarations::new(config.declaration_command.clone(), &root);
    let bundler = BunBundler::new(config.bundler_command.clone(), &root);
    let collaborators = Collaborators {
        runtime: &runtime,
        statics: &statics,
        declarations: &declarations,
        bundler: &bundler,
    };

    let quiet = cli.quiet;
    let mut progress = |line: &str| {
        if !quiet {
            ui::success(line);
        }
    };

    let (ctx, report) = run_build(&root, &config, collaborators, &mut progress).await?;

    tracing::info!(
        phases = report.completed.len(),
        elapsed = %ui::format_duration(report.elapsed),
        "build finished"
    );
    if !quiet {
        ui::print_artifact_summary(&ctx.out_dir, report.elapsed);
    }

    Ok(())
}
