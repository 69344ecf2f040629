//! Ordered build phases.
//!
//! A build is a fixed list of phases run one after another. Each phase
//! returns a `Result`; the runner stops at the first error and returns it,
//! so later phases never see a half-finished output directory.
//!
//! ```text
//! ResetOutput -> WriteFacade -> GenerateDeclarations -> Bundle(debug) -> Bundle(production)
//! ```

mod phases;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use weld_gen::FacadeSource;

use crate::collab::{BundleBuilder, DeclarationGenerator};
use crate::config::WeldConfig;
use crate::error::Result;
use crate::variant::BuildVariant;

pub use phases::{Bundle, GenerateDeclarations, ResetOutput, WriteFacade, reset_output_dir};

/// Inputs shared by every phase. Built once, before the first phase runs.
#[derive(Debug, Clone)]
pub struct BuildContext {
    /// Project root; the output directory always lies inside it
    pub root: PathBuf,
    pub out_dir: PathBuf,
    /// `<out_dir>/<base>.ts`
    pub facade_path: PathBuf,
    pub facade: FacadeSource,
}

impl BuildContext {
    pub fn new(config: &WeldConfig, root: &std::path::Path, facade: FacadeSource) -> Self {
        let out_dir = config.out_dir_in(root);
        Self {
            root: root.to_path_buf(),
            facade_path: out_dir.join(config.facade_file_name()),
            out_dir,
            facade,
        }
    }
}

/// One step of the build.
#[async_trait]
pub trait Phase: Send + Sync {
    fn name(&self) -> &'static str;

    /// Run the phase. The returned line, if any, is shown to the user.
    async fn run(&self, ctx: &BuildContext) -> Result<Option<String>>;
}

/// Completed phases and total time.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub completed: Vec<&'static str>,
    pub elapsed: Duration,
}

/// The ordered phase list.
pub struct Pipeline<'a> {
    phases: Vec<Box<dyn Phase + 'a>>,
}

impl<'a> Pipeline<'a> {
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    pub fn with_phase(mut self, phase: impl Phase + 'a) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Reset, write, declare, then bundle debug and production.
    pub fn standard(
        config: &WeldConfig,
        ctx: &BuildContext,
        declarations: &'a dyn DeclarationGenerator,
        bundler: &'a dyn BundleBuilder,
    ) -> Self {
        let debug = BuildVariant::debug(&ctx.facade_path, &config.base_name);
        let production =
            BuildVariant::production(&ctx.facade_path, &config.base_name, &config.node_env_define);

        Self::new()
            .with_phase(ResetOutput)
            .with_phase(WriteFacade)
            .with_phase(GenerateDeclarations::new(declarations))
            .with_phase(Bundle::new(debug, bundler))
            .with_phase(Bundle::new(production, bundler))
    }

    pub fn phase_names(&self) -> Vec<&'static str> {
        self.phases.iter().map(|phase| phase.name()).collect()
    }

    /// Run every phase in order, handing progress lines to `progress`.
    pub async fn run(
        &self,
        ctx: &BuildContext,
        progress: &mut (dyn FnMut(&str) + Send),
    ) -> Result<PipelineReport> {
        let start = Instant::now();
        let mut completed = Vec::with_capacity(self.phases.len());

        for phase in &self.phases {
            tracing::debug!(phase = phase.name(), "starting phase");
            let line = phase.run(ctx).await.inspect_err(|err| {
                tracing::debug!(phase = phase.name(), error = %err, "phase failed");
            })?;
            completed.push(phase.name());
            if let Some(line) = line {
                progress(&line);
            }
        }

        Ok(PipelineReport {
            completed,
            elapsed: start.elapsed(),
        })
    }
}

impl Default for Pipeline<'_> {
    fn default() -> Self {
        Self::new()
    }
}
