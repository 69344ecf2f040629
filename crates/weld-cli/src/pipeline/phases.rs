use std::path::Path;

use async_trait::async_trait;

use super::{BuildContext, Phase};
use crate::collab::{BundleBuilder, DeclarationGenerator};
use crate::config::is_nested_relative;
use crate::error::{CliError, Result, ResultExt};
use crate::ui::format_duration;
use crate::variant::{BuildVariant, VariantKind};

/// Remove `out_dir` and everything in it, then create it empty.
///
/// `out_dir` must lie strictly inside `root`; anything else is refused
/// before touching the disk. Running it twice in a row leaves the same
/// empty directory.
pub async fn reset_output_dir(root: &Path, out_dir: &Path) -> Result<()> {
    if !out_dir.strip_prefix(root).is_ok_and(is_nested_relative) {
        return Err(CliError::InvalidArgument(format!(
            "Refusing to reset {}: it is not a directory inside the project root {}",
            out_dir.display(),
            root.display()
        )));
    }

    match tokio::fs::metadata(out_dir).await {
        Ok(meta) if !meta.is_dir() => {
            return Err(CliError::InvalidArgument(format!(
                "Output path exists but is not a directory: {}",
                out_dir.display()
            )));
        }
        Ok(_) => tokio::fs::remove_dir_all(out_dir).await.with_path(out_dir)?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(CliError::io(out_dir, e)),
    }

    tokio::fs::create_dir_all(out_dir).await.with_path(out_dir)
}

pub struct ResetOutput;

#[async_trait]
impl Phase for ResetOutput {
    fn name(&self) -> &'static str {
        "reset-output"
    }

    async fn run(&self, ctx: &BuildContext) -> Result<Option<String>> {
        reset_output_dir(&ctx.root, &ctx.out_dir).await?;
        tracing::debug!(out_dir = %ctx.out_dir.display(), "output directory reset");
        Ok(None)
    }
}

pub struct WriteFacade;

#[async_trait]
impl Phase for WriteFacade {
    fn name(&self) -> &'static str {
        "write-facade"
    }

    async fn run(&self, ctx: &BuildContext) -> Result<Option<String>> {
        tokio::fs::write(&ctx.facade_path, ctx.facade.as_str())
            .await
            .with_path(&ctx.facade_path)?;
        Ok(Some(format!("Created {} source", file_name(&ctx.facade_path))))
    }
}

pub struct GenerateDeclarations<'a> {
    generator: &'a dyn DeclarationGenerator,
}

impl<'a> GenerateDeclarations<'a> {
    pub fn new(generator: &'a dyn DeclarationGenerator) -> Self {
        Self { generator }
    }
}

#[async_trait]
impl Phase for GenerateDeclarations<'_> {
    fn name(&self) -> &'static str {
        "generate-declarations"
    }

    async fn run(&self, ctx: &BuildContext) -> Result<Option<String>> {
        let path = self.generator.generate(&ctx.facade_path).await?;
        Ok(Some(format!("Created {} declaration", file_name(&path))))
    }
}

/// Bundle one variant.
pub struct Bundle<'a> {
    variant: BuildVariant,
    builder: &'a dyn BundleBuilder,
}

impl<'a> Bundle<'a> {
    pub fn new(variant: BuildVariant, builder: &'a dyn BundleBuilder) -> Self {
        Self { variant, builder }
    }

    pub fn variant(&self) -> &BuildVariant {
        &self.variant
    }
}

#[async_trait]
impl Phase for Bundle<'_> {
    fn name(&self) -> &'static str {
        match self.variant.kind {
            VariantKind::Debug => "bundle-debug",
            VariantKind::Production => "bundle-production",
        }
    }

    async fn run(&self, _ctx: &BuildContext) -> Result<Option<String>> {
        let summary = self.builder.build(&self.variant).await?;

        tracing::info!(
            variant = %summary.variant,
            outputs = ?summary.outputs,
            elapsed = %format_duration(summary.elapsed),
            "bundle built"
        );
        if !summary.stdout.trim().is_empty() {
            tracing::debug!(variant = %summary.variant, stdout = %summary.stdout.trim(), "bundler output");
        }

        Ok(Some(format!(
            "Built {} ({})",
            self.variant.output_file_name(),
            self.variant.kind
        )))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
