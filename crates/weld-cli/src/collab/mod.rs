//! External collaborators: the declaration generator and the bundler.
//!
//! Both are traits so the pipeline can run against stand-ins. The default
//! implementations shell out to the configured commands.

mod bundler;
mod declarations;

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;

use crate::error::CollaboratorError;
use crate::variant::{BuildVariant, VariantKind};

pub use bundler::{BunBundler, bundle_args};
pub use declarations::TscDeclarations;

/// Produces a declaration file for the facade source.
#[async_trait]
pub trait DeclarationGenerator: Send + Sync {
    /// Generate declarations for `facade` and return the path written.
    async fn generate(&self, facade: &Path) -> Result<PathBuf, CollaboratorError>;
}

/// What a bundler run reported.
#[derive(Debug, Clone)]
pub struct BuildSummary {
    pub variant: VariantKind,
    pub outputs: Vec<PathBuf>,
    /// Bundler stdout, logged at debug level
    pub stdout: String,
    pub elapsed: Duration,
}

/// Bundles the facade once per variant.
#[async_trait]
pub trait BundleBuilder: Send + Sync {
    async fn build(&self, variant: &BuildVariant) -> Result<BuildSummary, CollaboratorError>;
}

async fn ensure_written(tool: &'static str, path: &Path) -> Result<(), CollaboratorError> {
    match tokio::fs::metadata(path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => Err(CollaboratorError::missing_output(tool, path)),
    }
}
