//! Command implementations.

mod build;
mod emit;
mod inspect;

use std::path::{Path, PathBuf};

use weld_registry::LibraryRegistry;

use crate::config::WeldConfig;
use crate::error::{CliError, Result, ResultExt};
use crate::inspect::{RuntimeInspector, SourceInspector, inspect_registry};

pub use build::{Collaborators, build_execute, run_build};
pub use emit::emit_execute;
pub use inspect::{inspect_execute, inspection_report};

/// Resolve the project root: `--cwd` when given (relative to the current
/// directory), otherwise the current directory.
pub fn resolve_project_root(explicit_cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir().with_path(Path::new("."))?;

    let Some(cwd) = explicit_cwd else {
        return Ok(current);
    };

    let absolute = if cwd.is_absolute() {
        cwd.to_path_buf()
    } else {
        current.join(cwd)
    };

    if !absolute.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Specified --cwd is not a directory: {}",
            absolute.display()
        )));
    }

    tracing::debug!(root = %absolute.display(), "using project root from --cwd");
    Ok(absolute)
}

/// Inspect the configured libraries with the default inspectors.
pub(crate) async fn load_registry(root: &Path, config: &WeldConfig) -> Result<LibraryRegistry> {
    let runtime = RuntimeInspector::new(config.inspect_command.clone(), root);
    let statics = SourceInspector::new(root);
    inspect_registry(&config.libraries, &runtime, &statics).await
}
