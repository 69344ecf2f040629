use std::path::{Path, PathBuf};

use async_trait::async_trait;

use super::{DeclarationGenerator, ensure_written};
use crate::error::CollaboratorError;
use crate::process::{program_name, run_command};

const TOOL: &str = "declaration generator";

/// Runs the configured declaration command (`tsc` by default) in the project
/// root.
///
/// No arguments are passed: the compiler discovers its settings from the
/// project's own `tsconfig.json`, which must include the facade and emit
/// declarations next to it.
#[derive(Debug, Clone)]
pub struct TscDeclarations {
    command: Vec<String>,
    root: PathBuf,
}

impl TscDeclarations {
    pub fn new(command: Vec<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            command,
            root: root.into(),
        }
    }
}

/// `dist/react.ts` -> `dist/react.d.ts`
pub(crate) fn declaration_path(facade: &Path) -> PathBuf {
    facade.with_extension("d.ts")
}

#[async_trait]
impl DeclarationGenerator for TscDeclarations {
    async fn generate(&self, facade: &Path) -> Result<PathBuf, CollaboratorError> {
        let output = run_command(&self.command, &[], &self.root)
            .await
            .map_err(|e| CollaboratorError::spawn_failed(TOOL, program_name(&self.command), e))?;

        if !output.success {
            // tsc reports diagnostics on stdout
            let details = if output.stderr.trim().is_empty() {
                output.stdout
            } else {
                output.stderr
            };
            return Err(CollaboratorError::exit(TOOL, output.exit_code, details.trim()));
        }

        let path = declaration_path(facade);
        ensure_written(TOOL, &path).await?;

        tracing::debug!(
            path = %path.display(),
            elapsed_ms = output.elapsed.as_millis() as u64,
            "declarations generated"
        );
        Ok(path)
    }
}
