use std::path::PathBuf;

use async_trait::async_trait;
use serde::Deserialize;
use weld_registry::{ExportValue, ModuleNamespace};

use super::ModuleInspector;
use crate::config::LibrarySpec;
use crate::error::InspectError;
use crate::process::{program_name, run_command};

/// Imports the specifier given as the first script argument and prints the
/// default export's own enumerable keys with their `typeof` tags.
const INSPECT_SCRIPT: &str = r#"const ns = await import(process.argv[1]);
const mod = 'default' in ns ? ns.default : ns;
const kind = mod === null ? 'null' : typeof mod;
const keys = kind === 'object' || kind === 'function'
  ? Object.keys(mod).map((key) => [key, typeof mod[key]])
  : [];
process.stdout.write('\n' + JSON.stringify({ kind, keys }) + '\n');
"#;

#[derive(Debug, Deserialize)]
struct Inspection {
    kind: String,
    #[serde(default)]
    keys: Vec<(String, String)>,
}

/// Turn the inspection script's stdout into a namespace.
///
/// Only the last non-empty line is read, so anything the module prints while
/// loading is ignored.
pub fn parse_inspection(specifier: &str, stdout: &str) -> Result<ModuleNamespace, InspectError> {
    let line = stdout
        .lines()
        .rev()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| InspectError::malformed(specifier, "no output"))?;

    let inspection: Inspection = serde_json::from_str(line)
        .map_err(|e| InspectError::malformed(specifier, e.to_string()))?;

    if inspection.kind != "object" && inspection.kind != "function" {
        return Err(InspectError::NotAnObject {
            specifier: specifier.to_string(),
            kind: inspection.kind,
        });
    }

    Ok(inspection
        .keys
        .into_iter()
        .map(|(name, tag)| (name, ExportValue::String(tag)))
        .collect())
}

/// Inspects libraries by importing them in a JavaScript runtime.
///
/// The command must accept node's `--input-type=module -e <script> <arg>`
/// form. It runs in the project root so bare specifiers resolve against the
/// project's `node_modules`.
#[derive(Debug, Clone)]
pub struct RuntimeInspector {
    command: Vec<String>,
    root: PathBuf,
}

impl RuntimeInspector {
    pub fn new(command: Vec<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            command,
            root: root.into(),
        }
    }

    fn args(specifier: &str) -> Vec<String> {
        vec![
            "--input-type=module".to_string(),
            "-e".to_string(),
            INSPECT_SCRIPT.to_string(),
            specifier.to_string(),
        ]
    }
}

#[async_trait]
impl ModuleInspector for RuntimeInspector {
    async fn inspect(&self, library: &LibrarySpec) -> Result<ModuleNamespace, InspectError> {
        let specifier = library.specifier.as_str();
        let output = run_command(&self.command, &Self::args(specifier), &self.root)
            .await
            .map_err(|e| InspectError::spawn_failed(program_name(&self.command), specifier, e))?;

        if !output.success {
            return Err(InspectError::LoadFailed {
                specifier: specifier.to_string(),
                exit_code: output.exit_code,
                stderr: output.stderr.trim().to_string(),
            });
        }

        parse_inspection(specifier, &output.stdout)
    }
}
