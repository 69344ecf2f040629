//! Build configuration loaded from `weld.config.json`.
//!
//! Every field is optional. Defaults describe the standard React facade:
//! four libraries, a `dist/` output directory and the `react` base name.

mod defaults;
mod loading;
mod validation;

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub use defaults::*;
pub use loading::CONFIG_FILE_NAME;
pub use validation::is_nested_relative;

/// Weld configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeldConfig {
    /// Libraries in priority order. Earlier libraries win symbol collisions.
    #[serde(default = "default_libraries")]
    pub libraries: Vec<LibrarySpec>,

    /// Output directory, relative to the project root
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Stem shared by the facade, declaration file and bundles
    #[serde(default = "default_base_name")]
    pub base_name: String,

    /// Runtime used to import libraries and list their exports
    #[serde(default = "default_inspect_command")]
    pub inspect_command: Vec<String>,

    /// Declaration generator, run in the project root without arguments
    #[serde(default = "default_declaration_command")]
    pub declaration_command: Vec<String>,

    /// Bundler invocation prefix
    #[serde(default = "default_bundler_command")]
    pub bundler_command: Vec<String>,

    /// Expression replaced with `"production"` in the minified bundle
    #[serde(default = "default_node_env_define")]
    pub node_env_define: String,
}

/// One library contributing to the facade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LibrarySpec {
    /// Import binding used in the facade (`React`)
    pub name: String,

    /// Module specifier passed to `import` (`react`)
    pub specifier: String,

    /// ES module on disk to scan statically instead of importing the
    /// specifier at runtime
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<PathBuf>,
}

impl LibrarySpec {
    pub fn new(name: impl Into<String>, specifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specifier: specifier.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl WeldConfig {
    /// Facade file name (`react.ts`)
    pub fn facade_file_name(&self) -> String {
        format!("{}.ts", self.base_name)
    }

    /// Declaration file name (`react.d.ts`)
    pub fn declaration_file_name(&self) -> String {
        format!("{}.d.ts", self.base_name)
    }

    /// Output directory resolved against `root`.
    pub fn out_dir_in(&self, root: &Path) -> PathBuf {
        root.join(&self.out_dir)
    }
}

impl Default for WeldConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
