//! Bundle variant configurations.

use std::fmt;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;

/// Which of the two bundles a configuration produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariantKind {
    Debug,
    Production,
}

impl fmt::Display for VariantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => f.write_str("debug"),
            Self::Production => f.write_str("production"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceMapMode {
    Inline,
    None,
}

impl SourceMapMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::None => "none",
        }
    }
}

/// Everything the bundler needs to produce one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildVariant {
    pub kind: VariantKind,
    /// Facade source file
    pub entry_point: PathBuf,
    /// Directory the bundle is written to
    pub out_dir: PathBuf,
    /// Output file naming pattern passed to the bundler
    pub output_naming: String,
    pub sourcemap: SourceMapMode,
    pub minify: bool,
    /// Expression -> replacement, in insertion order
    pub defines: IndexMap<String, String>,
}

impl BuildVariant {
    /// Unminified bundle with an inline sourcemap, written to
    /// `<base>.js` beside the entry point.
    pub fn debug(entry_point: &Path, base_name: &str) -> Self {
        Self {
            kind: VariantKind::Debug,
            entry_point: entry_point.to_path_buf(),
            out_dir: parent_dir(entry_point),
            output_naming: format!("./{base_name}.js"),
            sourcemap: SourceMapMode::Inline,
            minify: false,
            defines: IndexMap::new(),
        }
    }

    /// Minified bundle written to `<base>.min.js`, with `define_key`
    /// replaced by the string literal `"production"`.
    pub fn production(entry_point: &Path, base_name: &str, define_key: &str) -> Self {
        let mut defines = IndexMap::new();
        defines.insert(define_key.to_string(), "\"production\"".to_string());

        Self {
            kind: VariantKind::Production,
            entry_point: entry_point.to_path_buf(),
            out_dir: parent_dir(entry_point),
            output_naming: format!("{base_name}.min.js"),
            sourcemap: SourceMapMode::None,
            minify: true,
            defines,
        }
    }

    /// Path the bundle is expected at once the bundler finishes.
    pub fn output_path(&self) -> PathBuf {
        let name = self.output_naming.trim_start_matches("./");
        self.out_dir.join(name)
    }

    /// File name of the bundle, for progress messages.
    pub fn output_file_name(&self) -> &str {
        self.output_naming.trim_start_matches("./")
    }
}

fn parent_dir(path: &Path) -> PathBuf {
    path.parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}
