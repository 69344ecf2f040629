//! Error handling for the weld CLI.
//!
//! `CliError` is the top-level type returned by commands. Each area of the
//! build owns a narrower enum that converts into it via `#[from]`:
//!
//! - [`ConfigError`]: loading and validating `weld.config.json`
//! - [`InspectError`]: discovering a library's exports
//! - [`CollaboratorError`]: running the declaration generator or bundler
//!
//! Errors raised by `weld-registry` and `weld-gen` pass through unchanged so
//! their diagnostic codes survive to the terminal.

use std::path::{Path, PathBuf};

use miette::{Diagnostic, Report};
use thiserror::Error;
use weld_gen::GenError;
use weld_registry::RegistryError;

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Inspect(#[from] InspectError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Collaborator(#[from] CollaboratorError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Gen(#[from] GenError),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    #[diagnostic(code(weld::cli::invalid_argument))]
    InvalidArgument(String),

    /// I/O failure on a specific path
    #[error("I/O error at {}: {source}", path.display())]
    #[diagnostic(code(weld::cli::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Configuration errors. All of them abort the build before any output is
/// touched.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// Explicit `--config` path does not exist
    #[error("Config file not found: {}", .0.display())]
    #[diagnostic(
        code(weld::config::not_found),
        help("Create a weld.config.json file or point --config at an existing one")
    )]
    NotFound(PathBuf),

    /// The file could not be parsed or has the wrong shape
    #[error("Failed to load configuration: {message}")]
    #[diagnostic(
        code(weld::config::invalid),
        help("Check weld.config.json syntax and field types")
    )]
    Load { message: String },

    #[error("No libraries configured")]
    #[diagnostic(
        code(weld::config::no_libraries),
        help("Add at least one entry to `libraries`")
    )]
    NoLibraries,

    /// Invalid value for a configuration field
    #[error("Invalid value for '{field}': {value}")]
    #[diagnostic(code(weld::config::invalid_value))]
    InvalidValue {
        field: String,
        value: String,
        #[help]
        hint: String,
    },
}

impl ConfigError {
    pub fn invalid_value(
        field: impl Into<String>,
        value: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field: field.into(),
            value: value.into(),
            hint: hint.into(),
        }
    }
}

/// Failures while discovering a library's exports.
///
/// Every variant is an input-contract violation: a library that cannot be
/// inspected has no defined module and the facade cannot be built.
#[derive(Debug, Error, Diagnostic)]
pub enum InspectError {
    #[error("Failed to start '{program}' to inspect '{specifier}': {source}")]
    #[diagnostic(
        code(weld::inspect::spawn_failed),
        help("Check that the runtime in `inspectCommand` is installed and on PATH")
    )]
    SpawnFailed {
        program: String,
        specifier: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not load module '{specifier}' (exit code {exit_code})")]
    #[diagnostic(code(weld::inspect::load_failed))]
    LoadFailed {
        specifier: String,
        exit_code: i32,
        #[help]
        stderr: String,
    },

    #[error("Unexpected inspection output for '{specifier}': {reason}")]
    #[diagnostic(code(weld::inspect::malformed_output))]
    MalformedOutput { specifier: String, reason: String },

    #[error("Module '{specifier}' does not export an object (got {kind})")]
    #[diagnostic(
        code(weld::inspect::not_an_object),
        help("Each library must export an object whose keys become facade exports")
    )]
    NotAnObject { specifier: String, kind: String },

    #[error("Failed to read library source {}: {source}", path.display())]
    #[diagnostic(code(weld::inspect::read_failed))]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to scan exports of {}", path.display())]
    #[diagnostic(code(weld::inspect::scan_failed))]
    ScanFailed {
        path: PathBuf,
        #[source]
        #[diagnostic_source]
        source: GenError,
    },
}

impl InspectError {
    pub fn spawn_failed(
        program: impl Into<String>,
        specifier: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::SpawnFailed {
            program: program.into(),
            specifier: specifier.into(),
            source,
        }
    }

    pub fn malformed(specifier: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedOutput {
            specifier: specifier.into(),
            reason: reason.into(),
        }
    }
}

/// Failures of the external declaration generator or bundler.
#[derive(Debug, Error, Diagnostic)]
pub enum CollaboratorError {
    /// Process could not be started
    #[error("Failed to start {tool} ('{program}'): {source}")]
    #[diagnostic(
        code(weld::collaborator::spawn_failed),
        help("Check that '{program}' is installed and on PATH")
    )]
    SpawnFailed {
        tool: &'static str,
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Process exited with a non-zero status
    #[error("{tool} exited with code {exit_code}")]
    #[diagnostic(code(weld::collaborator::exit_error))]
    Exit {
        tool: &'static str,
        exit_code: i32,
        #[help]
        stderr: String,
    },

    /// Process succeeded but did not produce the expected file
    #[error("{tool} finished without writing {}", path.display())]
    #[diagnostic(
        code(weld::collaborator::missing_output),
        help("Check the tool's configuration (for tsc: `declaration`, `emitDeclarationOnly`, `outDir`)")
    )]
    MissingOutput { tool: &'static str, path: PathBuf },
}

impl CollaboratorError {
    pub fn spawn_failed(tool: &'static str, program: impl Into<String>, source: std::io::Error) -> Self {
        Self::SpawnFailed {
            tool,
            program: program.into(),
            source,
        }
    }

    pub fn exit(tool: &'static str, exit_code: i32, stderr: impl Into<String>) -> Self {
        Self::Exit {
            tool,
            exit_code,
            stderr: stderr.into(),
        }
    }

    pub fn missing_output(tool: &'static str, path: impl Into<PathBuf>) -> Self {
        Self::MissingOutput {
            tool,
            path: path.into(),
        }
    }
}

/// Attach a path to I/O results.
pub trait ResultExt<T> {
    fn with_path(self, path: &Path) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path) -> Result<T> {
        self.map_err(|source| CliError::io(path, source))
    }
}

/// Convert a CLI error into a miette report for rendering.
pub fn cli_error_to_miette(err: CliError) -> Report {
    Report::new(err)
}
