//! Error types for registry construction

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised while assembling a [`LibraryRegistry`](crate::LibraryRegistry).
///
/// Every variant is an input-contract violation: the build aborts before any
/// file is written.
#[derive(Error, Debug, Diagnostic, PartialEq, Eq)]
pub enum RegistryError {
    /// A library was registered without a name
    #[error("Library name cannot be empty (specifier '{specifier}')")]
    #[diagnostic(
        code(weld::registry::empty_name),
        help("Give every library an import binding such as `React`")
    )]
    EmptyName { specifier: String },

    /// The library name cannot be used as an import binding
    #[error("Library name '{name}' is not a valid JavaScript identifier")]
    #[diagnostic(
        code(weld::registry::invalid_name),
        help("Names must start with a letter, `_` or `$` and must not be reserved words")
    )]
    InvalidName { name: String },

    /// Two libraries share a name
    #[error("Library '{name}' is registered more than once")]
    #[diagnostic(
        code(weld::registry::duplicate),
        help("Each library needs a distinct name; order decides collisions between symbols, not libraries")
    )]
    Duplicate { name: String },
}

impl RegistryError {
    pub fn empty_name(specifier: impl Into<String>) -> Self {
        Self::EmptyName {
            specifier: specifier.into(),
        }
    }

    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }

    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::Duplicate { name: name.into() }
    }
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, RegistryError>;
