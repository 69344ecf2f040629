//! Error types for facade generation

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while generating or checking facade source
#[derive(Error, Debug, Diagnostic)]
pub enum GenError {
    /// A symbol or binding cannot be written as a JavaScript identifier
    #[error("Invalid identifier: '{identifier}'{}", suggestion.as_ref().map(|s| format!(" - {}", s)).unwrap_or_default())]
    #[diagnostic(code(weld::gen::invalid_identifier))]
    InvalidIdentifier {
        identifier: String,
        suggestion: Option<String>,
    },

    /// Generated or scanned source failed to parse
    #[error("Code generation failed: {context}{}", reason.as_ref().map(|r| format!(" - {}", r)).unwrap_or_default())]
    #[diagnostic(code(weld::gen::codegen_failed))]
    CodegenFailed {
        context: String,
        reason: Option<String>,
    },
}

impl GenError {
    /// Create an InvalidIdentifier error
    pub fn invalid_identifier(identifier: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            suggestion: None,
        }
    }

    /// Create an InvalidIdentifier error that names the offending library
    pub fn invalid_symbol(identifier: impl Into<String>, library: &str) -> Self {
        Self::InvalidIdentifier {
            identifier: identifier.into(),
            suggestion: Some(format!(
                "exported by '{}'; rename it there or prefix it with '_' to keep it private",
                library
            )),
        }
    }

    /// Create an InvalidIdentifier error for a symbol that collides with a
    /// library import binding
    pub fn binding_clash(identifier: impl Into<String>, library: &str) -> Self {
        let identifier = identifier.into();
        let suggestion = format!(
            "exported by '{library}' but '{identifier}' is also a library import binding; rename that library"
        );
        Self::InvalidIdentifier {
            identifier,
            suggestion: Some(suggestion),
        }
    }

    /// Create a CodegenFailed error
    pub fn codegen_failed(context: impl Into<String>) -> Self {
        Self::CodegenFailed {
            context: context.into(),
            reason: None,
        }
    }

    /// Create a CodegenFailed error with reason
    pub fn codegen_failed_with_reason(
        context: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::CodegenFailed {
            context: context.into(),
            reason: Some(reason.into()),
        }
    }
}

/// Result type for code generation operations
pub type Result<T> = std::result::Result<T, GenError>;
