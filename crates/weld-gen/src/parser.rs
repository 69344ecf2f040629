//! Parsing helpers built on the OXC parser
//!
//! The facade is checked here before any external tool sees it, and library
//! sources are parsed here for static export scanning.

use oxc_allocator::Allocator;
use oxc_ast::ast::Program;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::error::{GenError, Result};

/// Parse options for reading source code
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Source type (JavaScript, TypeScript, JSX, TSX)
    pub source_type: SourceType,
    /// Allow parsing errors (returns partial AST)
    pub allow_errors: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            source_type: SourceType::mjs(),
            allow_errors: false,
        }
    }
}

impl ParseOptions {
    /// Create parse options from file path (auto-detects source type)
    pub fn from_path(path: &str) -> Self {
        Self {
            source_type: SourceType::from_path(path).unwrap_or(SourceType::mjs()),
            allow_errors: false,
        }
    }

    /// Create parse options for a TypeScript module
    pub fn typescript() -> Self {
        Self {
            source_type: SourceType::ts(),
            allow_errors: false,
        }
    }
}

/// Parse diagnostic information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDiagnostic {
    /// Error message
    pub message: String,
}

/// Parse `source` into a program allocated in `allocator`.
///
/// Returns the program together with any diagnostics. When
/// `options.allow_errors` is false, diagnostics turn into
/// [`GenError::CodegenFailed`].
pub(crate) fn parse<'a>(
    allocator: &'a Allocator,
    source: &'a str,
    options: ParseOptions,
    context: &str,
) -> Result<(Program<'a>, Vec<ParseDiagnostic>)> {
    let result = Parser::new(allocator, source, options.source_type).parse();

    let diagnostics: Vec<ParseDiagnostic> = result
        .errors
        .iter()
        .map(|err| ParseDiagnostic {
            message: err.to_string(),
        })
        .collect();

    if !options.allow_errors && !diagnostics.is_empty() {
        return Err(GenError::codegen_failed_with_reason(
            context,
            diagnostics
                .iter()
                .map(|d| d.message.clone())
                .collect::<Vec<_>>()
                .join(", "),
        ));
    }

    Ok((result.program, diagnostics))
}

/// Check that generated facade source is a syntactically valid TypeScript
/// module.
///
/// # Errors
///
/// Returns [`GenError::CodegenFailed`] listing every parser diagnostic.
pub fn validate_syntax(source: &str) -> Result<()> {
    let allocator = Allocator::default();
    parse(
        &allocator,
        source,
        ParseOptions::typescript(),
        "Generated facade is not valid TypeScript",
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_typed_reexports() {
        let src = "import React from 'react';\n\
                   export const useState = React.useState as typeof React.useState;\n\
                   export default { ...React } as typeof React;";
        assert!(validate_syntax(src).is_ok());
    }

    #[test]
    fn rejects_broken_source() {
        let err = validate_syntax("export const = 1;").unwrap_err();
        assert!(matches!(err, GenError::CodegenFailed { reason: Some(_), .. }));
    }

    #[test]
    fn options_from_path() {
        assert!(ParseOptions::from_path("index.ts").source_type.is_typescript());
        assert!(!ParseOptions::from_path("index.mjs").source_type.is_typescript());
        assert!(!ParseOptions::default().allow_errors);
    }
}
