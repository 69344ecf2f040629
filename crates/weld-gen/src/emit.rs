//! Serialization of an aggregation into facade source text.

use weld_registry::{Aggregation, LibraryRegistry, is_valid_identifier};

use crate::error::{GenError, Result};
use crate::format::FormatOptions;

/// Generated facade module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacadeSource {
    text: String,
    named_exports: usize,
}

impl FacadeSource {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Number of `export const` declarations in the module.
    pub fn named_exports(&self) -> usize {
        self.named_exports
    }
}

impl std::fmt::Display for FacadeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Writes the facade module for a registry and its aggregation.
///
/// The output has three sections:
///
/// ```text
/// import React from 'react';
/// import ReactDOM from 'react-dom';
///
/// export const useState = React.useState as typeof React.useState;
/// export const createPortal = ReactDOM.createPortal as typeof ReactDOM.createPortal;
/// export default {
///   ...React,
///   ...ReactDOM
/// } as typeof React & typeof ReactDOM;
/// ```
///
/// Each library is imported rather than inlined so the facade keeps live
/// bindings to the real implementation. The `as typeof` annotation lets the
/// declaration step keep each export's exact type.
#[derive(Debug, Clone, Default)]
pub struct FacadeEmitter {
    options: FormatOptions,
}

impl FacadeEmitter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Emit the facade source.
    ///
    /// # Errors
    ///
    /// Returns [`GenError::InvalidIdentifier`] when an aggregated symbol
    /// cannot be declared with `export const` (including a symbol named
    /// like one of the library import bindings), and
    /// [`GenError::CodegenFailed`] when an export record names a library
    /// missing from the registry.
    pub fn emit(&self, registry: &LibraryRegistry, aggregation: &Aggregation) -> Result<FacadeSource> {
        let semi = self.options.semi();
        let mut lines = Vec::with_capacity(registry.len() + aggregation.len() + registry.len() + 3);

        for library in registry {
            if !is_valid_identifier(library.name()) {
                return Err(GenError::invalid_identifier(library.name()));
            }
            lines.push(format!(
                "import {} from {}{}",
                library.name(),
                self.options.quote_style.quote(library.specifier()),
                semi
            ));
        }
        lines.push(String::new());

        for record in &aggregation.exports {
            let owner = &record.owning_library;
            let symbol = &record.symbol_name;
            if registry.get(owner).is_none() {
                return Err(GenError::codegen_failed_with_reason(
                    format!("export '{symbol}'"),
                    format!("library '{owner}' is not registered"),
                ));
            }
            if !is_valid_identifier(symbol) {
                return Err(GenError::invalid_symbol(symbol.as_str(), owner));
            }
            if registry.get(symbol).is_some() {
                return Err(GenError::binding_clash(symbol.as_str(), owner));
            }
            lines.push(format!(
                "export const {symbol} = {owner}.{symbol} as typeof {owner}.{symbol}{semi}"
            ));
        }

        lines.push(self.default_export(registry));

        let mut text = lines.join("\n");
        if self.options.final_newline {
            text.push('\n');
        }

        tracing::debug!(
            libraries = registry.len(),
            named_exports = aggregation.len(),
            bytes = text.len(),
            "emitted facade source"
        );

        Ok(FacadeSource {
            text,
            named_exports: aggregation.len(),
        })
    }

    fn default_export(&self, registry: &LibraryRegistry) -> String {
        let semi = self.options.semi();
        if registry.is_empty() {
            return format!("export default {{}}{semi}");
        }

        let indent = self.options.indent.unit();
        let spreads: Vec<String> = registry
            .names()
            .map(|name| format!("{indent}...{name}"))
            .collect();
        let trailing = if self.options.trailing_commas { "," } else { "" };
        let types: Vec<String> = registry.names().map(|name| format!("typeof {name}")).collect();

        format!(
            "export default {{\n{}{}\n}} as {}{}",
            spreads.join(",\n"),
            trailing,
            types.join(" & "),
            semi
        )
    }
}

/// Emit with default formatting.
pub fn emit(registry: &LibraryRegistry, aggregation: &Aggregation) -> Result<FacadeSource> {
    FacadeEmitter::default().emit(registry, aggregation)
}
