//! Static discovery of an ES module's runtime exports.
//!
//! Used when a library is given as a source file instead of an installed
//! package, so its surface can be read without executing it.

use oxc_allocator::Allocator;
use oxc_ast::ast::{BindingPatternKind, Declaration, ModuleDeclaration, ModuleExportName};

use crate::error::Result;
use crate::parser::{ParseOptions, parse};

/// Exports found by [`scan_exports`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportScan {
    /// Runtime export names in namespace enumeration order
    pub names: Vec<String>,
    /// Sources of `export * from '...'` that were not followed
    pub unresolved_star_sources: Vec<String>,
}

fn export_name(name: &ModuleExportName<'_>) -> String {
    match name {
        ModuleExportName::IdentifierName(ident) => ident.name.to_string(),
        ModuleExportName::IdentifierReference(ident) => ident.name.to_string(),
        ModuleExportName::StringLiteral(lit) => lit.value.to_string(),
    }
}

fn declaration_names(decl: &Declaration<'_>, names: &mut Vec<String>) {
    match decl {
        Declaration::VariableDeclaration(var) => {
            for declarator in &var.declarations {
                // Destructured exports are not expanded.
                if let BindingPatternKind::BindingIdentifier(ident) = &declarator.id.kind {
                    names.push(ident.name.to_string());
                }
            }
        }
        Declaration::FunctionDeclaration(func) => {
            if let Some(id) = &func.id {
                names.push(id.name.to_string());
            }
        }
        Declaration::ClassDeclaration(class) => {
            if let Some(id) = &class.id {
                names.push(id.name.to_string());
            }
        }
        Declaration::TSEnumDeclaration(enumeration) => {
            if !enumeration.declare && !enumeration.r#const {
                names.push(enumeration.id.name.to_string());
            }
        }
        _ => {}
    }
}

/// List the runtime named exports of an ES module.
///
/// Type-only exports and `default` are skipped. Names come back sorted by
/// UTF-16 code units, the order in which a module namespace object
/// enumerates its keys.
///
/// # Errors
///
/// Returns [`GenError::CodegenFailed`](crate::GenError::CodegenFailed) when
/// the source does not parse.
pub fn scan_exports(path_hint: &str, source: &str) -> Result<ExportScan> {
    let allocator = Allocator::default();
    let context = format!("Failed to parse {}", path_hint);
    let (program, _) = parse(&allocator, source, ParseOptions::from_path(path_hint), &context)?;

    let mut scan = ExportScan::default();

    for stmt in program.body.iter() {
        let Some(module_decl) = stmt.as_module_declaration() else {
            continue;
        };

        match module_decl {
            ModuleDeclaration::ExportNamedDeclaration(named) => {
                if named.export_kind.is_type() {
                    continue;
                }
                if let Some(decl) = &named.declaration {
                    declaration_names(decl, &mut scan.names);
                }
                for spec in &named.specifiers {
                    if spec.export_kind.is_type() {
                        continue;
                    }
                    scan.names.push(export_name(&spec.exported));
                }
            }
            ModuleDeclaration::ExportAllDeclaration(all) => {
                if all.export_kind.is_type() {
                    continue;
                }
                match &all.exported {
                    Some(exported) => scan.names.push(export_name(exported)),
                    None => scan
                        .unresolved_star_sources
                        .push(all.source.value.to_string()),
                }
            }
            _ => {}
        }
    }

    scan.names.retain(|name| name != "default");
    scan.names.sort_by(|a, b| a.encode_utf16().cmp(b.encode_utf16()));
    scan.names.dedup();

    tracing::debug!(
        path = path_hint,
        exports = scan.names.len(),
        unresolved = scan.unresolved_star_sources.len(),
        "scanned module exports"
    );

    Ok(scan)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_declarations_and_specifiers() {
        let src = r#"
            export const b = 1, a = 2;
            export function render() {}
            export class Component {}
            const local = 3;
            export { local as renamed, local };
        "#;
        let scan = scan_exports("lib.mjs", src).unwrap();
        assert_eq!(
            scan.names,
            vec!["Component", "a", "b", "local", "renamed", "render"]
        );
    }

    #[test]
    fn skips_default_and_types() {
        let src = r#"
            export default function main() {}
            export type Props = { a: string };
            export interface State {}
            export const value = 1;
        "#;
        let scan = scan_exports("lib.ts", src).unwrap();
        assert_eq!(scan.names, vec!["value"]);
    }

    #[test]
    fn star_exports() {
        let src = r#"
            export * from './inner.js';
            export * as utils from './utils.js';
        "#;
        let scan = scan_exports("index.js", src).unwrap();
        assert_eq!(scan.names, vec!["utils"]);
        assert_eq!(scan.unresolved_star_sources, vec!["./inner.js"]);
    }

    #[test]
    fn names_sort_by_utf16_code_units() {
        // U+10400 encodes as a surrogate pair (0xD801...), which sorts before U+FF5A.
        let scan = scan_exports(
            "lib.mjs",
            "const a = 1, b = 2, c = 3;\nexport { a as \"\u{FF5A}\", b as \"\u{10400}\", c as z };",
        )
        .unwrap();
        assert_eq!(scan.names, ["z", "\u{10400}", "\u{FF5A}"]);
    }

    #[test]
    fn parse_error_is_reported() {
        assert!(scan_exports("bad.js", "export const = ;").is_err());
    }
}
