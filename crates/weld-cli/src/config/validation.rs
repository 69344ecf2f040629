use std::collections::HashSet;
use std::path::{Component, Path};

use weld_registry::is_valid_identifier;

use crate::config::WeldConfig;
use crate::error::{ConfigError, Result};

fn validate_command(field: &str, command: &[String]) -> Result<()> {
    match command.first() {
        None => Err(ConfigError::invalid_value(field, "[]", "Provide the program to run as the first element").into()),
        Some(program) if program.trim().is_empty() => Err(ConfigError::invalid_value(
            field,
            format!("{command:?}"),
            "The program name cannot be blank",
        )
        .into()),
        Some(_) => Ok(()),
    }
}

/// True for a relative path naming a directory strictly below its base:
/// plain components and `.` only, with at least one plain component.
pub fn is_nested_relative(path: &Path) -> bool {
    let mut nested = false;
    for component in path.components() {
        match component {
            Component::Normal(_) => nested = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    nested
}

impl WeldConfig {
    /// Validate configuration for logical consistency.
    pub fn validate(&self) -> Result<()> {
        if self.libraries.is_empty() {
            return Err(ConfigError::NoLibraries.into());
        }

        let mut seen = HashSet::new();
        for library in &self.libraries {
            if !is_valid_identifier(&library.name) {
                return Err(ConfigError::invalid_value(
                    "libraries[].name",
                    &library.name,
                    "Library names are import bindings and must be valid JavaScript identifiers",
                )
                .into());
            }
            if !seen.insert(library.name.as_str()) {
                return Err(ConfigError::invalid_value(
                    "libraries[].name",
                    &library.name,
                    "Each library name may appear only once",
                )
                .into());
            }
            if library.specifier.trim().is_empty() {
                return Err(ConfigError::invalid_value(
                    "libraries[].specifier",
                    format!("\"{}\" (library {})", library.specifier, library.name),
                    "Provide the module specifier to import, e.g. \"react\"",
                )
                .into());
            }
        }

        if self.base_name.is_empty()
            || self.base_name.contains(['/', '\\'])
            || self.base_name == "."
            || self.base_name == ".."
        {
            return Err(ConfigError::invalid_value(
                "baseName",
                &self.base_name,
                "Use a plain file stem such as \"react\"",
            )
            .into());
        }

        if !is_nested_relative(&self.out_dir) {
            return Err(ConfigError::invalid_value(
                "outDir",
                self.out_dir.display().to_string(),
                "The output directory is removed and recreated on every build; use a dedicated directory inside the project such as \"dist\" (no `..`, not absolute)",
            )
            .into());
        }

        validate_command("inspectCommand", &self.inspect_command)?;
        validate_command("declarationCommand", &self.declaration_command)?;
        validate_command("bundlerCommand", &self.bundler_command)?;

        if self.node_env_define.trim().is_empty() {
            return Err(ConfigError::invalid_value(
                "nodeEnvDefine",
                "\"\"",
                "Provide the expression to replace, e.g. \"process.env.NODE_ENV\"",
            )
            .into());
        }

        Ok(())
    }
}
