//! Discovering what each configured library exports.
//!
//! A library is inspected at runtime by importing its specifier in a
//! JavaScript runtime, or statically by scanning an ES module on disk when
//! its config entry names a `source` file.

mod runtime;
mod source;

use async_trait::async_trait;
use weld_registry::{LibraryEntry, LibraryRegistry, ModuleNamespace};

use crate::config::LibrarySpec;
use crate::error::{InspectError, Result};

pub use runtime::{RuntimeInspector, parse_inspection};
pub use source::SourceInspector;

/// Produces the export namespace of one library.
#[async_trait]
pub trait ModuleInspector: Send + Sync {
    async fn inspect(&self, library: &LibrarySpec) -> std::result::Result<ModuleNamespace, InspectError>;
}

/// Inspect every library in order and assemble the registry.
///
/// Libraries with a `source` go to `static_inspector`, the rest to
/// `runtime`. The first failure aborts.
pub async fn inspect_registry(
    libraries: &[LibrarySpec],
    runtime: &dyn ModuleInspector,
    static_inspector: &dyn ModuleInspector,
) -> Result<LibraryRegistry> {
    let mut registry = LibraryRegistry::new();

    for library in libraries {
        let inspector = if library.source.is_some() {
            static_inspector
        } else {
            runtime
        };
        let module = inspector.inspect(library).await?;

        tracing::debug!(
            library = %library.name,
            specifier = %library.specifier,
            exports = module.len(),
            "inspected library"
        );

        registry.push(LibraryEntry::new(
            library.name.as_str(),
            library.specifier.as_str(),
            module,
        ))?;
    }

    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use std::sync::Mutex;

    /// Returns canned namespaces and records which libraries it saw.
    #[derive(Default)]
    struct Canned {
        seen: Mutex<Vec<String>>,
        fail_on: Option<&'static str>,
    }

    #[async_trait]
    impl ModuleInspector for Canned {
        async fn inspect(
            &self,
            library: &LibrarySpec,
        ) -> std::result::Result<ModuleNamespace, InspectError> {
            self.seen.lock().unwrap().push(library.name.clone());
            if self.fail_on == Some(library.name.as_str()) {
                return Err(InspectError::malformed(&library.specifier, "boom"));
            }
            Ok(ModuleNamespace::from_names([format!("{}Thing", library.name.to_lowercase())]))
        }
    }

    #[tokio::test]
    async fn test_routes_by_source() {
        let runtime = Canned::default();
        let statics = Canned::default();
        let libraries = vec![
            LibrarySpec::new("A", "a"),
            LibrarySpec::new("B", "b").with_source("b.mjs"),
            LibrarySpec::new("C", "c"),
        ];

        let registry = inspect_registry(&libraries, &runtime, &statics).await.unwrap();

        assert_eq!(registry.names().collect::<Vec<_>>(), ["A", "B", "C"]);
        assert_eq!(registry.get("B").unwrap().specifier(), "b");
        assert!(registry.get("C").unwrap().module().contains("cThing"));
        assert_eq!(*runtime.seen.lock().unwrap(), ["A", "C"]);
        assert_eq!(*statics.seen.lock().unwrap(), ["B"]);
    }

    #[tokio::test]
    async fn test_stops_at_first_failure() {
        let runtime = Canned {
            fail_on: Some("A"),
            ..Canned::default()
        };
        let statics = Canned::default();
        let libraries = vec![LibrarySpec::new("A", "a"), LibrarySpec::new("B", "b")];

        let err = inspect_registry(&libraries, &runtime, &statics)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Inspect(InspectError::MalformedOutput { .. })));
        assert_eq!(*runtime.seen.lock().unwrap(), ["A"]);
    }

    #[tokio::test]
    async fn test_duplicate_names_rejected() {
        let runtime = Canned::default();
        let libraries = vec![LibrarySpec::new("A", "a"), LibrarySpec::new("A", "b")];
        let err = inspect_registry(&libraries, &runtime, &runtime)
            .await
            .unwrap_err();
        assert!(matches!(err, CliError::Registry(_)));
    }
}
