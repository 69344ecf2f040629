use std::path::PathBuf;

use async_trait::async_trait;
use weld_gen::scan_exports;
use weld_registry::ModuleNamespace;

use super::ModuleInspector;
use crate::config::LibrarySpec;
use crate::error::InspectError;

/// Inspects libraries by statically scanning their ES module source.
#[derive(Debug, Clone)]
pub struct SourceInspector {
    root: PathBuf,
}

impl SourceInspector {
    /// Relative `source` paths are resolved against `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ModuleInspector for SourceInspector {
    async fn inspect(&self, library: &LibrarySpec) -> Result<ModuleNamespace, InspectError> {
        let Some(source) = &library.source else {
            return Err(InspectError::malformed(
                &library.specifier,
                "no source file configured",
            ));
        };
        let path = self.root.join(source);

        let text = tokio::fs::read_to_string(&path)
            .await
            .map_err(|source| InspectError::ReadFailed {
                path: path.clone(),
                source,
            })?;

        let scan = scan_exports(&path.to_string_lossy(), &text).map_err(|source| {
            InspectError::ScanFailed {
                path: path.clone(),
                source,
            }
        })?;

        for star in &scan.unresolved_star_sources {
            tracing::warn!(
                library = %library.name,
                source = %star,
                "`export *` is not followed by static inspection; its names are missing"
            );
        }

        Ok(ModuleNamespace::from_names(scan.names))
    }
}
