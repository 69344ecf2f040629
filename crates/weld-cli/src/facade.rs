//! Registry → aggregation → facade text, with checks.

use weld_gen::{FacadeEmitter, FacadeSource, validate_syntax};
use weld_registry::{LibraryRegistry, aggregate};

use crate::error::Result;

/// Aggregate `registry` and emit the facade, then check the emitted text
/// parses.
pub fn build_facade(registry: &LibraryRegistry) -> Result<FacadeSource> {
    let aggregation = aggregate(registry);

    let source = FacadeEmitter::default().emit(registry, &aggregation)?;
    validate_syntax(source.as_str())?;

    tracing::info!(
        libraries = registry.len(),
        named_exports = source.named_exports(),
        shadowed = aggregation.shadowed.len(),
        excluded = aggregation.excluded.len(),
        "facade generated"
    );

    Ok(source)
}
