use serde_json::{Value, json};
use weld_registry::{LibraryRegistry, aggregate, merge_default};

use crate::cli::Cli;
use crate::config::WeldConfig;
use crate::error::Result;

/// JSON view of how a registry aggregates.
///
/// `namedExports`, `shadowed` and `excluded` describe the curated named
/// surface; `defaultExport` maps every key of the spread default export to
/// the library whose value it ends up with.
pub fn inspection_report(registry: &LibraryRegistry) -> Value {
    let aggregation = aggregate(registry);
    let default_export = merge_default(registry);

    let named: Vec<Value> = aggregation
        .exports
        .iter()
        .map(|record| json!({ "symbol": record.symbol_name, "library": record.owning_library }))
        .collect();
    let default_members: serde_json::Map<String, Value> = default_export
        .iter()
        .map(|(key, member)| (key.to_string(), Value::String(member.library.clone())))
        .collect();

    json!({
        "libraries": registry.names().collect::<Vec<_>>(),
        "namedExports": named,
        "shadowed": aggregation.shadowed,
        "excluded": aggregation.excluded,
        "defaultExport": default_members,
    })
}

/// Execute `weld inspect`: print the aggregation report to stdout.
pub async fn inspect_execute(cli: &Cli) -> Result<()> {
    let root = super::resolve_project_root(cli.cwd.as_deref())?;
    let config = WeldConfig::load(&root, cli.config.as_deref())?;
    let registry = super::load_registry(&root, &config).await?;

    let report = inspection_report(&registry);
    println!("{report:#}");
    Ok(())
}
