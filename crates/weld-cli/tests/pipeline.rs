//! Build pipeline tests with in-process collaborators.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tempfile::TempDir;
use weld_cli::collab::{BuildSummary, BundleBuilder, DeclarationGenerator};
use weld_cli::commands::{Collaborators, run_build};
use weld_cli::config::{LibrarySpec, WeldConfig};
use weld_cli::inspect::ModuleInspector;
use weld_cli::variant::{BuildVariant, SourceMapMode, VariantKind};
use weld_cli::{CliError, CollaboratorError, InspectError};
use weld_registry::ModuleNamespace;

struct FakeInspector {
    modules: HashMap<String, Vec<&'static str>>,
}

impl FakeInspector {
    fn new(modules: &[(&str, &[&'static str])]) -> Self {
        Self {
            modules: modules
                .iter()
                .map(|(name, keys)| (name.to_string(), keys.to_vec()))
                .collect(),
        }
    }
}

#[async_trait]
impl ModuleInspector for FakeInspector {
    async fn inspect(&self, library: &LibrarySpec) -> Result<ModuleNamespace, InspectError> {
        match self.modules.get(&library.name) {
            Some(keys) => Ok(ModuleNamespace::from_names(keys.iter().copied())),
            None => Err(InspectError::LoadFailed {
                specifier: library.specifier.clone(),
                exit_code: 1,
                stderr: "Cannot find module".to_string(),
            }),
        }
    }
}

#[derive(Default)]
struct FakeDeclarations {
    fail: bool,
    calls: Mutex<Vec<PathBuf>>,
}

#[async_trait]
impl DeclarationGenerator for FakeDeclarations {
    async fn generate(&self, facade: &Path) -> Result<PathBuf, CollaboratorError> {
        self.calls.lock().unwrap().push(facade.to_path_buf());
        assert!(facade.is_file(), "facade must exist before declarations run");
        if self.fail {
            return Err(CollaboratorError::exit("declaration generator", 2, "error TS2307"));
        }
        let path = facade.with_extension("d.ts");
        fs::write(&path, "export {};\n").unwrap();
        Ok(path)
    }
}

#[derive(Default)]
struct FakeBundler {
    fail_on: Option<VariantKind>,
    seen: Mutex<Vec<BuildVariant>>,
}

#[async_trait]
impl BundleBuilder for FakeBundler {
    async fn build(&self, variant: &BuildVariant) -> Result<BuildSummary, CollaboratorError> {
        self.seen.lock().unwrap().push(variant.clone());
        if self.fail_on == Some(variant.kind) {
            return Err(CollaboratorError::exit("bundler", 1, "Could not resolve"));
        }
        let out = variant.output_path();
        fs::write(&out, format!("// {}\n", variant.kind)).unwrap();
        Ok(BuildSummary {
            variant: variant.kind,
            outputs: vec![out],
            stdout: String::new(),
            elapsed: Duration::from_millis(5),
        })
    }
}

fn react_inspector() -> FakeInspector {
    FakeInspector::new(&[
        ("React", &["Children", "useState", "version", "__SECRET_INTERNALS", "unstable_act"]),
        ("ReactDOM", &["createPortal", "version", "flushSync"]),
        ("ReactDOMClient", &["createRoot", "hydrateRoot", "version"]),
        ("JSX", &["Fragment", "jsx", "jsxs"]),
    ])
}

async fn build(
    root: &Path,
    inspector: &FakeInspector,
    declarations: &FakeDeclarations,
    bundler: &FakeBundler,
) -> (Result<(), CliError>, Vec<String>) {
    let config = WeldConfig::default_config();
    let collaborators = Collaborators {
        runtime: inspector,
        statics: inspector,
        declarations,
        bundler,
    };
    let mut lines = Vec::new();
    let mut progress = |line: &str| lines.push(line.to_string());
    let result = run_build(root, &config, collaborators, &mut progress)
        .await
        .map(|_| ());
    (result, lines)
}

fn stale_output(root: &Path) -> PathBuf {
    let dist = root.join("dist");
    fs::create_dir_all(&dist).unwrap();
    let stale = dist.join("stale.js");
    fs::write(&stale, "old").unwrap();
    stale
}

#[tokio::test]
async fn test_full_build_produces_every_artifact() {
    let dir = TempDir::new().unwrap();
    let stale = stale_output(dir.path());
    let declarations = FakeDeclarations::default();
    let bundler = FakeBundler::default();

    let (result, lines) = build(dir.path(), &react_inspector(), &declarations, &bundler).await;
    result.unwrap();

    assert_eq!(
        lines,
        [
            "Created react.ts source",
            "Created react.d.ts declaration",
            "Built react.js (debug)",
            "Built react.min.js (production)",
        ]
    );

    let dist = dir.path().join("dist");
    assert!(!stale.exists(), "output directory is reset");
    for name in ["react.ts", "react.d.ts", "react.js", "react.min.js"] {
        assert!(dist.join(name).is_file(), "{name} missing");
    }

    let facade = fs::read_to_string(dist.join("react.ts")).unwrap();
    assert!(facade.starts_with("import React from 'react';\n"));
    assert!(facade.contains("export const version = React.version as typeof React.version;"));
    assert!(!facade.contains("ReactDOM.version as"));
    assert!(!facade.contains("unstable_act"));
    assert!(facade.ends_with("} as typeof React & typeof ReactDOM & typeof ReactDOMClient & typeof JSX;"));

    let seen = bundler.seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].kind, VariantKind::Debug);
    assert_eq!(seen[0].entry_point, dist.join("react.ts"));
    assert_eq!(seen[0].sourcemap, SourceMapMode::Inline);
    assert!(!seen[0].minify);
    assert_eq!(seen[1].kind, VariantKind::Production);
    assert!(seen[1].minify);
    assert_eq!(
        seen[1].defines.get("process.env.NODE_ENV").map(String::as_str),
        Some("\"production\"")
    );
}

#[tokio::test]
async fn test_uninspectable_library_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let stale = stale_output(dir.path());
    let inspector = FakeInspector::new(&[("React", &["useState"])]);
    let declarations = FakeDeclarations::default();
    let bundler = FakeBundler::default();

    let (result, lines) = build(dir.path(), &inspector, &declarations, &bundler).await;

    assert!(matches!(
        result,
        Err(CliError::Inspect(InspectError::LoadFailed { ref specifier, .. })) if specifier == "react-dom"
    ));
    assert!(lines.is_empty());
    assert!(stale.exists());
    assert!(declarations.calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_invalid_symbol_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let stale = stale_output(dir.path());
    let inspector = FakeInspector::new(&[
        ("React", &["useState", "default"]),
        ("ReactDOM", &[]),
        ("ReactDOMClient", &[]),
        ("JSX", &[]),
    ]);

    let (result, _) = build(
        dir.path(),
        &inspector,
        &FakeDeclarations::default(),
        &FakeBundler::default(),
    )
    .await;

    assert!(matches!(result, Err(CliError::Gen(_))));
    assert!(stale.exists());
}

#[tokio::test]
async fn test_declaration_failure_stops_before_bundling() {
    let dir = TempDir::new().unwrap();
    let declarations = FakeDeclarations {
        fail: true,
        ..FakeDeclarations::default()
    };
    let bundler = FakeBundler::default();

    let (result, lines) = build(dir.path(), &react_inspector(), &declarations, &bundler).await;

    assert!(matches!(
        result,
        Err(CliError::Collaborator(CollaboratorError::Exit { exit_code: 2, .. }))
    ));
    assert_eq!(lines, ["Created react.ts source"]);
    assert!(bundler.seen.lock().unwrap().is_empty());
    assert!(dir.path().join("dist/react.ts").is_file());
}

#[tokio::test]
async fn test_debug_bundle_failure_skips_production() {
    let dir = TempDir::new().unwrap();
    let bundler = FakeBundler {
        fail_on: Some(VariantKind::Debug),
        ..FakeBundler::default()
    };

    let (result, lines) = build(
        dir.path(),
        &react_inspector(),
        &FakeDeclarations::default(),
        &bundler,
    )
    .await;

    assert!(matches!(result, Err(CliError::Collaborator(_))));
    assert_eq!(lines.len(), 2);
    let seen = bundler.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert!(!dir.path().join("dist/react.min.js").exists());
}

#[tokio::test]
async fn test_rebuild_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let inspector = react_inspector();

    let (first, _) = build(
        dir.path(),
        &inspector,
        &FakeDeclarations::default(),
        &FakeBundler::default(),
    )
    .await;
    first.unwrap();
    let before = fs::read(dir.path().join("dist/react.ts")).unwrap();

    let (second, _) = build(
        dir.path(),
        &inspector,
        &FakeDeclarations::default(),
        &FakeBundler::default(),
    )
    .await;
    second.unwrap();
    let after = fs::read(dir.path().join("dist/react.ts")).unwrap();

    assert_eq!(before, after);
}
