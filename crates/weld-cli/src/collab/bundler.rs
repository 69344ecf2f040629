use std::path::PathBuf;

use async_trait::async_trait;

use super::{BuildSummary, BundleBuilder, ensure_written};
use crate::error::CollaboratorError;
use crate::process::{program_name, run_command};
use crate::variant::BuildVariant;

const TOOL: &str = "bundler";

/// Translate a variant into `bun build` arguments.
///
/// The entry point comes first, followed by
/// `--root --outdir --entry-naming --sourcemap`, then `--minify` and one
/// `--define K=V` per substitution.
pub fn bundle_args(variant: &BuildVariant) -> Vec<String> {
    let out_dir = variant.out_dir.display().to_string();
    let mut args = vec![
        variant.entry_point.display().to_string(),
        "--root".to_string(),
        out_dir.clone(),
        "--outdir".to_string(),
        out_dir,
        "--entry-naming".to_string(),
        variant.output_naming.clone(),
        format!("--sourcemap={}", variant.sourcemap.as_str()),
    ];

    if variant.minify {
        args.push("--minify".to_string());
    }

    for (key, value) in &variant.defines {
        args.push("--define".to_string());
        args.push(format!("{key}={value}"));
    }

    args
}

/// Bundles with the configured bundler command (`bun build` by default),
/// run in the project root.
#[derive(Debug, Clone)]
pub struct BunBundler {
    command: Vec<String>,
    root: PathBuf,
}

impl BunBundler {
    pub fn new(command: Vec<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            command,
            root: root.into(),
        }
    }
}

#[async_trait]
impl BundleBuilder for BunBundler {
    async fn build(&self, variant: &BuildVariant) -> Result<BuildSummary, CollaboratorError> {
        let output = run_command(&self.command, &bundle_args(variant), &self.root)
            .await
            .map_err(|e| CollaboratorError::spawn_failed(TOOL, program_name(&self.command), e))?;

        if !output.success {
            return Err(CollaboratorError::exit(
                TOOL,
                output.exit_code,
                output.stderr.trim(),
            ));
        }

        let bundle = variant.output_path();
        ensure_written(TOOL, &bundle).await?;

        Ok(BuildSummary {
            variant: variant.kind,
            outputs: vec![bundle],
            stdout: output.stdout,
            elapsed: output.elapsed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::VariantKind;
    use std::path::Path;

    #[test]
    fn test_debug_args() {
        let variant = BuildVariant::debug(Path::new("/p/dist/react.ts"), "react");
        assert_eq!(
            bundle_args(&variant),
            [
                "/p/dist/react.ts",
                "--root",
                "/p/dist",
                "--outdir",
                "/p/dist",
                "--entry-naming",
                "./react.js",
                "--sourcemap=inline",
            ]
        );
    }

    #[test]
    fn test_production_args() {
        let variant =
            BuildVariant::production(Path::new("/p/dist/react.ts"), "react", "process.env.NODE_ENV");
        let args = bundle_args(&variant);
        assert_eq!(args[6], "react.min.js");
        assert_eq!(args[7], "--sourcemap=none");
        assert_eq!(
            &args[8..],
            ["--minify", "--define", "process.env.NODE_ENV=\"production\""]
        );
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_build_with_stand_in() {
        let dir = tempfile::tempdir().unwrap();
        let facade = dir.path().join("react.ts");
        // `$1` is the entry point; write the bundle next to it.
        let bundler = BunBundler::new(
            vec![
                "sh".into(),
                "-c".into(),
                "echo bundled; touch \"$(dirname \"$1\")/react.min.js\"".into(),
                "sh".into(),
            ],
            dir.path(),
        );

        let variant = BuildVariant::production(&facade, "react", "process.env.NODE_ENV");
        let summary = bundler.build(&variant).await.unwrap();
        assert_eq!(summary.variant, VariantKind::Production);
        assert_eq!(summary.outputs, [dir.path().join("react.min.js")]);
        assert_eq!(summary.stdout.trim(), "bundled");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_build_failure() {
        let dir = tempfile::tempdir().unwrap();
        let bundler = BunBundler::new(
            vec![
                "sh".into(),
                "-c".into(),
                "echo 'Could not resolve: react' >&2; exit 1".into(),
                "sh".into(),
            ],
            dir.path(),
        );
        let variant = BuildVariant::debug(&dir.path().join("react.ts"), "react");
        let err = bundler.build(&variant).await.unwrap_err();
        assert!(matches!(
            err,
            CollaboratorError::Exit { exit_code: 1, ref stderr, .. } if stderr == "Could not resolve: react"
        ));
    }
}
