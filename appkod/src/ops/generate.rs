//! Generate operation - code generation from a blueprint.

use std::path::Path;

use appkod_blueprint::Blueprint;
use appkod_engine::{Engine, EngineConfig};
use eyre::Result;

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated code.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
}

/// Execute the generate operation.
///
/// Fails on an invalid blueprint before anything is written.
pub fn generate(
    blueprint: Blueprint,
    config: EngineConfig,
    opts: GenerateOptions,
) -> Result<GenerateReport> {
    let engine = Engine::with_config(blueprint, config);
    let warnings = engine.validate().warnings();
    let metadata = engine.metadata();

    let result = if opts.dry_run {
        let files = engine.generate_all()?.into_iter().collect();
        GenerationResult::Preview(PreviewResult { files })
    } else {
        let stats = engine.write_all(opts.output_dir)?;
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: stats.written,
            unchanged: stats.unchanged,
        })
    };

    Ok(GenerateReport {
        name: metadata.name,
        version: metadata.version,
        warnings,
        result,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::ops::init::EXAMPLE_BLUEPRINT;

    fn example() -> Blueprint {
        Blueprint::from_yaml(EXAMPLE_BLUEPRINT).unwrap()
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let report = generate(
            example(),
            EngineConfig::default(),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: true,
            },
        )
        .unwrap();

        let GenerationResult::Preview(preview) = report.result else {
            panic!("expected a preview");
        };
        assert_eq!(preview.files[0].path, "prisma/schema.prisma");
        assert!(fs_is_empty(dir.path()));
    }

    #[test]
    fn test_write_reports_changes() {
        let dir = TempDir::new().unwrap();

        let first = write(dir.path());
        assert!(!first.written.is_empty());
        assert!(dir.path().join("api/routes.py").exists());

        let second = write(dir.path());
        assert!(second.written.is_empty());
        assert_eq!(second.unchanged, first.written);
    }

    #[test]
    fn test_invalid_blueprint_fails() {
        let dir = TempDir::new().unwrap();
        let blueprint = Blueprint::from_yaml("name: Broken").unwrap();
        let err = generate(
            blueprint,
            EngineConfig::default(),
            GenerateOptions {
                output_dir: dir.path(),
                dry_run: false,
            },
        )
        .unwrap_err();

        assert!(err.to_string().contains("Missing required field: version"));
        assert!(fs_is_empty(dir.path()));
    }

    fn write(output_dir: &Path) -> WrittenResult {
        let opts = GenerateOptions {
            output_dir,
            dry_run: false,
        };
        match generate(example(), EngineConfig::default(), opts).unwrap().result {
            GenerationResult::Written(written) => written,
            GenerationResult::Preview(_) => panic!("expected written files"),
        }
    }

    fn fs_is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }
}
