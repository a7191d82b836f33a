//! Generate command report data structures.

use std::path::PathBuf;

use appkod_codegen::generation::Artifact;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Application name from the blueprint.
    pub name: String,

    /// Blueprint version.
    pub version: String,

    /// Validation warnings.
    pub warnings: Vec<String>,

    /// Generation result (files written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(PreviewResult),
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output directory.
    pub output_dir: PathBuf,
    /// Files created or updated.
    pub written: Vec<String>,
    /// Files that already had the generated content.
    pub unchanged: Vec<String>,
}

/// Result of a dry-run preview.
#[derive(Debug)]
pub struct PreviewResult {
    /// Files that would be generated.
    pub files: Vec<Artifact>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(preview) => Self::render_preview(out, preview),
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.preformatted(&format!("{} v{}", self.name, self.version));
        out.newline();

        out.section(&format!("Generated in {}", written.output_dir.display()));
        for path in &written.written {
            out.added_item(path);
        }
        for path in &written.unchanged {
            out.unchanged_item(path);
        }
        out.newline();
        out.preformatted(&format!(
            "{} written, {} unchanged",
            written.written.len(),
            written.unchanged.len()
        ));
    }

    fn render_preview(out: &mut dyn Output, preview: &PreviewResult) {
        for file in &preview.files {
            out.divider(&file.path);
            out.preformatted(file.content.trim_end());
        }

        out.divider("Summary");
        out.preformatted(&format!(
            "{} files would be generated",
            preview.files.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::output::BufferOutput;

    #[test]
    fn test_written_layout() {
        let report = GenerateReport {
            name: "Shop".to_string(),
            version: "1.0".to_string(),
            warnings: vec!["Unknown component type 'chart' on page /".to_string()],
            result: GenerationResult::Written(WrittenResult {
                output_dir: PathBuf::from("out"),
                written: vec!["api/routes.py".to_string()],
                unchanged: vec!["api/models.py".to_string()],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "warning: Unknown component type 'chart' on page /",
                "",
                "Shop v1.0",
                "",
                "Generated in out:",
                "  + api/routes.py",
                "  = api/models.py",
                "",
                "1 written, 1 unchanged",
            ]
        );
    }

    #[test]
    fn test_preview_layout() {
        let report = GenerateReport {
            name: "Shop".to_string(),
            version: "1.0".to_string(),
            warnings: Vec::new(),
            result: GenerationResult::Preview(PreviewResult {
                files: vec![Artifact::new("web/app/page.tsx", "'use client';\n")],
            }),
        };
        let mut out = BufferOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            [
                "── web/app/page.tsx ──",
                "'use client';",
                "── Summary ──",
                "1 files would be generated",
            ]
        );
    }
}
