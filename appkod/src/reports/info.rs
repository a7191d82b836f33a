//! Info command report data structures.

use std::path::PathBuf;

use appkod_blueprint::Metadata;

use super::output::{Output, Report};

/// Report data from blueprint info.
#[derive(Debug)]
pub struct InfoReport {
    /// Blueprint metadata with defaults applied.
    pub metadata: Metadata,
    /// Blueprint file path.
    pub blueprint_path: PathBuf,
    /// Section statistics.
    pub stats: Stats,
    /// One `name (N fields)` line per table.
    pub tables: Vec<String>,
}

/// Blueprint statistics.
#[derive(Debug, Default)]
pub struct Stats {
    pub tables: usize,
    pub fields: usize,
    pub endpoints: usize,
    pub pages: usize,
    /// Components on all pages, nested ones included.
    pub components: usize,
    pub workflows: usize,
}

impl Report for InfoReport {
    fn render(&self, out: &mut dyn Output) {
        let metadata = &self.metadata;
        out.newline();

        // Header
        out.preformatted(&format!("  {}", metadata.name));
        out.preformatted(&format!("  {}", "─".repeat(metadata.name.chars().count())));
        if !metadata.description.is_empty() {
            out.preformatted(&format!("  {}", metadata.description));
        }
        out.newline();

        // Metadata
        out.preformatted(&format!("  Version     {}", metadata.version));
        if !metadata.author.is_empty() {
            out.preformatted(&format!("  Author      {}", metadata.author));
        }
        out.preformatted(&format!("  Blueprint   {}", self.blueprint_path.display()));
        out.newline();

        // Statistics
        out.preformatted("  Statistics");
        out.preformatted("  ──────────");
        out.preformatted(&format!(
            "  Tables      {} ({} fields)",
            self.stats.tables, self.stats.fields
        ));
        out.preformatted(&format!("  Endpoints   {}", self.stats.endpoints));
        out.preformatted(&format!(
            "  Pages       {} ({} components)",
            self.stats.pages, self.stats.components
        ));
        out.preformatted(&format!("  Workflows   {}", self.stats.workflows));

        if !self.tables.is_empty() {
            out.newline();
            out.preformatted("  Tables");
            out.preformatted("  ──────");
            for table in &self.tables {
                out.preformatted(&format!("  {}", table));
            }
        }
    }
}
