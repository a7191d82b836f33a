//! Info operation - blueprint information.

use std::path::Path;

use appkod_blueprint::{Blueprint, Component};

use crate::reports::{InfoReport, Stats};

/// Collect metadata and statistics from the blueprint.
pub fn info(blueprint: &Blueprint, path: &Path) -> InfoReport {
    let metadata = blueprint.metadata();
    let tables = blueprint
        .entities()
        .iter()
        .map(|e| format!("{} ({} fields)", e.name, e.fields.len()))
        .collect();

    InfoReport {
        metadata,
        blueprint_path: std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()),
        stats: collect_stats(blueprint),
        tables,
    }
}

fn collect_stats(blueprint: &Blueprint) -> Stats {
    Stats {
        tables: blueprint.entities().len(),
        fields: blueprint.entities().iter().map(|e| e.fields.len()).sum(),
        endpoints: blueprint.endpoints().len(),
        pages: blueprint.pages().len(),
        components: blueprint
            .pages()
            .iter()
            .map(|p| count_components(&p.components))
            .sum(),
        workflows: blueprint.workflows().len(),
    }
}

fn count_components(components: &[Component]) -> usize {
    components
        .iter()
        .map(|c| 1 + count_components(&c.children))
        .sum()
}
