//! Init operation - example blueprint.

use std::path::Path;

use appkod_blueprint::Format;
use appkod_core::{File, WriteResult};
use eyre::{Context, Result};

use crate::reports::InitReport;

/// Starter blueprint written by `appkod init`.
pub const EXAMPLE_BLUEPRINT: &str = include_str!("blueprint.yaml");

/// Write the example blueprint into `dir`, leaving an existing file untouched.
pub fn init(dir: &Path) -> Result<InitReport> {
    let path = dir.join(Format::Yaml.default_filename());
    let result = File::new(&path, EXAMPLE_BLUEPRINT)
        .if_missing()
        .write()
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?result, "init");
    Ok(InitReport {
        path,
        created: result == WriteResult::Written,
    })
}
