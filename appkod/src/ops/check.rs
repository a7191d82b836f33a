//! Check operation - blueprint validation.

use std::path::Path;

use appkod_blueprint::{Blueprint, Severity};

use crate::reports::CheckReport;

/// Validate the blueprint and sort its diagnostics by severity.
pub fn check(blueprint: &Blueprint, path: &Path) -> CheckReport {
    let validation = blueprint.validate();

    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    for diag in validation.diagnostics() {
        let msg = match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        };
        match diag.severity {
            Severity::Error => errors.push(msg),
            Severity::Warning => warnings.push(msg),
        }
    }

    CheckReport {
        blueprint_path: path.to_path_buf(),
        errors,
        warnings,
    }
}
