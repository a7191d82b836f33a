//! Lint for sections that are present but declare nothing.

use super::super::Lint;
use crate::{Blueprint, validate::Diagnostic};

/// Lint that errors when `database`, `api` or `ui` is empty.
///
/// A missing section is reported by the required-sections lint instead.
pub struct EmptySectionsLint;

impl Lint for EmptySectionsLint {
    fn name(&self) -> &'static str {
        "empty-sections"
    }

    fn description(&self) -> &'static str {
        "Require at least one table, endpoint and page"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        if blueprint.database.as_ref().is_some_and(|db| db.tables.is_empty()) {
            diagnostics.push(
                Diagnostic::error(
                    self.name(),
                    "database.tables is required and must not be empty",
                )
                .at("database"),
            );
        }
        if blueprint.api.as_ref().is_some_and(|api| api.endpoints.is_empty()) {
            diagnostics.push(
                Diagnostic::error(self.name(), "api.endpoints is required and must not be empty")
                    .at("api"),
            );
        }
        if blueprint.ui.as_ref().is_some_and(|ui| ui.pages.is_empty()) {
            diagnostics.push(
                Diagnostic::error(self.name(), "ui.pages is required and must not be empty")
                    .at("ui"),
            );
        }
    }
}
