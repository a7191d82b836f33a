//! Lint for missing top-level sections.

use super::super::Lint;
use crate::{Blueprint, validate::Diagnostic};

/// Lint that errors on each missing top-level field.
pub struct RequiredSectionsLint;

impl Lint for RequiredSectionsLint {
    fn name(&self) -> &'static str {
        "required-sections"
    }

    fn description(&self) -> &'static str {
        "Require version, name, database, api and ui"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        let present = [
            ("version", blueprint.version.is_some()),
            ("name", blueprint.name.is_some()),
            ("database", blueprint.database.is_some()),
            ("api", blueprint.api.is_some()),
            ("ui", blueprint.ui.is_some()),
        ];

        for (field, is_present) in present {
            if !is_present {
                diagnostics.push(Diagnostic::error(
                    self.name(),
                    format!("Missing required field: {}", field),
                ));
            }
        }
    }
}
