//! Lint for table naming problems.

use std::collections::HashSet;

use super::super::Lint;
use crate::{Blueprint, validate::Diagnostic};

/// Lint that errors on empty or duplicate table names.
///
/// Two tables with the same name would generate the same model twice.
pub struct TableNamesLint;

impl Lint for TableNamesLint {
    fn name(&self) -> &'static str {
        "table-names"
    }

    fn description(&self) -> &'static str {
        "Require non-empty, unique table names"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();

        for (i, entity) in blueprint.entities().iter().enumerate() {
            let location = format!("database.tables[{}]", i);

            if entity.name.trim().is_empty() {
                diagnostics.push(
                    Diagnostic::error(self.name(), "Table name must not be empty").at(location),
                );
                continue;
            }

            // Names that only differ in casing map to the same model
            if !seen.insert(entity.table_name()) {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("Duplicate table name: {}", entity.name),
                    )
                    .at(location),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(yaml: &str) -> Vec<Diagnostic> {
        let blueprint = Blueprint::from_yaml(yaml).unwrap();
        let mut diagnostics = Vec::new();
        TableNamesLint.check(&blueprint, &mut diagnostics);
        diagnostics
    }

    #[test]
    fn test_unique_names() {
        assert!(check("database: { tables: [ { name: customers }, { name: orders } ] }").is_empty());
    }

    #[test]
    fn test_duplicate_name() {
        let diagnostics =
            check("database: { tables: [ { name: orderItems }, { name: order_items } ] }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Duplicate table name: order_items");
        assert_eq!(diagnostics[0].location.as_deref(), Some("database.tables[1]"));
    }

    #[test]
    fn test_empty_name() {
        let diagnostics = check("database: { tables: [ { name: '' } ] }");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Table name must not be empty");
    }
}
