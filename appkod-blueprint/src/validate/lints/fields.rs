//! Lint for field declarations inside tables.

use super::super::Lint;
use crate::{Blueprint, validate::Diagnostic};

/// Lint that warns about fields the generators can only handle leniently:
/// unknown type tags, several primary keys and indexes over unknown fields.
pub struct FieldsLint;

impl Lint for FieldsLint {
    fn name(&self) -> &'static str {
        "fields"
    }

    fn description(&self) -> &'static str {
        "Warn about unknown field types, multiple primary keys and bad indexes"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        for (i, entity) in blueprint.entities().iter().enumerate() {
            for (j, field) in entity.fields.iter().enumerate() {
                if field.field_type().is_none() {
                    diagnostics.push(
                        Diagnostic::warning(
                            self.name(),
                            format!(
                                "Unknown field type '{}' for {}.{}, falling back to string",
                                field.ty, entity.name, field.name
                            ),
                        )
                        .at(format!("database.tables[{}].fields[{}]", i, j)),
                    );
                }
            }

            let primaries = entity.primary_fields().count();
            if primaries > 1 {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "Table '{}' declares {} primary fields",
                            entity.name, primaries
                        ),
                    )
                    .at(format!("database.tables[{}]", i)),
                );
            }

            for (j, index) in entity.indexes.iter().enumerate() {
                for name in &index.fields {
                    if !entity.fields.iter().any(|f| &f.name == name) {
                        diagnostics.push(
                            Diagnostic::warning(
                                self.name(),
                                format!(
                                    "Index on '{}' references unknown field '{}'",
                                    entity.name, name
                                ),
                            )
                            .at(format!("database.tables[{}].indexes[{}]", i, j)),
                        );
                    }
                }
            }
        }
    }
}
