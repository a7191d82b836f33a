//! Lint for page component trees.

use super::super::Lint;
use crate::{Blueprint, Component, ComponentKind, validate::Diagnostic};

/// Lint that warns about components rendered as placeholders.
pub struct ComponentsLint;

impl Lint for ComponentsLint {
    fn name(&self) -> &'static str {
        "components"
    }

    fn description(&self) -> &'static str {
        "Warn about unknown component types and undeclared table sources"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        for (i, page) in blueprint.pages().iter().enumerate() {
            for (j, component) in page.components.iter().enumerate() {
                self.check_component(
                    blueprint,
                    &page.path,
                    component,
                    format!("ui.pages[{}].components[{}]", i, j),
                    diagnostics,
                );
            }
        }
    }
}

impl ComponentsLint {
    fn check_component(
        &self,
        blueprint: &Blueprint,
        page: &str,
        component: &Component,
        location: String,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        if let ComponentKind::Other(tag) = component.kind() {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!("Unknown component type '{}' on page {}", tag, page),
                )
                .at(location.clone()),
            );
        }

        if let Some(source) = &component.source
            && blueprint.database.is_some()
            && blueprint.entity(source).is_none()
        {
            diagnostics.push(
                Diagnostic::warning(
                    self.name(),
                    format!(
                        "Component on page {} uses undeclared table '{}'",
                        page, source
                    ),
                )
                .at(location.clone()),
            );
        }

        for (k, child) in component.children.iter().enumerate() {
            self.check_component(
                blueprint,
                page,
                child,
                format!("{}.children[{}]", location, k),
                diagnostics,
            );
        }
    }
}
