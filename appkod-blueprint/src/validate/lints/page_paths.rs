//! Lint for page paths that cannot be mapped to a page file.

use std::collections::HashSet;

use super::super::Lint;
use crate::{Blueprint, validate::Diagnostic};

/// Lint that errors on duplicate page paths and on `.` or `..` segments.
///
/// Paths are compared by their App Router route, so `/items/{id}` and
/// `/items/[id]/` collide.
pub struct PagePathsLint;

impl Lint for PagePathsLint {
    fn name(&self) -> &'static str {
        "page-paths"
    }

    fn description(&self) -> &'static str {
        "Require unique page paths without relative segments"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen = HashSet::new();

        for (i, page) in blueprint.pages().iter().enumerate() {
            if page.has_relative_segment() {
                diagnostics.push(
                    Diagnostic::error(
                        self.name(),
                        format!("Invalid page path: {} ('.' and '..' are not allowed)", page.path),
                    )
                    .at(format!("ui.pages[{}]", i)),
                );
                continue;
            }
            if !seen.insert(page.app_route()) {
                diagnostics.push(
                    Diagnostic::error(self.name(), format!("Duplicate page path: {}", page.path))
                        .at(format!("ui.pages[{}]", i)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_after_normalizing() {
        let blueprint = Blueprint::from_yaml(
            r#"
            ui:
              pages:
                - { path: /customers, title: A }
                - { path: /orders, title: B }
                - { path: customers/, title: C }
            "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        PagePathsLint.check(&blueprint, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Duplicate page path: customers/");
        assert_eq!(diagnostics[0].location.as_deref(), Some("ui.pages[2]"));
    }

    #[test]
    fn test_placeholder_styles_collide() {
        let blueprint = Blueprint::from_yaml(
            r#"
            ui:
              pages:
                - { path: '/items/{id}', title: A }
                - { path: '/items/[id]', title: B }
            "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        PagePathsLint.check(&blueprint, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Duplicate page path: /items/[id]");
    }

    #[test]
    fn test_relative_segments_are_rejected() {
        let blueprint = Blueprint::from_yaml(
            r#"
            ui:
              pages:
                - { path: /../../../../escaped, title: A }
                - { path: /reports/./weekly, title: B }
                - { path: /reports, title: C }
            "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        PagePathsLint.check(&blueprint, &mut diagnostics);

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Invalid page path: /../../../../escaped ('.' and '..' are not allowed)",
                "Invalid page path: /reports/./weekly ('.' and '..' are not allowed)",
            ]
        );
        assert_eq!(diagnostics[1].location.as_deref(), Some("ui.pages[1]"));
    }
}
