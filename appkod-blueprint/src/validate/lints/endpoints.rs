//! Lint for endpoint declarations.

use super::super::Lint;
use crate::{Blueprint, validate::Diagnostic};

/// Lint that warns about endpoints the route generator cannot fully resolve.
pub struct EndpointsLint;

impl Lint for EndpointsLint {
    fn name(&self) -> &'static str {
        "endpoints"
    }

    fn description(&self) -> &'static str {
        "Warn about unsupported methods and undeclared tables"
    }

    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>) {
        let has_database = blueprint.database.is_some();

        for (i, endpoint) in blueprint.endpoints().iter().enumerate() {
            let location = format!("api.endpoints[{}]", i);

            if !endpoint.http_method().is_supported() {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "Unsupported HTTP method '{}' for {}",
                            endpoint.method, endpoint.path
                        ),
                    )
                    .at(location.clone()),
                );
            }

            // A missing database section is already an error
            if let Some(table) = &endpoint.table
                && has_database
                && blueprint.entity(table).is_none()
            {
                diagnostics.push(
                    Diagnostic::warning(
                        self.name(),
                        format!(
                            "Endpoint {} {} references undeclared table '{}'",
                            endpoint.http_method(),
                            endpoint.path,
                            table
                        ),
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

    #[test]
    fn test_endpoint_warnings() {
        let blueprint = Blueprint::from_yaml(
            r#"
            database:
              tables: [ { name: widgets } ]
            api:
              endpoints:
                - { path: /widgets, method: get, table: widgets }
                - { path: /gadgets, method: GET, table: gadgets }
                - { path: /widgets, method: HEAD, table: widgets }
                - { path: /health, method: GET }
            "#,
        )
        .unwrap();

        let mut diagnostics = Vec::new();
        EndpointsLint.check(&blueprint, &mut diagnostics);

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(
            messages,
            vec![
                "Endpoint GET /gadgets references undeclared table 'gadgets'",
                "Unsupported HTTP method 'HEAD' for /widgets",
            ]
        );
    }
}
