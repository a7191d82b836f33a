//! Structural validation of a blueprint.
//!
//! Validation never fails. Every [`Lint`] appends its findings to one list of
//! [`Diagnostic`]s so that all problems can be shown at once; the caller
//! decides whether errors abort the run. Warnings never make a blueprint
//! invalid.

mod diagnostic;
mod lint;
pub mod lints;

pub use diagnostic::{Diagnostic, Severity};
pub use lint::Lint;
pub use lints::{
    ComponentsLint, EmptySectionsLint, EndpointsLint, FieldsLint, PagePathsLint,
    RequiredSectionsLint, TableNamesLint,
};

use crate::Blueprint;

/// Outcome of validating a blueprint.
#[derive(Debug, Clone, Default)]
pub struct Validation {
    diagnostics: Vec<Diagnostic>,
}

impl Validation {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// True when no error was reported. Warnings are allowed.
    pub fn is_ok(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    /// Error messages, in the order they were found.
    pub fn errors(&self) -> Vec<String> {
        self.messages(Severity::Error)
    }

    /// Warning messages, in the order they were found.
    pub fn warnings(&self) -> Vec<String> {
        self.messages(Severity::Warning)
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    /// All diagnostics, errors and warnings interleaved in lint order.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    fn messages(&self, severity: Severity) -> Vec<String> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.clone())
            .collect()
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }
}

/// Runs a configurable set of lints over a blueprint.
pub struct Linter {
    lints: Vec<Box<dyn Lint>>,
}

impl Linter {
    /// Create a linter with the built-in lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(RequiredSectionsLint),
                Box::new(EmptySectionsLint),
                Box::new(TableNamesLint),
                Box::new(PagePathsLint),
                Box::new(FieldsLint),
                Box::new(EndpointsLint),
                Box::new(ComponentsLint),
            ],
        }
    }

    /// Create a linter with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Names and descriptions of all lints that will be run.
    pub fn lints(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.lints.iter().map(|l| (l.name(), l.description()))
    }

    pub fn run(&self, blueprint: &Blueprint) -> Validation {
        let mut diagnostics = Vec::new();
        for lint in &self.lints {
            lint.check(blueprint, &mut diagnostics);
        }

        let validation = Validation::new(diagnostics);
        tracing::debug!(
            errors = validation.error_count(),
            warnings = validation.warning_count(),
            "validated blueprint"
        );
        validation
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

impl Blueprint {
    /// Validate with the built-in lints.
    pub fn validate(&self) -> Validation {
        Linter::new().run(self)
    }
}
