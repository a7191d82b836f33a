//! Lint trait for blueprint validation.

use crate::{Blueprint, validate::Diagnostic};

/// A rule that checks a blueprint for problems.
pub trait Lint: Send + Sync {
    /// The name of this lint.
    fn name(&self) -> &'static str;

    /// A short description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the blueprint and add any diagnostics.
    fn check(&self, blueprint: &Blueprint, diagnostics: &mut Vec<Diagnostic>);
}
