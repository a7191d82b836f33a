//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from blueprint validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the blueprint file.
    pub blueprint_path: PathBuf,
    /// Error messages.
    pub errors: Vec<String>,
    /// Warning messages.
    pub warnings: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() || !self.errors.is_empty() {
            out.newline();
        }

        let path = self.blueprint_path.display();
        if self.is_valid() {
            out.preformatted(&format!("✓ {} is valid", path));
        } else {
            out.preformatted(&format!(
                "✗ {}: {} error{}, {} warning{}",
                path,
                self.errors.len(),
                plural(self.errors.len()),
                self.warnings.len(),
                plural(self.warnings.len())
            ));
        }
    }
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
