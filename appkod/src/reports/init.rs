//! Init command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from writing the example blueprint.
#[derive(Debug)]
pub struct InitReport {
    /// Path of the blueprint.
    pub path: PathBuf,
    /// False when a file already existed there.
    pub created: bool,
}

impl Report for InitReport {
    fn render(&self, out: &mut dyn Output) {
        let path = self.path.display();
        if !self.created {
            out.warning(&format!("{} already exists, leaving it untouched", path));
            return;
        }

        out.added_item(&path.to_string());
        out.newline();
        out.section("Next steps");
        out.preformatted(&format!("  appkod check {}", path));
        out.preformatted(&format!("  appkod generate -i {}", path));
    }
}
