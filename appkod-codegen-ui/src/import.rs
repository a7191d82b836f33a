//! TSX import statements.

use appkod_codegen::builder::{CodeFragment, Renderable};

/// Builder for an ES module import of named exports.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    named: Vec<String>,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            named: Vec::new(),
        }
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "import {{ {} }} from '{}';",
            self.named.join(", "),
            self.from
        ))]
    }
}

#[cfg(test)]
mod tests {
    use appkod_codegen::builder::Indent;

    use super::*;

    #[test]
    fn test_named_import() {
        let code = Import::new("react")
            .named("useEffect")
            .named("useState")
            .render(Indent::TYPESCRIPT);
        assert_eq!(code, "import { useEffect, useState } from 'react';\n");
    }
}
