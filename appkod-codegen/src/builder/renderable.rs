//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! Every artifact kind is built from small typed templates: a struct whose
//! fields are the substitution slots and whose [`Renderable`] impl lays out
//! the fixed text around them. Templates can then be tested one at a time.

use super::{CodeBuilder, Indent};

/// Represents a fragment of generated code.
///
/// CodeFragments form an intermediate representation between templates
/// and the final string output, enabling composition and nesting.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A line comment such as `# text` or `/// text`.
    Comment { prefix: &'static str, text: String },
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
    /// Indent the contained fragments.
    Indent(Vec<CodeFragment>),
    /// A sequence of fragments.
    Sequence(Vec<CodeFragment>),
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a comment fragment.
    pub fn comment(prefix: &'static str, text: impl Into<String>) -> Self {
        Self::Comment {
            prefix,
            text: text.into(),
        }
    }

    /// Create a Python docstring.
    ///
    /// One line of text stays on a single line. Longer text opens and closes
    /// the quotes on lines of their own, with every line at the current
    /// indentation. Quotes and backslashes are escaped.
    pub fn docstring(text: &str) -> Self {
        let escaped = text.trim().replace('\\', "\\\\").replace('"', "\\\"");
        let lines: Vec<&str> = escaped.lines().map(str::trim_end).collect();
        match lines.as_slice() {
            [] => Self::Sequence(Vec::new()),
            [only] => Self::line(format!("\"\"\"{}\"\"\"", only)),
            [first, rest @ ..] => {
                let mut fragments = vec![Self::line(format!("\"\"\"{}", first))];
                fragments.extend(rest.iter().map(|line| {
                    if line.is_empty() {
                        Self::Blank
                    } else {
                        Self::line(*line)
                    }
                }));
                fragments.push(Self::line("\"\"\""));
                Self::Sequence(fragments)
            }
        }
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Create an indented fragment sequence.
    pub fn indent(fragments: Vec<CodeFragment>) -> Self {
        Self::Indent(fragments)
    }

    /// Create a sequence of fragments.
    pub fn sequence(fragments: Vec<CodeFragment>) -> Self {
        Self::Sequence(fragments)
    }
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;

    /// Render this node on its own with the given indentation.
    fn render(&self, indent: Indent) -> String
    where
        Self: Sized,
    {
        let mut builder = CodeBuilder::new(indent);
        builder.emit(self);
        builder.build()
    }
}

/// Blanket implementation for references.
impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

/// Blanket implementation for Box.
impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}
