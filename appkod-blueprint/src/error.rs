use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

use crate::Format;

/// Result type for blueprint operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Fatal errors raised while loading a blueprint.
///
/// Structural problems in a successfully decoded blueprint are not errors;
/// they are reported by [`crate::Blueprint::validate`].
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("run 'appkod init' to create an example blueprint"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported blueprint file type '{extension}'")]
    #[diagnostic(
        code(appkod::unsupported_format),
        help("blueprints must use a .yaml, .yml or .json extension")
    )]
    UnsupportedFormat { path: PathBuf, extension: String },

    #[error("failed to parse {format} blueprint: {message}")]
    #[diagnostic(code(appkod::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        format: Format,
        message: String,
    },
}

impl Error {
    /// Create a parse error from a YAML decoder error with source context
    pub(crate) fn yaml(source: serde_yaml::Error, src: &str, filename: &str) -> Box<Self> {
        let span = source
            .location()
            .map(|loc| SourceSpan::from(loc.index().min(src.len())));
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            format: Format::Yaml,
            message: source.to_string(),
        })
    }

    /// Create a parse error from a JSON decoder error with source context
    pub(crate) fn json(source: serde_json::Error, src: &str, filename: &str) -> Box<Self> {
        let span = offset_of(src, source.line(), source.column()).map(SourceSpan::from);
        Box::new(Error::Parse {
            src: NamedSource::new(filename, src.to_string()),
            span,
            format: Format::Json,
            message: source.to_string(),
        })
    }
}

/// Convert a 1-based line/column pair into a byte offset.
fn offset_of(src: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }
    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    Some((line_start + column.saturating_sub(1)).min(src.len()))
}
