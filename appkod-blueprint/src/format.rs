//! Source formats a blueprint can be written in.

use std::{fmt, path::Path};

use crate::{Error, Result};

/// Encoding of a blueprint document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Select a format from a file extension (without the leading dot).
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }

    /// Select a format from a file path, failing on unsupported extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();

        Self::from_extension(extension).ok_or_else(|| {
            Box::new(Error::UnsupportedFormat {
                path: path.to_path_buf(),
                extension: extension.to_string(),
            })
        })
    }

    /// Filename used in diagnostics when parsing raw text.
    pub fn default_filename(&self) -> &'static str {
        match self {
            Format::Yaml => "blueprint.yaml",
            Format::Json => "blueprint.json",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Yaml => write!(f, "YAML"),
            Format::Json => write!(f, "JSON"),
        }
    }
}
