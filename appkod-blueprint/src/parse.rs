//! Decoding blueprints from YAML and JSON.

use std::{path::Path, str::FromStr};

use crate::{Blueprint, Error, Format, Result};

impl Blueprint {
    /// Load a blueprint from a file, picking the decoder from its extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|source| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source,
            })
        })?;
        let filename = path.display().to_string();

        tracing::debug!(path = %filename, %format, "loading blueprint");
        parse(&content, format, &filename)
    }

    /// Parse blueprint text in the given format.
    pub fn from_str_with_format(content: &str, format: Format) -> Result<Self> {
        parse(content, format, format.default_filename())
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, Format::Yaml)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Self::from_str_with_format(content, Format::Json)
    }
}

/// Parses YAML, which is a superset of JSON.
impl FromStr for Blueprint {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_yaml(s)
    }
}

fn parse(content: &str, format: Format, filename: &str) -> Result<Blueprint> {
    match format {
        Format::Yaml => {
            serde_yaml::from_str(content).map_err(|e| Error::yaml(e, content, filename))
        }
        Format::Json => {
            serde_json::from_str(content).map_err(|e| Error::json(e, content, filename))
        }
    }
}
