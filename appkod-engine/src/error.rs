use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors raised while orchestrating a generation run.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Validation reported at least one error.
    #[error("blueprint is invalid ({} error(s)):\n  {}", errors.len(), errors.join("\n  "))]
    InvalidBlueprint { errors: Vec<String> },

    /// Two generators produced the same output path.
    #[error("artifact '{path}' is produced by both the {first} and {second} generators")]
    DuplicateArtifact {
        path: String,
        first: &'static str,
        second: &'static str,
    },

    /// The configuration file could not be read or decoded.
    #[error("invalid configuration in {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}
