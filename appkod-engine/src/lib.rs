//! Orchestration for the Appkod blueprint generator.
//!
//! The [`Engine`] validates a [`Blueprint`], runs the database, API and UI
//! generators over it and writes the resulting artifacts:
//!
//! ```ignore
//! use appkod_engine::Engine;
//!
//! let engine = Engine::from_file("blueprint.yaml")?;
//! let stats = engine.write_all("generated")?;
//! println!("{} files written", stats.written.len());
//! ```
//!
//! The free functions below are shortcuts for a borrowed blueprint with the
//! default configuration.

mod config;
mod engine;
mod error;

use std::path::Path;

use appkod_blueprint::{Blueprint, Metadata, Validation};
use appkod_codegen::generation::{ArtifactSet, OutputLayout, WriteStats};
use appkod_core::TypeRegistry;

pub use config::{CONFIG_FILENAME, EngineConfig};
pub use engine::Engine;
pub use error::EngineError;

/// Check a blueprint without generating anything.
pub fn validate(blueprint: &Blueprint) -> Validation {
    blueprint.validate()
}

/// Validate a blueprint and generate every artifact with the default layout.
pub fn generate_all(blueprint: &Blueprint) -> Result<ArtifactSet, EngineError> {
    engine::generate(
        blueprint,
        &TypeRegistry::default(),
        &OutputLayout::default(),
        &engine::default_generators(),
    )
}

/// Generate every artifact and write it below `output_dir`.
pub fn write_all(blueprint: &Blueprint, output_dir: impl AsRef<Path>) -> eyre::Result<WriteStats> {
    engine::write(&generate_all(blueprint)?, output_dir.as_ref())
}

pub fn get_metadata(blueprint: &Blueprint) -> Metadata {
    blueprint.metadata()
}
