//! Output management for generated artifacts.

mod artifact;
mod layout;

pub use artifact::{Artifact, ArtifactSet, WriteStats};
pub use layout::OutputLayout;
