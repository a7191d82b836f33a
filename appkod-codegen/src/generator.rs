//! The contract between the engine and each target generator.

use appkod_blueprint::Blueprint;
use appkod_core::TypeRegistry;

use crate::generation::{Artifact, OutputLayout};

/// Everything a generator reads during one run.
#[derive(Debug, Clone, Copy)]
pub struct GenerateContext<'a> {
    pub blueprint: &'a Blueprint,
    pub types: &'a TypeRegistry,
    pub layout: &'a OutputLayout,
}

impl<'a> GenerateContext<'a> {
    pub fn new(blueprint: &'a Blueprint, types: &'a TypeRegistry, layout: &'a OutputLayout) -> Self {
        Self {
            blueprint,
            types,
            layout,
        }
    }
}

/// A generator for one artifact family.
///
/// Generation is a pure function of the context: the same blueprint always
/// produces the same artifacts, in the same order.
pub trait ArtifactGenerator: Send + Sync {
    /// Short name used in logs (e.g., "database").
    fn name(&self) -> &'static str;

    /// Produce this family's artifacts.
    fn generate(&self, ctx: &GenerateContext<'_>) -> Vec<Artifact>;
}
