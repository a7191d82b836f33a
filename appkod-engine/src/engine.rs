use std::{collections::HashMap, path::Path};

use appkod_blueprint::{Blueprint, Metadata, Validation};
use appkod_codegen::{
    ArtifactGenerator, GenerateContext,
    generation::{ArtifactSet, OutputLayout, WriteStats},
};
use appkod_codegen_api::ApiGenerator;
use appkod_codegen_database::DatabaseGenerator;
use appkod_codegen_ui::UiGenerator;
use appkod_core::TypeRegistry;
use eyre::{Context, Result};

use crate::{EngineConfig, EngineError};

/// Validates a blueprint and runs every generator over it.
///
/// Generators run in registration order. [`Engine::new`] registers the
/// database, API and UI generators, in that order.
///
/// # Example
///
/// ```ignore
/// let engine = Engine::from_file("blueprint.yaml")?;
/// let artifacts = engine.generate_all()?;
/// for (path, _) in artifacts.iter() {
///     println!("{path}");
/// }
/// ```
pub struct Engine {
    blueprint: Blueprint,
    config: EngineConfig,
    types: TypeRegistry,
    generators: Vec<Box<dyn ArtifactGenerator>>,
}

impl Engine {
    /// Create an engine with the default configuration.
    pub fn new(blueprint: Blueprint) -> Self {
        Self::with_config(blueprint, EngineConfig::default())
    }

    pub fn with_config(blueprint: Blueprint, config: EngineConfig) -> Self {
        Self {
            blueprint,
            config,
            types: TypeRegistry::default(),
            generators: default_generators(),
        }
    }

    /// Load a blueprint from a YAML or JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let blueprint = Blueprint::from_file(path)
            .wrap_err_with(|| format!("Failed to load blueprint {}", path.display()))?;
        Ok(Self::new(blueprint))
    }

    /// Remove every registered generator.
    pub fn without_generators(mut self) -> Self {
        self.generators.clear();
        self
    }

    /// Register an additional generator, run after the existing ones.
    pub fn generator(mut self, generator: impl ArtifactGenerator + 'static) -> Self {
        self.generators.push(Box::new(generator));
        self
    }

    pub fn blueprint(&self) -> &Blueprint {
        &self.blueprint
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn validate(&self) -> Validation {
        self.blueprint.validate()
    }

    /// Validate, then generate every artifact.
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidBlueprint`] when validation reports errors;
    /// [`EngineError::DuplicateArtifact`] when two generators target the
    /// same path.
    pub fn generate_all(&self) -> Result<ArtifactSet, EngineError> {
        generate(
            &self.blueprint,
            &self.types,
            &self.config.output,
            &self.generators,
        )
    }

    /// Generate every artifact and write it below `output_dir`.
    pub fn write_all(&self, output_dir: impl AsRef<Path>) -> Result<WriteStats> {
        write(&self.generate_all()?, output_dir.as_ref())
    }

    pub fn metadata(&self) -> Metadata {
        self.blueprint.metadata()
    }
}

pub(crate) fn default_generators() -> Vec<Box<dyn ArtifactGenerator>> {
    vec![
        Box::new(DatabaseGenerator),
        Box::new(ApiGenerator),
        Box::new(UiGenerator),
    ]
}

/// Validate `blueprint` and run `generators` over it in order.
pub(crate) fn generate(
    blueprint: &Blueprint,
    types: &TypeRegistry,
    layout: &OutputLayout,
    generators: &[Box<dyn ArtifactGenerator>],
) -> Result<ArtifactSet, EngineError> {
    let validation = blueprint.validate();
    for warning in validation.warnings() {
        tracing::debug!(%warning, "validation warning");
    }
    if !validation.is_ok() {
        return Err(EngineError::InvalidBlueprint {
            errors: validation.errors(),
        });
    }

    let ctx = GenerateContext::new(blueprint, types, layout);
    let mut owners: HashMap<String, &'static str> = HashMap::new();
    let mut artifacts = ArtifactSet::new();

    for generator in generators {
        let name = generator.name();
        let produced = generator.generate(&ctx);
        tracing::debug!(generator = name, artifacts = produced.len(), "generator finished");

        for artifact in produced {
            if let Some(first) = owners.insert(artifact.path.clone(), name) {
                return Err(EngineError::DuplicateArtifact {
                    path: artifact.path,
                    first,
                    second: name,
                });
            }
            artifacts.insert(artifact);
        }
    }

    tracing::info!(artifacts = artifacts.len(), "generated artifacts");
    Ok(artifacts)
}

pub(crate) fn write(artifacts: &ArtifactSet, output_dir: &Path) -> Result<WriteStats> {
    let stats = artifacts
        .write_all(output_dir)
        .wrap_err_with(|| format!("Failed to write artifacts to {}", output_dir.display()))?;

    tracing::info!(
        written = stats.written.len(),
        unchanged = stats.unchanged.len(),
        output = %output_dir.display(),
        "wrote artifacts"
    );
    Ok(stats)
}
