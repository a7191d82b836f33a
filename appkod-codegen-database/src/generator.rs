use appkod_codegen::{
    ArtifactGenerator, GenerateContext,
    builder::{Indent, Renderable},
    generation::Artifact,
};

use crate::{PrismaSchema, SqlModelModule};

/// Generates the Prisma schema and the SQLModel models.
#[derive(Debug, Default, Clone, Copy)]
pub struct DatabaseGenerator;

impl ArtifactGenerator for DatabaseGenerator {
    fn name(&self) -> &'static str {
        "database"
    }

    fn generate(&self, ctx: &GenerateContext<'_>) -> Vec<Artifact> {
        let entities = ctx.blueprint.entities();
        tracing::debug!(tables = entities.len(), "generating schema and models");

        let schema = PrismaSchema::new(entities, ctx.types).render(Indent::PRISMA);
        let models = SqlModelModule::new(entities, ctx.types).render(Indent::PYTHON);

        vec![
            Artifact::new(&ctx.layout.schema, schema),
            Artifact::new(&ctx.layout.models, models),
        ]
    }
}
