use appkod_codegen::{
    ArtifactGenerator, GenerateContext,
    builder::{Indent, Renderable},
    generation::Artifact,
};

use crate::PageModule;

/// Generates one Next.js page per declared page.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiGenerator;

impl ArtifactGenerator for UiGenerator {
    fn name(&self) -> &'static str {
        "ui"
    }

    fn generate(&self, ctx: &GenerateContext<'_>) -> Vec<Artifact> {
        let pages = ctx.blueprint.pages();
        tracing::debug!(pages = pages.len(), "generating pages");

        pages
            .iter()
            .map(|page| {
                let path = ctx.layout.page_path(&page.app_route());
                tracing::debug!(route = %page.path, path = %path, "rendering page");
                let content = PageModule::new(page, ctx.blueprint).render(Indent::TYPESCRIPT);
                Artifact::new(path, content)
            })
            .collect()
    }
}
