use appkod_blueprint::Endpoint;
use appkod_codegen::{
    ArtifactGenerator, GenerateContext,
    builder::{CodeBuilder, CodeFragment, Renderable},
    generation::Artifact,
};
use appkod_core::to_identifier;

use crate::{
    EndpointKind, Target,
    templates::{
        CreateHandler, CustomHandler, DeleteHandler, GetHandler, ListHandler, RoutesHeader,
        UpdateHandler,
    },
};

/// Parameter name used when a single-record path has no placeholder.
const FALLBACK_PARAM: &str = "resource_id";

/// Generates the FastAPI routes module.
#[derive(Debug, Default, Clone, Copy)]
pub struct ApiGenerator;

impl ApiGenerator {
    /// Render one endpoint, or nothing for an unsupported verb.
    pub fn render_endpoint(&self, endpoint: &Endpoint, ctx: &GenerateContext<'_>) -> Vec<CodeFragment> {
        let kind = EndpointKind::classify(endpoint);
        let authenticated = kind.authenticated(endpoint);
        let path = endpoint.path.as_str();
        let doc = endpoint.description.as_deref();
        let path_params = endpoint.path_params();
        let param = path_params.first().copied().unwrap_or(FALLBACK_PARAM);

        let target = match &endpoint.table {
            Some(table) => Target::resolve(table, ctx.blueprint, ctx.types),
            None => {
                let slug = match to_identifier(path) {
                    slug if slug.is_empty() => "root".to_string(),
                    slug => slug,
                };
                return CustomHandler {
                    path,
                    method: &endpoint.http_method(),
                    slug: &slug,
                    path_params: &path_params,
                    authenticated,
                    doc,
                }
                .to_fragments();
            }
        };

        match kind {
            EndpointKind::List => ListHandler {
                path,
                target: &target,
                authenticated,
                paginated: endpoint.paginated,
                doc,
            }
            .to_fragments(),
            EndpointKind::Get => GetHandler {
                path,
                target: &target,
                param,
                authenticated,
                doc,
            }
            .to_fragments(),
            EndpointKind::Create => CreateHandler {
                path,
                target: &target,
                authenticated,
                doc,
            }
            .to_fragments(),
            EndpointKind::Update => UpdateHandler {
                path,
                method: &endpoint.http_method(),
                target: &target,
                param,
                authenticated,
                doc,
            }
            .to_fragments(),
            EndpointKind::Delete => DeleteHandler {
                path,
                target: &target,
                param,
                authenticated,
                doc,
            }
            .to_fragments(),
            EndpointKind::Custom | EndpointKind::Unsupported => {
                tracing::debug!(method = %endpoint.method, path, "skipping endpoint with unsupported method");
                Vec::new()
            }
        }
    }
}

impl ArtifactGenerator for ApiGenerator {
    fn name(&self) -> &'static str {
        "api"
    }

    fn generate(&self, ctx: &GenerateContext<'_>) -> Vec<Artifact> {
        let endpoints = ctx.blueprint.endpoints();
        tracing::debug!(endpoints = endpoints.len(), "generating routes");

        let mut builder = CodeBuilder::python();
        builder.emit(&RoutesHeader);
        for endpoint in endpoints {
            let fragments = self.render_endpoint(endpoint, ctx);
            if fragments.is_empty() {
                continue;
            }
            builder.push_blank().push_blank();
            for fragment in fragments {
                builder.apply_fragment(fragment);
            }
        }

        vec![Artifact::new(&ctx.layout.routes, builder.build())]
    }
}
