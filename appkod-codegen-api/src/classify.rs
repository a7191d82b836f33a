use appkod_blueprint::{Endpoint, HttpMethod};

/// Handler archetype of an endpoint, derived from its verb, its path shape
/// and whether it names a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    /// GET without a path parameter
    List,
    /// GET with a path parameter
    Get,
    Create,
    /// PUT or PATCH
    Update,
    Delete,
    /// No table; always a stub, whatever the verb
    Custom,
    /// A table with a verb that has no archetype; nothing is emitted
    Unsupported,
}

impl EndpointKind {
    pub fn classify(endpoint: &Endpoint) -> Self {
        if endpoint.table.is_none() {
            return EndpointKind::Custom;
        }

        match endpoint.http_method() {
            HttpMethod::Get if endpoint.has_path_params() => EndpointKind::Get,
            HttpMethod::Get => EndpointKind::List,
            HttpMethod::Post => EndpointKind::Create,
            HttpMethod::Put | HttpMethod::Patch => EndpointKind::Update,
            HttpMethod::Delete => EndpointKind::Delete,
            HttpMethod::Other(_) => EndpointKind::Unsupported,
        }
    }

    /// Whether the handler takes the current user regardless of `auth`.
    ///
    /// Single-record reads and all writes are always authenticated. List and
    /// custom handlers only are when the endpoint says `auth: required`.
    pub fn always_authenticated(&self) -> bool {
        matches!(
            self,
            EndpointKind::Get | EndpointKind::Create | EndpointKind::Update | EndpointKind::Delete
        )
    }

    /// Whether the handler for `endpoint` takes the current user.
    pub fn authenticated(&self, endpoint: &Endpoint) -> bool {
        self.always_authenticated() || endpoint.requires_auth()
    }
}
