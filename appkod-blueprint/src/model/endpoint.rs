use std::fmt;

use serde::Deserialize;

/// An API endpoint definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Endpoint {
    /// URL template using `{param}` placeholders
    pub path: String,
    pub method: String,
    /// Table served by this endpoint; absent for custom endpoints
    pub table: Option<String>,
    pub auth: Option<String>,
    #[serde(default)]
    pub paginated: bool,
    pub description: Option<String>,
}

impl Endpoint {
    pub fn http_method(&self) -> HttpMethod {
        HttpMethod::parse(&self.method)
    }

    /// True only for `auth: required`.
    pub fn requires_auth(&self) -> bool {
        self.auth.as_deref() == Some("required")
    }

    /// Whether the path contains a `{param}` placeholder.
    pub fn has_path_params(&self) -> bool {
        self.path.contains('{')
    }

    /// Names of the `{param}` placeholders, in order.
    pub fn path_params(&self) -> Vec<&str> {
        self.path
            .split('{')
            .skip(1)
            .filter_map(|rest| rest.split_once('}').map(|(name, _)| name.trim()))
            .filter(|name| !name.is_empty())
            .collect()
    }
}

/// HTTP verb of an endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    /// Any verb the generators have no archetype for
    Other(String),
}

impl HttpMethod {
    /// Parse a verb, case-insensitively.
    pub fn parse(method: &str) -> Self {
        match method.to_ascii_uppercase().as_str() {
            "GET" => HttpMethod::Get,
            "POST" => HttpMethod::Post,
            "PUT" => HttpMethod::Put,
            "PATCH" => HttpMethod::Patch,
            "DELETE" => HttpMethod::Delete,
            _ => HttpMethod::Other(method.to_string()),
        }
    }

    /// Lowercase verb, as used by router decorators.
    pub fn as_lower(&self) -> String {
        match self {
            HttpMethod::Get => "get".to_string(),
            HttpMethod::Post => "post".to_string(),
            HttpMethod::Put => "put".to_string(),
            HttpMethod::Patch => "patch".to_string(),
            HttpMethod::Delete => "delete".to_string(),
            HttpMethod::Other(m) => m.to_ascii_lowercase(),
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, HttpMethod::Other(_))
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_lower().to_ascii_uppercase())
    }
}
