use std::collections::BTreeMap;

use serde::Deserialize;

/// A UI page definition.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub path: String,
    pub title: String,
    pub description: Option<String>,
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Page {
    /// The Next.js App Router directory for this page, relative to `app`.
    ///
    /// Empty segments are dropped and `{param}` placeholders become dynamic
    /// `[param]` segments. The root page maps to the empty route.
    pub fn app_route(&self) -> String {
        self.segments()
            .map(|segment| {
                match segment
                    .strip_prefix('{')
                    .and_then(|s| s.strip_suffix('}'))
                {
                    Some(param) => format!("[{}]", param.trim()),
                    None => segment.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether the path contains a `.` or `..` segment.
    pub fn has_relative_segment(&self) -> bool {
        self.segments().any(|segment| segment == "." || segment == "..")
    }

    fn segments(&self) -> impl Iterator<Item = &str> {
        self.path.split('/').filter(|segment| !segment.is_empty())
    }
}

/// A node in a page's component tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Component {
    #[serde(rename = "type")]
    pub ty: String,
    pub id: Option<String>,
    /// Table whose rows feed this component
    pub source: Option<String>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub props: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub children: Vec<Component>,
}

impl Component {
    pub fn kind(&self) -> ComponentKind<'_> {
        ComponentKind::from_tag(&self.ty)
    }

    /// A string-valued prop.
    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(|v| v.as_str())
    }
}

/// Component types the UI generator knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind<'a> {
    Table,
    Button,
    Form,
    /// Unrecognized tag; rendered as a placeholder
    Other(&'a str),
}

impl<'a> ComponentKind<'a> {
    pub fn from_tag(tag: &'a str) -> Self {
        match tag {
            "table" => ComponentKind::Table,
            "button" => ComponentKind::Button,
            "form" => ComponentKind::Form,
            other => ComponentKind::Other(other),
        }
    }
}
