use serde::{Deserialize, Serialize};

use super::{Endpoint, Entity, Page, Workflow};
use crate::serde_helpers::{deserialize_null_default, deserialize_scalar_string};

/// Root of a blueprint document.
///
/// Every section is optional at the type level so that an incomplete
/// document can still be loaded and reported on by [`Blueprint::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Blueprint {
    #[serde(default, deserialize_with = "deserialize_scalar_string")]
    pub version: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub database: Option<Database>,
    pub api: Option<Api>,
    pub ui: Option<Ui>,
    pub workflows: Option<Vec<Workflow>>,
}

/// The `database` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Database {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub tables: Vec<Entity>,
}

/// The `api` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Api {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub endpoints: Vec<Endpoint>,
}

/// The `ui` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ui {
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub pages: Vec<Page>,
}

/// Descriptive metadata with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub version: String,
    pub name: String,
    pub description: String,
    pub author: String,
}

impl Blueprint {
    /// Declared tables, or an empty slice when `database` is absent.
    pub fn entities(&self) -> &[Entity] {
        self.database
            .as_ref()
            .map(|db| db.tables.as_slice())
            .unwrap_or_default()
    }

    /// Declared endpoints, or an empty slice when `api` is absent.
    pub fn endpoints(&self) -> &[Endpoint] {
        self.api
            .as_ref()
            .map(|api| api.endpoints.as_slice())
            .unwrap_or_default()
    }

    /// Declared pages, or an empty slice when `ui` is absent.
    pub fn pages(&self) -> &[Page] {
        self.ui
            .as_ref()
            .map(|ui| ui.pages.as_slice())
            .unwrap_or_default()
    }

    /// Declared workflows, or an empty slice when absent.
    pub fn workflows(&self) -> &[Workflow] {
        self.workflows.as_deref().unwrap_or_default()
    }

    /// Look up a table by name.
    pub fn entity(&self, name: &str) -> Option<&Entity> {
        self.entities().iter().find(|e| e.name == name)
    }

    /// Get the metadata, defaulting missing values.
    pub fn metadata(&self) -> Metadata {
        Metadata {
            version: self.version.clone().unwrap_or_else(|| "1.0".to_string()),
            name: self.name.clone().unwrap_or_else(|| "Untitled".to_string()),
            description: self.description.clone().unwrap_or_default(),
            author: self.author.clone().unwrap_or_default(),
        }
    }
}
