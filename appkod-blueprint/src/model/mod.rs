//! Typed view over a blueprint document.

mod blueprint;
mod endpoint;
mod entity;
mod page;
mod workflow;

pub use blueprint::{Api, Blueprint, Database, Metadata, Ui};
pub use endpoint::{Endpoint, HttpMethod};
pub use entity::{DefaultValue, Entity, Field, Index};
pub use page::{Component, ComponentKind, Page};
pub use workflow::{Workflow, WorkflowStep};

pub(crate) fn default_true() -> bool {
    true
}
