//! Blueprint parsing and validation for the Appkod generator.
//!
//! A [`Blueprint`] is the declarative description of an application: its
//! tables, API endpoints, UI pages and workflows. This crate decodes it from
//! YAML or JSON and checks it with a set of [`Lint`] rules.
//!
//! Parsing failures are fatal and reported as [`Error`]. Validation never
//! fails; it collects every problem into a [`Validation`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod format;
mod model;
mod parse;
mod serde_helpers;
pub mod validate;

pub use error::{Error, Result};
pub use format::Format;
pub use model::{
    Api, Blueprint, Component, ComponentKind, Database, DefaultValue, Endpoint, Entity, Field,
    HttpMethod, Index, Metadata, Page, Ui, Workflow, WorkflowStep,
};
pub use validate::{Diagnostic, Lint, Linter, Severity, Validation};
