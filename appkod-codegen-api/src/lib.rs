//! FastAPI route generation for the Appkod blueprint generator.
//!
//! Each endpoint is classified into a CRUD archetype or a custom stub (see
//! [`EndpointKind`]) and rendered through the matching handler template.
//! Handlers are skeletons: tenant filtering, pagination and field updates
//! are left as `# TODO` markers.

mod classify;
mod generator;
mod resolve;
pub mod templates;

pub use classify::EndpointKind;
pub use generator::ApiGenerator;
pub use resolve::{KeyColumn, Target};
