//! Built-in lints for blueprint validation.

mod components;
mod empty_sections;
mod endpoints;
mod fields;
mod page_paths;
mod required_sections;
mod table_names;

pub use components::ComponentsLint;
pub use empty_sections::EmptySectionsLint;
pub use endpoints::EndpointsLint;
pub use fields::FieldsLint;
pub use page_paths::PagePathsLint;
pub use required_sections::RequiredSectionsLint;
pub use table_names::TableNamesLint;
