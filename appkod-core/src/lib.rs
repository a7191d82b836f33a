//! Core utilities and types for the Appkod blueprint generator.
//!
//! This crate provides the naming and type-mapping machinery shared by every
//! generator, so that the schema, models, routes and pages agree on names.

mod file;
mod type_mapper;
mod utils;

// File operations
pub use file::{File, Overwrite, WriteResult, write_file};
// Type mapping
pub use type_mapper::{FieldType, PrismaTypeMapper, PythonTypeMapper, TypeMapper, TypeRegistry};
// String utilities
pub use utils::{
    humanize, pascal_to_snake, to_identifier, to_pascal_case, to_snake_case, words_to_pascal,
};
