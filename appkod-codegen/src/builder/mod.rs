//! Code generation building blocks.
//!
//! - [`CodeBuilder`] - Lays out fragments with indentation
//! - [`CodeFragment`] - Intermediate representation for code pieces
//! - [`Renderable`] - Trait for typed templates that render to fragments
//! - [`Indent`] - Indentation configuration
//! - [`quoted`] - String literals valid in every target language

mod code_builder;
mod indent;
mod literal;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use literal::quoted;
pub use renderable::{CodeFragment, Renderable};
