//! Core operations.
//!
//! This module contains the business logic for appkod commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod info;
pub mod init;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use info::info;
pub use init::init;
