//! Shared code generation utilities for the Appkod blueprint generator.
//!
//! This crate provides the target-agnostic machinery used by the database,
//! API and UI generators.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output management (Artifact, ArtifactSet, OutputLayout)
//! - [`generator`] - The [`ArtifactGenerator`] trait implemented by every target

pub mod builder;
pub mod generation;
pub mod generator;

pub use generator::{ArtifactGenerator, GenerateContext};
