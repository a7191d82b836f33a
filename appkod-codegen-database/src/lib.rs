//! Schema and model generation for the Appkod blueprint generator.
//!
//! Every table of a blueprint becomes one Prisma `model` block in the schema
//! artifact and one SQLModel class in the models artifact. Both walk the
//! fields in the same order, so the two artifacts always agree:
//!
//! 1. declared fields, in declaration order
//! 2. `created_at` / `updated_at` when timestamps are enabled
//! 3. `deleted_at` when soft delete is enabled
//! 4. an indexed `tenant_id` when the table is tenant scoped

mod generator;
pub mod prisma;
pub mod sqlmodel;

pub use generator::DatabaseGenerator;
pub use prisma::PrismaSchema;
pub use sqlmodel::SqlModelModule;
