//! Course Registry Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Contract Notes
//! - Identities are assigned by PostgreSQL (`BIGSERIAL`) and immutable
//! - A course always references an existing instructor
//! - The (student, course) enrollment pair is unique; concurrent duplicate
//!   enrollments are settled by the storage layer, not the handlers

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{RegistryError, RegistryResult};
pub use infra::postgres::PgRegistryRepository;
pub use presentation::router::registry_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};

#[cfg(test)]
mod tests;
