//! Catalog Backend Module
//!
//! Administration of the video catalog: categories, cast members, genres
//! and videos.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, field rules, repository traits
//! - `application/` - Use cases (create, update, get, list, delete per aggregate)
//! - `infra/` - Repository implementations
//!
//! ## Validation Model
//! - Create/update collect every violated rule in a `Notification` and fail
//!   once with the whole list (`CatalogError::Validation`)
//! - Unknown related ids are reported in the same list
//! - Lookups of unknown ids fail immediately with `CatalogError::NotFound`
//! - List parameters are checked fail-fast; only the first problem is reported
//! - Storage failures propagate unchanged and are never turned into
//!   validation errors

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::CatalogConfig;
pub use error::{CatalogError, CatalogResult};
pub use infra::memory::InMemoryCatalogRepository;

// Re-export kernel types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
pub use kernel::pagination::{Pagination, SearchQuery, SortDirection};
pub use kernel::validation::{Error, Notification, ValidationHandler};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
}
