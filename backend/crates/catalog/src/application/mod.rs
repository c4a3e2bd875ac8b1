//! Application Layer
//!
//! Use cases per aggregate plus the shared configuration, list query
//! parsing and referential checks.

pub mod cast_member;
pub mod category;
pub mod config;
pub mod genre;
pub mod query;
pub mod references;
pub mod video;

use kernel::id::Id;

use crate::error::{CatalogError, CatalogResult};

// Re-exports
pub use config::CatalogConfig;
pub use query::ListInput;

/// Raw identifier to typed id; anything unparsable cannot exist either
pub(crate) fn parse_id<T>(aggregate: &'static str, raw: &str) -> CatalogResult<Id<T>> {
    Id::parse_str(raw).map_err(|_| CatalogError::not_found(aggregate, raw.trim()))
}
