//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of catalog vocabulary:
//! - Common error types and result aliases
//! - Typed identifiers for the catalog aggregates
//! - The accumulating validation contract (`ValidationHandler` / `Notification`)
//! - Search query and page envelope primitives
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all aggregates.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
pub mod pagination;
pub mod validation;
