//! Value Object Module

pub mod cast_member_type;
pub mod rating;

pub use kernel::id::{CastMemberId, CategoryId, GenreId, VideoId};
