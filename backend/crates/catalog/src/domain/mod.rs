//! Domain Layer
//!
//! Contains entities, value objects, field rules and repository traits.

pub mod entity;
pub mod repository;
pub mod rules;
pub mod value_object;

// Re-exports
pub use entity::{cast_member::CastMember, category::Category, genre::Genre, video::Video};
pub use repository::{
    CastMemberRepository, CategoryRepository, GenreRepository, VideoRepository, VideoSearchQuery,
};
