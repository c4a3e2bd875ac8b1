//! Genre use cases

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{
    Genre,
    value_object::{CategoryId, GenreId},
};

pub use create::{CreateGenreInput, CreateGenreOutput, CreateGenreUseCase};
pub use delete::DeleteGenreUseCase;
pub use get::GetGenreByIdUseCase;
pub use list::{GENRE_SORTABLE_FIELDS, ListGenresUseCase};
pub use update::{UpdateGenreInput, UpdateGenreOutput, UpdateGenreUseCase};

pub(crate) const AGGREGATE: &str = "Genre";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreOutput {
    pub id: GenreId,
    pub name: String,
    pub is_active: bool,
    pub categories: Vec<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Genre> for GenreOutput {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: genre.name,
            is_active: genre.is_active,
            categories: genre.categories.into_iter().collect(),
            created_at: genre.created_at,
            updated_at: genre.updated_at,
            deleted_at: genre.deleted_at,
        }
    }
}
