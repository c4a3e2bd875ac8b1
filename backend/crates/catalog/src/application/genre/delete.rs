//! Delete Genre Use Case

use std::sync::Arc;

use crate::application::parse_id;
use crate::domain::{GenreRepository, value_object::GenreId};
use crate::error::{CatalogError, CatalogResult};

use super::AGGREGATE;

pub struct DeleteGenreUseCase<R>
where
    R: GenreRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteGenreUseCase<R>
where
    R: GenreRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<()> {
        let id: GenreId = parse_id(AGGREGATE, id)?;
        if !self.repo.delete_by_id(&id).await? {
            return Err(CatalogError::not_found(AGGREGATE, id.to_string()));
        }

        tracing::info!(genre_id = %id, "Genre deleted");

        Ok(())
    }
}
