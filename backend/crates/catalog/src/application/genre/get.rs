//! Get Genre Use Case

use std::sync::Arc;

use crate::application::parse_id;
use crate::domain::{GenreRepository, value_object::GenreId};
use crate::error::{CatalogError, CatalogResult};

use super::{AGGREGATE, GenreOutput};

pub struct GetGenreByIdUseCase<R>
where
    R: GenreRepository,
{
    repo: Arc<R>,
}

impl<R> GetGenreByIdUseCase<R>
where
    R: GenreRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<GenreOutput> {
        let id: GenreId = parse_id(AGGREGATE, id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .map(GenreOutput::from)
            .ok_or_else(|| CatalogError::not_found(AGGREGATE, id.to_string()))
    }
}
