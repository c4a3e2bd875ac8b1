//! List Genres Use Case

use std::sync::Arc;

use kernel::pagination::Pagination;

use crate::application::config::CatalogConfig;
use crate::application::query::{ListInput, build_query};
use crate::domain::GenreRepository;
use crate::error::CatalogResult;

use super::GenreOutput;

pub const GENRE_SORTABLE_FIELDS: &[&str] = &["name", "createdAt"];

pub struct ListGenresUseCase<R>
where
    R: GenreRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> ListGenresUseCase<R>
where
    R: GenreRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ListInput) -> CatalogResult<Pagination<GenreOutput>> {
        let query = build_query(&self.config, input, "name", GENRE_SORTABLE_FIELDS)?;
        let page = self.repo.find_all(&query).await?;
        Ok(page.map(GenreOutput::from))
    }
}
