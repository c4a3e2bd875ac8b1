//! List Categories Use Case

use std::sync::Arc;

use kernel::pagination::Pagination;

use crate::application::config::CatalogConfig;
use crate::application::query::{ListInput, build_query};
use crate::domain::CategoryRepository;
use crate::error::CatalogResult;

use super::CategoryOutput;

/// Fields a category listing can be sorted by
pub const CATEGORY_SORTABLE_FIELDS: &[&str] = &["name", "description", "createdAt"];

pub struct ListCategoriesUseCase<R>
where
    R: CategoryRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> ListCategoriesUseCase<R>
where
    R: CategoryRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: ListInput) -> CatalogResult<Pagination<CategoryOutput>> {
        let query = build_query(&self.config, input, "name", CATEGORY_SORTABLE_FIELDS)?;
        let page = self.repo.find_all(&query).await?;

        tracing::debug!(
            page = page.current_page,
            total = page.total,
            "Categories listed"
        );

        Ok(page.map(CategoryOutput::from))
    }
}
