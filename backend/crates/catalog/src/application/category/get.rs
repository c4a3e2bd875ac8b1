//! Get Category Use Case

use std::sync::Arc;

use crate::application::parse_id;
use crate::domain::{CategoryRepository, value_object::CategoryId};
use crate::error::{CatalogError, CatalogResult};

use super::{AGGREGATE, CategoryOutput};

pub struct GetCategoryByIdUseCase<R>
where
    R: CategoryRepository,
{
    repo: Arc<R>,
}

impl<R> GetCategoryByIdUseCase<R>
where
    R: CategoryRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<CategoryOutput> {
        let id: CategoryId = parse_id(AGGREGATE, id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .map(CategoryOutput::from)
            .ok_or_else(|| CatalogError::not_found(AGGREGATE, id.to_string()))
    }
}
