//! Delete Category Use Case

use std::sync::Arc;

use crate::application::parse_id;
use crate::domain::{CategoryRepository, value_object::CategoryId};
use crate::error::{CatalogError, CatalogResult};

use super::AGGREGATE;

pub struct DeleteCategoryUseCase<R>
where
    R: CategoryRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteCategoryUseCase<R>
where
    R: CategoryRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<()> {
        let id: CategoryId = parse_id(AGGREGATE, id)?;
        if !self.repo.delete_by_id(&id).await? {
            return Err(CatalogError::not_found(AGGREGATE, id.to_string()));
        }

        tracing::info!(category_id = %id, "Category deleted");

        Ok(())
    }
}
