//! Update Category Use Case

use std::sync::Arc;

use kernel::validation::{Notification, ValidationHandler};

use crate::application::parse_id;
use crate::domain::{CategoryRepository, value_object::CategoryId};
use crate::error::{CatalogError, CatalogResult};

use super::AGGREGATE;

/// Update category input
pub struct UpdateCategoryInput {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Update category output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCategoryOutput {
    pub id: CategoryId,
}

/// Update category use case
pub struct UpdateCategoryUseCase<R>
where
    R: CategoryRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateCategoryUseCase<R>
where
    R: CategoryRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: UpdateCategoryInput) -> CatalogResult<UpdateCategoryOutput> {
        let id: CategoryId = parse_id(AGGREGATE, &input.id)?;
        let mut category = self
            .repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::not_found(AGGREGATE, id.to_string()))?;

        category.update(input.name, input.description, input.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification);
        if notification.has_error() {
            return Err(CatalogError::validation(
                format!("Could not update Aggregate Category {id}"),
                notification,
            ));
        }

        self.repo.update(&category).await?;

        tracing::info!(category_id = %id, is_active = category.is_active, "Category updated");

        Ok(UpdateCategoryOutput { id })
    }
}
