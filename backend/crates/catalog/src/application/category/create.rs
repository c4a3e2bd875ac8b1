//! Create Category Use Case

use std::sync::Arc;

use kernel::validation::{Notification, ValidationHandler};

use crate::domain::{Category, CategoryRepository, value_object::CategoryId};
use crate::error::{CatalogError, CatalogResult};

/// Create category input
pub struct CreateCategoryInput {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Create category output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCategoryOutput {
    pub id: CategoryId,
}

/// Create category use case
pub struct CreateCategoryUseCase<R>
where
    R: CategoryRepository,
{
    repo: Arc<R>,
}

impl<R> CreateCategoryUseCase<R>
where
    R: CategoryRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: CreateCategoryInput) -> CatalogResult<CreateCategoryOutput> {
        let category = Category::new_category(input.name, input.description, input.is_active);

        let mut notification = Notification::create();
        category.validate(&mut notification);
        if notification.has_error() {
            return Err(CatalogError::validation(
                "Could not create Aggregate Category",
                notification,
            ));
        }

        self.repo.create(&category).await?;

        tracing::info!(category_id = %category.id, name = %category.name, "Category created");

        Ok(CreateCategoryOutput { id: category.id })
    }
}
