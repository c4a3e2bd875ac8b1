//! Category use cases

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{Category, value_object::CategoryId};

pub use create::{CreateCategoryInput, CreateCategoryOutput, CreateCategoryUseCase};
pub use delete::DeleteCategoryUseCase;
pub use get::GetCategoryByIdUseCase;
pub use list::{CATEGORY_SORTABLE_FIELDS, ListCategoriesUseCase};
pub use update::{UpdateCategoryInput, UpdateCategoryOutput, UpdateCategoryUseCase};

pub(crate) const AGGREGATE: &str = "Category";

/// Category as returned by get and list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOutput {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<Category> for CategoryOutput {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            description: category.description,
            is_active: category.is_active,
            created_at: category.created_at,
            updated_at: category.updated_at,
            deleted_at: category.deleted_at,
        }
    }
}
