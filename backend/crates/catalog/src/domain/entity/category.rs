//! Category Entity
//!
//! Top-level classification of videos. Inactive categories keep their
//! data and carry the time they were deactivated in `deleted_at`.

use chrono::{DateTime, Utc};
use kernel::validation::ValidationHandler;

use crate::domain::rules;
use crate::domain::value_object::CategoryId;

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Set while the category is inactive
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Category {
    pub const NAME_MIN_LENGTH: usize = 3;
    pub const NAME_MAX_LENGTH: usize = 255;

    /// Build a new category. Call [`Category::validate`] before persisting.
    pub fn new_category(
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: CategoryId::new(),
            name: name.into(),
            description,
            is_active,
            created_at: now,
            updated_at: now,
            deleted_at: (!is_active).then_some(now),
        }
    }

    /// Append one error per violated rule
    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) {
        rules::required_text(
            handler,
            "name",
            &self.name,
            Self::NAME_MIN_LENGTH,
            Self::NAME_MAX_LENGTH,
        );
    }

    pub fn update(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
        is_active: bool,
    ) -> &mut Self {
        if is_active {
            self.activate();
        } else {
            self.deactivate();
        }
        self.name = name.into();
        self.description = description;
        self.updated_at = Utc::now();
        self
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.is_active = true;
        self.updated_at = Utc::now();
        self
    }

    /// Keeps the original deactivation time when already inactive
    pub fn deactivate(&mut self) -> &mut Self {
        let now = Utc::now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.is_active = false;
        self.updated_at = now;
        self
    }
}
