//! Genre Entity

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use kernel::validation::{DomainError, Notification, ValidationHandler};

use crate::domain::rules;
use crate::domain::value_object::{CategoryId, GenreId};

/// Genre grouping videos across categories
#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
    pub is_active: bool,
    pub categories: BTreeSet<CategoryId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Genre {
    pub const NAME_MIN_LENGTH: usize = 1;
    pub const NAME_MAX_LENGTH: usize = 255;

    /// Build and validate a new genre without categories
    pub fn new_genre(name: impl Into<String>, is_active: bool) -> Result<Self, DomainError> {
        let now = Utc::now();
        let genre = Self {
            id: GenreId::new(),
            name: name.into(),
            is_active,
            categories: BTreeSet::new(),
            created_at: now,
            updated_at: now,
            deleted_at: (!is_active).then_some(now),
        };
        genre.self_validate("Failed to create Aggregate Genre")?;
        Ok(genre)
    }

    /// Replace name, status and categories, then validate
    ///
    /// The genre is left untouched when validation fails.
    pub fn update(
        &mut self,
        name: impl Into<String>,
        is_active: bool,
        categories: impl IntoIterator<Item = CategoryId>,
    ) -> Result<&mut Self, DomainError> {
        let mut candidate = self.clone();
        if is_active {
            candidate.activate();
        } else {
            candidate.deactivate();
        }
        candidate.name = name.into();
        candidate.categories = categories.into_iter().collect();
        candidate.self_validate("Failed to update Aggregate Genre")?;

        candidate.updated_at = Utc::now();
        *self = candidate;
        Ok(self)
    }

    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) {
        rules::required_text(
            handler,
            "name",
            &self.name,
            Self::NAME_MIN_LENGTH,
            Self::NAME_MAX_LENGTH,
        );
    }

    pub fn add_category(&mut self, id: CategoryId) -> &mut Self {
        if self.categories.insert(id) {
            self.updated_at = Utc::now();
        }
        self
    }

    pub fn add_categories(&mut self, ids: impl IntoIterator<Item = CategoryId>) -> &mut Self {
        let before = self.categories.len();
        self.categories.extend(ids);
        if self.categories.len() != before {
            self.updated_at = Utc::now();
        }
        self
    }

    pub fn remove_category(&mut self, id: &CategoryId) -> &mut Self {
        if self.categories.remove(id) {
            self.updated_at = Utc::now();
        }
        self
    }

    pub fn activate(&mut self) -> &mut Self {
        self.deleted_at = None;
        self.is_active = true;
        self.updated_at = Utc::now();
        self
    }

    pub fn deactivate(&mut self) -> &mut Self {
        let now = Utc::now();
        if self.deleted_at.is_none() {
            self.deleted_at = Some(now);
        }
        self.is_active = false;
        self.updated_at = now;
        self
    }

    fn self_validate(&self, message: &str) -> Result<(), DomainError> {
        let mut notification = Notification::create();
        self.validate(&mut notification);
        notification.into_result(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_genre() {
        let genre = Genre::new_genre("Action", true).unwrap();
        assert_eq!(genre.name, "Action");
        assert!(genre.is_active);
        assert!(genre.categories.is_empty());
        assert!(genre.deleted_at.is_none());
    }

    #[test]
    fn test_single_character_name_is_valid() {
        assert!(Genre::new_genre("X", false).is_ok());
    }

    #[test]
    fn test_new_genre_rejects_blank_name() {
        let err = Genre::new_genre(" ", true).unwrap_err();
        assert_eq!(err.errors().len(), 1);
        assert_eq!(
            err.first_error().map(|e| e.message()),
            Some("'name' should not be empty")
        );
    }

    #[test]
    fn test_new_genre_rejects_long_name() {
        let err = Genre::new_genre("g".repeat(256), true).unwrap_err();
        assert_eq!(
            err.first_error().map(|e| e.message()),
            Some("'name' must be between 1 and 255 characters")
        );
    }

    #[test]
    fn test_categories_are_a_set() {
        let mut genre = Genre::new_genre("Action", true).unwrap();
        let movies = CategoryId::new();
        let series = CategoryId::new();

        genre.add_category(movies).add_categories([movies, series]);
        assert_eq!(genre.categories.len(), 2);

        genre.remove_category(&movies);
        assert_eq!(genre.categories.iter().collect::<Vec<_>>(), vec![&series]);
    }

    #[test]
    fn test_update() {
        let mut genre = Genre::new_genre("Action", true).unwrap();
        let category = CategoryId::new();

        genre.update("Drama", false, [category]).unwrap();

        assert_eq!(genre.name, "Drama");
        assert!(!genre.is_active);
        assert!(genre.deleted_at.is_some());
        assert!(genre.categories.contains(&category));
    }

    #[test]
    fn test_invalid_update_leaves_genre_untouched() {
        let mut genre = Genre::new_genre("Action", true).unwrap();
        let before = genre.clone();

        assert!(genre.update("", false, [CategoryId::new()]).is_err());
        assert_eq!(genre, before);
    }
}
