//! Create Genre Use Case
//!
//! Unknown category ids are reported together with the genre's own
//! field errors.

use std::collections::BTreeSet;
use std::sync::Arc;

use kernel::validation::{Notification, ValidationHandler};

use crate::application::{query::parse_ids, references::check_categories};
use crate::domain::{
    CategoryRepository, Genre, GenreRepository,
    value_object::{CategoryId, GenreId},
};
use crate::error::{CatalogError, CatalogResult, Step};

pub struct CreateGenreInput {
    pub name: String,
    pub is_active: bool,
    /// Raw category ids
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateGenreOutput {
    pub id: GenreId,
}

pub struct CreateGenreUseCase<G, C>
where
    G: GenreRepository,
    C: CategoryRepository,
{
    genre_repo: Arc<G>,
    category_repo: Arc<C>,
}

impl<G, C> CreateGenreUseCase<G, C>
where
    G: GenreRepository,
    C: CategoryRepository,
{
    pub fn new(genre_repo: Arc<G>, category_repo: Arc<C>) -> Self {
        Self {
            genre_repo,
            category_repo,
        }
    }

    pub async fn execute(&self, input: CreateGenreInput) -> CatalogResult<CreateGenreOutput> {
        let mut notification = Notification::create();
        let categories: BTreeSet<CategoryId> =
            parse_ids(&mut notification, "categories", &input.categories)?;
        notification.merge(&check_categories(self.category_repo.as_ref(), &categories).await?);

        let genre = notification.validate(|| -> Step<Genre> {
            let mut genre = Genre::new_genre(input.name, input.is_active)?;
            genre.add_categories(categories.iter().copied());
            Ok(genre)
        })?;

        let genre = match genre {
            Some(genre) if !notification.has_error() => genre,
            _ => {
                return Err(CatalogError::validation(
                    "Could not create Aggregate Genre",
                    notification,
                ));
            }
        };

        self.genre_repo.create(&genre).await?;

        tracing::info!(
            genre_id = %genre.id,
            categories = genre.categories.len(),
            "Genre created"
        );

        Ok(CreateGenreOutput { id: genre.id })
    }
}
