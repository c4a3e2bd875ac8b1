//! Update Genre Use Case

use std::collections::BTreeSet;
use std::sync::Arc;

use kernel::validation::{Notification, ValidationHandler};

use crate::application::{parse_id, query::parse_ids, references::check_categories};
use crate::domain::{
    CategoryRepository, GenreRepository,
    value_object::{CategoryId, GenreId},
};
use crate::error::{CatalogError, CatalogResult, Step};

use super::AGGREGATE;

pub struct UpdateGenreInput {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    /// Raw category ids; replaces the current set
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateGenreOutput {
    pub id: GenreId,
}

pub struct UpdateGenreUseCase<G, C>
where
    G: GenreRepository,
    C: CategoryRepository,
{
    genre_repo: Arc<G>,
    category_repo: Arc<C>,
}

impl<G, C> UpdateGenreUseCase<G, C>
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

    pub async fn execute(&self, input: UpdateGenreInput) -> CatalogResult<UpdateGenreOutput> {
        let id: GenreId = parse_id(AGGREGATE, &input.id)?;
        let mut genre = self
            .genre_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::not_found(AGGREGATE, id.to_string()))?;

        let mut notification = Notification::create();
        let categories: BTreeSet<CategoryId> =
            parse_ids(&mut notification, "categories", &input.categories)?;
        notification.merge(&check_categories(self.category_repo.as_ref(), &categories).await?);

        notification.validate(|| -> Step<()> {
            genre.update(input.name, input.is_active, categories)?;
            Ok(())
        })?;

        if notification.has_error() {
            return Err(CatalogError::validation(
                format!("Could not update Aggregate Genre {id}"),
                notification,
            ));
        }

        self.genre_repo.update(&genre).await?;

        tracing::info!(genre_id = %id, is_active = genre.is_active, "Genre updated");

        Ok(UpdateGenreOutput { id })
    }
}
