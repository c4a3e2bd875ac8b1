//! Referential checks
//!
//! Before an aggregate is built, the ids it links to are looked up. Each
//! check yields its own notification, which the use case merges first.

use std::collections::BTreeSet;

use kernel::id::Id;
use kernel::validation::{Error, Notification, ValidationHandler};

use crate::domain::repository::{CastMemberRepository, CategoryRepository, GenreRepository};
use crate::domain::value_object::{CastMemberId, CategoryId, GenreId};
use crate::error::CatalogResult;

/// Notification listing the requested ids that were not found
pub fn missing_ids<T>(kind: &str, requested: &BTreeSet<Id<T>>, found: &[Id<T>]) -> Notification {
    let found: BTreeSet<&Id<T>> = found.iter().collect();
    let missing: Vec<String> = requested
        .iter()
        .filter(|id| !found.contains(id))
        .map(ToString::to_string)
        .collect();

    let mut notification = Notification::create();
    if !missing.is_empty() {
        notification.append(Error::new(format!(
            "Some {kind} could not be found: {}",
            missing.join(", ")
        )));
    }
    notification
}

pub async fn check_categories<R: CategoryRepository>(
    repo: &R,
    ids: &BTreeSet<CategoryId>,
) -> CatalogResult<Notification> {
    if ids.is_empty() {
        return Ok(Notification::create());
    }
    let requested: Vec<CategoryId> = ids.iter().copied().collect();
    let found = repo.exists_by_ids(&requested).await?;
    Ok(missing_ids("categories", ids, &found))
}

pub async fn check_genres<R: GenreRepository>(
    repo: &R,
    ids: &BTreeSet<GenreId>,
) -> CatalogResult<Notification> {
    if ids.is_empty() {
        return Ok(Notification::create());
    }
    let requested: Vec<GenreId> = ids.iter().copied().collect();
    let found = repo.exists_by_ids(&requested).await?;
    Ok(missing_ids("genres", ids, &found))
}

pub async fn check_cast_members<R: CastMemberRepository>(
    repo: &R,
    ids: &BTreeSet<CastMemberId>,
) -> CatalogResult<Notification> {
    if ids.is_empty() {
        return Ok(Notification::create());
    }
    let requested: Vec<CastMemberId> = ids.iter().copied().collect();
    let found = repo.exists_by_ids(&requested).await?;
    Ok(missing_ids("cast members", ids, &found))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nothing_missing() {
        let a = CategoryId::new();
        let requested = BTreeSet::from([a]);
        let notification = missing_ids("categories", &requested, &[a]);
        assert!(!notification.has_error());
    }

    #[test]
    fn test_missing_ids_in_one_error() {
        let a = CategoryId::new();
        let b = CategoryId::new();
        let c = CategoryId::new();
        let requested = BTreeSet::from([a, b, c]);

        let notification = missing_ids("categories", &requested, &[b]);

        let mut expected: Vec<String> = vec![a.to_string(), c.to_string()];
        expected.sort();
        assert_eq!(notification.errors().len(), 1);
        assert_eq!(
            notification.errors()[0].message(),
            format!("Some categories could not be found: {}", expected.join(", "))
        );
    }
}
