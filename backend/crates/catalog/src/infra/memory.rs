//! In-Memory Repository Implementations
//!
//! One shared store backs every catalog repository so that relations stay
//! consistent: deleting a category, genre or cast member also unlinks it
//! from the genres and videos that referenced it.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::Id;
use kernel::pagination::{Pagination, SearchQuery};
use tokio::sync::RwLock;

use crate::domain::entity::{
    cast_member::CastMember, category::Category, genre::Genre, video::Video,
};
use crate::domain::repository::{
    CastMemberRepository, CategoryRepository, GenreRepository, VideoRepository, VideoSearchQuery,
};
use crate::domain::value_object::{CastMemberId, CategoryId, GenreId, VideoId};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Default)]
struct CatalogState {
    categories: BTreeMap<CategoryId, Category>,
    cast_members: BTreeMap<CastMemberId, CastMember>,
    genres: BTreeMap<GenreId, Genre>,
    videos: BTreeMap<VideoId, Video>,
}

/// In-memory catalog repository
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogRepository {
    state: Arc<RwLock<CatalogState>>,
}

impl InMemoryCatalogRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn insert_new<T, V>(
    map: &mut BTreeMap<Id<T>, V>,
    aggregate: &str,
    id: Id<T>,
    value: V,
) -> CatalogResult<()> {
    if map.contains_key(&id) {
        return Err(CatalogError::Storage(format!(
            "{aggregate} {id} is already stored"
        )));
    }
    map.insert(id, value);
    Ok(())
}

fn replace<T, V>(
    map: &mut BTreeMap<Id<T>, V>,
    aggregate: &str,
    id: Id<T>,
    value: V,
) -> CatalogResult<()> {
    match map.get_mut(&id) {
        Some(slot) => {
            *slot = value;
            Ok(())
        }
        None => Err(CatalogError::Storage(format!(
            "{aggregate} {id} is not stored"
        ))),
    }
}

fn existing<T, V>(map: &BTreeMap<Id<T>, V>, ids: &[Id<T>]) -> Vec<Id<T>> {
    ids.iter().filter(|id| map.contains_key(*id)).copied().collect()
}

/// Filter, sort and cut one page out of `items`
fn search<'a, T, M, C>(
    items: impl Iterator<Item = &'a T>,
    query: &SearchQuery,
    matches: M,
    compare: C,
) -> Pagination<T>
where
    T: Clone + 'a,
    M: Fn(&T, &str) -> bool,
    C: Fn(&T, &T, &str) -> Ordering,
{
    let terms = query.normalized_terms();
    let mut found: Vec<T> = items
        .filter(|item| terms.as_deref().is_none_or(|terms| matches(*item, terms)))
        .cloned()
        .collect();
    found.sort_by(|a, b| query.direction.apply(compare(a, b, query.sort.as_str())));
    Pagination::slice(found, query)
}

fn contains_terms(value: &str, terms: &str) -> bool {
    value.to_lowercase().contains(terms)
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

// ============================================================================
// Category Repository Implementation
// ============================================================================

impl CategoryRepository for InMemoryCatalogRepository {
    async fn create(&self, category: &Category) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        insert_new(&mut state.categories, "Category", category.id, category.clone())
    }

    async fn update(&self, category: &Category) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        replace(&mut state.categories, "Category", category.id, category.clone())
    }

    async fn find_by_id(&self, id: &CategoryId) -> CatalogResult<Option<Category>> {
        Ok(self.state.read().await.categories.get(id).cloned())
    }

    async fn find_all(&self, query: &SearchQuery) -> CatalogResult<Pagination<Category>> {
        let state = self.state.read().await;
        Ok(search(
            state.categories.values(),
            query,
            |c, terms| {
                contains_terms(&c.name, terms)
                    || c.description.as_deref().is_some_and(|d| contains_terms(d, terms))
            },
            |a, b, sort| match sort {
                "description" => a.description.cmp(&b.description),
                "createdAt" => a.created_at.cmp(&b.created_at),
                _ => compare_names(&a.name, &b.name),
            },
        ))
    }

    async fn delete_by_id(&self, id: &CategoryId) -> CatalogResult<bool> {
        let mut state = self.state.write().await;
        if state.categories.remove(id).is_none() {
            return Ok(false);
        }
        for genre in state.genres.values_mut() {
            genre.categories.remove(id);
        }
        for video in state.videos.values_mut() {
            video.categories.remove(id);
        }
        tracing::debug!(category_id = %id, "Category unlinked from genres and videos");
        Ok(true)
    }

    async fn exists_by_ids(&self, ids: &[CategoryId]) -> CatalogResult<Vec<CategoryId>> {
        Ok(existing(&self.state.read().await.categories, ids))
    }
}

// ============================================================================
// Cast Member Repository Implementation
// ============================================================================

impl CastMemberRepository for InMemoryCatalogRepository {
    async fn create(&self, member: &CastMember) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        insert_new(&mut state.cast_members, "CastMember", member.id, member.clone())
    }

    async fn update(&self, member: &CastMember) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        replace(&mut state.cast_members, "CastMember", member.id, member.clone())
    }

    async fn find_by_id(&self, id: &CastMemberId) -> CatalogResult<Option<CastMember>> {
        Ok(self.state.read().await.cast_members.get(id).cloned())
    }

    async fn find_all(&self, query: &SearchQuery) -> CatalogResult<Pagination<CastMember>> {
        let state = self.state.read().await;
        Ok(search(
            state.cast_members.values(),
            query,
            |m, terms| contains_terms(&m.name, terms),
            |a, b, sort| match sort {
                "createdAt" => a.created_at.cmp(&b.created_at),
                _ => compare_names(&a.name, &b.name),
            },
        ))
    }

    async fn delete_by_id(&self, id: &CastMemberId) -> CatalogResult<bool> {
        let mut state = self.state.write().await;
        if state.cast_members.remove(id).is_none() {
            return Ok(false);
        }
        for video in state.videos.values_mut() {
            video.cast_members.remove(id);
        }
        Ok(true)
    }

    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> CatalogResult<Vec<CastMemberId>> {
        Ok(existing(&self.state.read().await.cast_members, ids))
    }
}

// ============================================================================
// Genre Repository Implementation
// ============================================================================

impl GenreRepository for InMemoryCatalogRepository {
    async fn create(&self, genre: &Genre) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        insert_new(&mut state.genres, "Genre", genre.id, genre.clone())
    }

    async fn update(&self, genre: &Genre) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        replace(&mut state.genres, "Genre", genre.id, genre.clone())
    }

    async fn find_by_id(&self, id: &GenreId) -> CatalogResult<Option<Genre>> {
        Ok(self.state.read().await.genres.get(id).cloned())
    }

    async fn find_all(&self, query: &SearchQuery) -> CatalogResult<Pagination<Genre>> {
        let state = self.state.read().await;
        Ok(search(
            state.genres.values(),
            query,
            |g, terms| contains_terms(&g.name, terms),
            |a, b, sort| match sort {
                "createdAt" => a.created_at.cmp(&b.created_at),
                _ => compare_names(&a.name, &b.name),
            },
        ))
    }

    async fn delete_by_id(&self, id: &GenreId) -> CatalogResult<bool> {
        let mut state = self.state.write().await;
        if state.genres.remove(id).is_none() {
            return Ok(false);
        }
        for video in state.videos.values_mut() {
            video.genres.remove(id);
        }
        Ok(true)
    }

    async fn exists_by_ids(&self, ids: &[GenreId]) -> CatalogResult<Vec<GenreId>> {
        Ok(existing(&self.state.read().await.genres, ids))
    }
}

// ============================================================================
// Video Repository Implementation
// ============================================================================

impl VideoRepository for InMemoryCatalogRepository {
    async fn create(&self, video: &Video) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        insert_new(&mut state.videos, "Video", video.id, video.clone())
    }

    async fn update(&self, video: &Video) -> CatalogResult<()> {
        let mut state = self.state.write().await;
        replace(&mut state.videos, "Video", video.id, video.clone())
    }

    async fn find_by_id(&self, id: &VideoId) -> CatalogResult<Option<Video>> {
        Ok(self.state.read().await.videos.get(id).cloned())
    }

    async fn find_all(&self, query: &VideoSearchQuery) -> CatalogResult<Pagination<Video>> {
        let state = self.state.read().await;
        let linked = state.videos.values().filter(|v| {
            (query.categories.is_empty() || !query.categories.is_disjoint(&v.categories))
                && (query.genres.is_empty() || !query.genres.is_disjoint(&v.genres))
                && (query.cast_members.is_empty()
                    || !query.cast_members.is_disjoint(&v.cast_members))
        });
        Ok(search(
            linked,
            &query.query,
            |v, terms| contains_terms(&v.title, terms) || contains_terms(&v.description, terms),
            |a, b, sort| match sort {
                "createdAt" => a.created_at.cmp(&b.created_at),
                "launchedAt" => a.launched_at.cmp(&b.launched_at),
                _ => compare_names(&a.title, &b.title),
            },
        ))
    }

    async fn delete_by_id(&self, id: &VideoId) -> CatalogResult<bool> {
        Ok(self.state.write().await.videos.remove(id).is_some())
    }
}
