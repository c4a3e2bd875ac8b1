//! Repository Traits
//!
//! Persistence ports for each aggregate. Implementations live in the
//! infrastructure layer; storage failures surface as `CatalogError::Storage`.

use std::collections::BTreeSet;

use kernel::pagination::{Pagination, SearchQuery};

use crate::domain::entity::{
    cast_member::CastMember, category::Category, genre::Genre, video::Video,
};
use crate::domain::value_object::{CastMemberId, CategoryId, GenreId, VideoId};
use crate::error::CatalogResult;

/// Category repository trait
#[trait_variant::make(CategoryRepository: Send)]
pub trait LocalCategoryRepository {
    /// Persist a new category
    async fn create(&self, category: &Category) -> CatalogResult<()>;

    /// Replace a stored category
    async fn update(&self, category: &Category) -> CatalogResult<()>;

    /// Find category by ID
    async fn find_by_id(&self, id: &CategoryId) -> CatalogResult<Option<Category>>;

    /// Page of categories matching the query terms
    async fn find_all(&self, query: &SearchQuery) -> CatalogResult<Pagination<Category>>;

    /// Remove a category, `false` when nothing was stored under `id`
    async fn delete_by_id(&self, id: &CategoryId) -> CatalogResult<bool>;

    /// Subset of `ids` that exist, in the order given
    async fn exists_by_ids(&self, ids: &[CategoryId]) -> CatalogResult<Vec<CategoryId>>;
}

/// Cast member repository trait
#[trait_variant::make(CastMemberRepository: Send)]
pub trait LocalCastMemberRepository {
    async fn create(&self, member: &CastMember) -> CatalogResult<()>;

    async fn update(&self, member: &CastMember) -> CatalogResult<()>;

    async fn find_by_id(&self, id: &CastMemberId) -> CatalogResult<Option<CastMember>>;

    async fn find_all(&self, query: &SearchQuery) -> CatalogResult<Pagination<CastMember>>;

    async fn delete_by_id(&self, id: &CastMemberId) -> CatalogResult<bool>;

    async fn exists_by_ids(&self, ids: &[CastMemberId]) -> CatalogResult<Vec<CastMemberId>>;
}

/// Genre repository trait
#[trait_variant::make(GenreRepository: Send)]
pub trait LocalGenreRepository {
    async fn create(&self, genre: &Genre) -> CatalogResult<()>;

    async fn update(&self, genre: &Genre) -> CatalogResult<()>;

    async fn find_by_id(&self, id: &GenreId) -> CatalogResult<Option<Genre>>;

    async fn find_all(&self, query: &SearchQuery) -> CatalogResult<Pagination<Genre>>;

    async fn delete_by_id(&self, id: &GenreId) -> CatalogResult<bool>;

    async fn exists_by_ids(&self, ids: &[GenreId]) -> CatalogResult<Vec<GenreId>>;
}

/// Video search: generic query plus relation filters.
///
/// An empty filter set means "no filter"; a non-empty one keeps videos
/// linked to at least one of the listed ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoSearchQuery {
    pub query: SearchQuery,
    pub categories: BTreeSet<CategoryId>,
    pub genres: BTreeSet<GenreId>,
    pub cast_members: BTreeSet<CastMemberId>,
}

impl VideoSearchQuery {
    pub const DEFAULT_SORT: &'static str = "title";
}

impl Default for VideoSearchQuery {
    fn default() -> Self {
        Self {
            query: SearchQuery {
                sort: Self::DEFAULT_SORT.to_string(),
                ..SearchQuery::default()
            },
            categories: BTreeSet::new(),
            genres: BTreeSet::new(),
            cast_members: BTreeSet::new(),
        }
    }
}

/// Video repository trait
#[trait_variant::make(VideoRepository: Send)]
pub trait LocalVideoRepository {
    async fn create(&self, video: &Video) -> CatalogResult<()>;

    async fn update(&self, video: &Video) -> CatalogResult<()>;

    async fn find_by_id(&self, id: &VideoId) -> CatalogResult<Option<Video>>;

    async fn find_all(&self, query: &VideoSearchQuery) -> CatalogResult<Pagination<Video>>;

    async fn delete_by_id(&self, id: &VideoId) -> CatalogResult<bool>;
}
