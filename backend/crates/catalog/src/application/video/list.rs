//! List Videos Use Case
//!
//! Besides the common list parameters, videos can be filtered by the
//! categories, genres and cast members they link to.

use std::sync::Arc;

use kernel::pagination::Pagination;
use kernel::validation::FailFast;

use crate::application::config::CatalogConfig;
use crate::application::query::{ListInput, parse_ids, parse_query};
use crate::domain::{VideoRepository, VideoSearchQuery};
use crate::error::{CatalogError, CatalogResult};

use super::VideoOutput;

pub const VIDEO_SORTABLE_FIELDS: &[&str] = &["title", "createdAt", "launchedAt"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoListInput {
    pub list: ListInput,
    /// Raw category ids
    pub categories: Vec<String>,
    /// Raw genre ids
    pub genres: Vec<String>,
    /// Raw cast member ids
    pub cast_members: Vec<String>,
}

pub struct ListVideosUseCase<R>
where
    R: VideoRepository,
{
    repo: Arc<R>,
    config: Arc<CatalogConfig>,
}

impl<R> ListVideosUseCase<R>
where
    R: VideoRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CatalogConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: VideoListInput) -> CatalogResult<Pagination<VideoOutput>> {
        let query = self.search_query(input)?;
        let page = self.repo.find_all(&query).await?;

        tracing::debug!(
            page = page.current_page,
            total = page.total,
            filtered = !(query.categories.is_empty()
                && query.genres.is_empty()
                && query.cast_members.is_empty()),
            "Videos listed"
        );

        Ok(page.map(VideoOutput::from))
    }

    fn search_query(&self, input: VideoListInput) -> CatalogResult<VideoSearchQuery> {
        let mut handler = FailFast::create();
        let query = parse_query(
            &mut handler,
            &self.config,
            input.list,
            VideoSearchQuery::DEFAULT_SORT,
            VIDEO_SORTABLE_FIELDS,
        )?;
        let categories = parse_ids(&mut handler, "categories", &input.categories)?;
        let genres = parse_ids(&mut handler, "genres", &input.genres)?;
        let cast_members = parse_ids(&mut handler, "castMembers", &input.cast_members)?;
        handler.into_result().map_err(CatalogError::InvalidQuery)?;

        Ok(VideoSearchQuery {
            query,
            categories,
            genres,
            cast_members,
        })
    }
}
