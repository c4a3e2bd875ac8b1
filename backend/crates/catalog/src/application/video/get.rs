//! Get Video Use Case

use std::sync::Arc;

use crate::application::parse_id;
use crate::domain::{VideoRepository, value_object::VideoId};
use crate::error::{CatalogError, CatalogResult};

use super::{AGGREGATE, VideoOutput};

pub struct GetVideoByIdUseCase<R>
where
    R: VideoRepository,
{
    repo: Arc<R>,
}

impl<R> GetVideoByIdUseCase<R>
where
    R: VideoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<VideoOutput> {
        let id: VideoId = parse_id(AGGREGATE, id)?;
        self.repo
            .find_by_id(&id)
            .await?
            .map(VideoOutput::from)
            .ok_or_else(|| CatalogError::not_found(AGGREGATE, id.to_string()))
    }
}
