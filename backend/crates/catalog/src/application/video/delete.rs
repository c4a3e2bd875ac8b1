//! Delete Video Use Case

use std::sync::Arc;

use crate::application::parse_id;
use crate::domain::{VideoRepository, value_object::VideoId};
use crate::error::{CatalogError, CatalogResult};

use super::AGGREGATE;

pub struct DeleteVideoUseCase<R>
where
    R: VideoRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteVideoUseCase<R>
where
    R: VideoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, id: &str) -> CatalogResult<()> {
        let id: VideoId = parse_id(AGGREGATE, id)?;
        if !self.repo.delete_by_id(&id).await? {
            return Err(CatalogError::not_found(AGGREGATE, id.to_string()));
        }

        tracing::info!(video_id = %id, "Video deleted");

        Ok(())
    }
}
