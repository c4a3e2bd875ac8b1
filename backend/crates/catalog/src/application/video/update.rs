//! Update Video Use Case

use std::sync::Arc;

use kernel::validation::{Notification, ValidationHandler};

use crate::application::parse_id;
use crate::domain::{
    CastMemberRepository, CategoryRepository, GenreRepository, VideoRepository,
    value_object::VideoId,
};
use crate::error::{CatalogError, CatalogResult};

use super::{AGGREGATE, VideoInput, VideoReferences};

pub struct UpdateVideoInput {
    pub id: String,
    pub video: VideoInput,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateVideoOutput {
    pub id: VideoId,
}

pub struct UpdateVideoUseCase<V, C, G, M>
where
    V: VideoRepository,
    C: CategoryRepository,
    G: GenreRepository,
    M: CastMemberRepository,
{
    video_repo: Arc<V>,
    references: VideoReferences<C, G, M>,
}

impl<V, C, G, M> UpdateVideoUseCase<V, C, G, M>
where
    V: VideoRepository,
    C: CategoryRepository,
    G: GenreRepository,
    M: CastMemberRepository,
{
    pub fn new(video_repo: Arc<V>, references: VideoReferences<C, G, M>) -> Self {
        Self {
            video_repo,
            references,
        }
    }

    pub async fn execute(&self, input: UpdateVideoInput) -> CatalogResult<UpdateVideoOutput> {
        let id: VideoId = parse_id(AGGREGATE, &input.id)?;
        let mut video = self
            .video_repo
            .find_by_id(&id)
            .await?
            .ok_or_else(|| CatalogError::not_found(AGGREGATE, id.to_string()))?;

        let mut notification = Notification::create();
        let draft = self.references.draft(&mut notification, input.video).await?;

        video.update(draft);
        video.validate(&mut notification);

        if notification.has_error() {
            return Err(CatalogError::validation(
                format!("Could not update Aggregate Video {id}"),
                notification,
            ));
        }

        self.video_repo.update(&video).await?;

        tracing::info!(video_id = %id, published = video.published, "Video updated");

        Ok(UpdateVideoOutput { id })
    }
}
