//! Create Video Use Case

use std::sync::Arc;

use kernel::validation::{Notification, ValidationHandler};

use crate::domain::{
    CastMemberRepository, CategoryRepository, GenreRepository, Video, VideoRepository,
    value_object::VideoId,
};
use crate::error::{CatalogError, CatalogResult};

use super::{VideoInput, VideoReferences};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateVideoOutput {
    pub id: VideoId,
}

pub struct CreateVideoUseCase<V, C, G, M>
where
    V: VideoRepository,
    C: CategoryRepository,
    G: GenreRepository,
    M: CastMemberRepository,
{
    video_repo: Arc<V>,
    references: VideoReferences<C, G, M>,
}

impl<V, C, G, M> CreateVideoUseCase<V, C, G, M>
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

    pub async fn execute(&self, input: VideoInput) -> CatalogResult<CreateVideoOutput> {
        let mut notification = Notification::create();
        let draft = self.references.draft(&mut notification, input).await?;

        let video = Video::new_video(draft);
        video.validate(&mut notification);

        if notification.has_error() {
            return Err(CatalogError::validation(
                "Could not create Aggregate Video",
                notification,
            ));
        }

        self.video_repo.create(&video).await?;

        tracing::info!(video_id = %video.id, title = %video.title, "Video created");

        Ok(CreateVideoOutput { id: video.id })
    }
}
