//! Video use cases

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::validation::{Notification, ValidationHandler};
use serde::Serialize;

use crate::application::query::parse_ids;
use crate::application::references::{check_cast_members, check_categories, check_genres};
use crate::domain::entity::video::VideoDraft;
use crate::domain::value_object::{CastMemberId, CategoryId, GenreId, VideoId, rating::Rating};
use crate::domain::{CastMemberRepository, CategoryRepository, GenreRepository, Video};
use crate::error::CatalogResult;

pub use create::{CreateVideoOutput, CreateVideoUseCase};
pub use delete::DeleteVideoUseCase;
pub use get::GetVideoByIdUseCase;
pub use list::{ListVideosUseCase, VIDEO_SORTABLE_FIELDS, VideoListInput};
pub use update::{UpdateVideoInput, UpdateVideoOutput, UpdateVideoUseCase};

pub(crate) const AGGREGATE: &str = "Video";

/// Raw video fields shared by create and update
#[derive(Debug, Clone, Default)]
pub struct VideoInput {
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    /// Rating code; an unknown code counts as missing
    pub rating: Option<String>,
    pub opened: bool,
    pub published: bool,
    pub categories: Vec<String>,
    pub genres: Vec<String>,
    pub cast_members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoOutput {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub rating: Option<String>,
    pub opened: bool,
    pub published: bool,
    pub categories: Vec<CategoryId>,
    pub genres: Vec<GenreId>,
    pub cast_members: Vec<CastMemberId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Video> for VideoOutput {
    fn from(video: Video) -> Self {
        Self {
            id: video.id,
            title: video.title,
            description: video.description,
            launched_at: video.launched_at,
            duration: video.duration,
            rating: video.rating.map(|r| r.code().to_string()),
            opened: video.opened,
            published: video.published,
            categories: video.categories.into_iter().collect(),
            genres: video.genres.into_iter().collect(),
            cast_members: video.cast_members.into_iter().collect(),
            created_at: video.created_at,
            updated_at: video.updated_at,
        }
    }
}

/// Repositories a video links into
pub struct VideoReferences<C, G, M>
where
    C: CategoryRepository,
    G: GenreRepository,
    M: CastMemberRepository,
{
    category_repo: Arc<C>,
    genre_repo: Arc<G>,
    cast_member_repo: Arc<M>,
}

impl<C, G, M> VideoReferences<C, G, M>
where
    C: CategoryRepository,
    G: GenreRepository,
    M: CastMemberRepository,
{
    pub fn new(category_repo: Arc<C>, genre_repo: Arc<G>, cast_member_repo: Arc<M>) -> Self {
        Self {
            category_repo,
            genre_repo,
            cast_member_repo,
        }
    }

    /// Parse and look up every linked id, recording problems in `notification`
    ///
    /// The draft may only be persisted while `notification` stays clean.
    pub(crate) async fn draft(
        &self,
        notification: &mut Notification,
        input: VideoInput,
    ) -> CatalogResult<VideoDraft> {
        let categories: BTreeSet<CategoryId> =
            parse_ids(notification, "categories", &input.categories)?;
        let genres: BTreeSet<GenreId> = parse_ids(notification, "genres", &input.genres)?;
        let cast_members: BTreeSet<CastMemberId> =
            parse_ids(notification, "castMembers", &input.cast_members)?;

        notification.merge(&check_categories(self.category_repo.as_ref(), &categories).await?);
        notification.merge(&check_genres(self.genre_repo.as_ref(), &genres).await?);
        notification
            .merge(&check_cast_members(self.cast_member_repo.as_ref(), &cast_members).await?);

        Ok(VideoDraft {
            title: input.title,
            description: input.description,
            launched_at: input.launched_at,
            duration: input.duration,
            rating: input.rating.as_deref().and_then(Rating::of),
            opened: input.opened,
            published: input.published,
            categories,
            genres,
            cast_members,
        })
    }
}
