//! Video Entity
//!
//! Video metadata together with the sets of categories, genres and cast
//! members it is linked to. Media files are not modelled here.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use kernel::validation::ValidationHandler;

use crate::domain::rules;
use crate::domain::value_object::{CastMemberId, CategoryId, GenreId, VideoId, rating::Rating};

#[derive(Debug, Clone, PartialEq)]
pub struct Video {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    /// Release year
    pub launched_at: Option<i32>,
    /// Duration in minutes
    pub duration: f64,
    pub rating: Option<Rating>,
    pub opened: bool,
    pub published: bool,
    pub categories: BTreeSet<CategoryId>,
    pub genres: BTreeSet<GenreId>,
    pub cast_members: BTreeSet<CastMemberId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable fields of a video
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoDraft {
    pub title: String,
    pub description: String,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub rating: Option<Rating>,
    pub opened: bool,
    pub published: bool,
    pub categories: BTreeSet<CategoryId>,
    pub genres: BTreeSet<GenreId>,
    pub cast_members: BTreeSet<CastMemberId>,
}

impl Video {
    pub const TITLE_MIN_LENGTH: usize = 1;
    pub const TITLE_MAX_LENGTH: usize = 255;
    pub const DESCRIPTION_MAX_LENGTH: usize = 4000;

    /// Build a new video. Call [`Video::validate`] before persisting.
    pub fn new_video(draft: VideoDraft) -> Self {
        let now = Utc::now();
        let mut video = Self {
            id: VideoId::new(),
            title: String::new(),
            description: String::new(),
            launched_at: None,
            duration: 0.0,
            rating: None,
            opened: false,
            published: false,
            categories: BTreeSet::new(),
            genres: BTreeSet::new(),
            cast_members: BTreeSet::new(),
            created_at: now,
            updated_at: now,
        };
        video.apply(draft);
        video
    }

    /// Replace every editable field
    pub fn update(&mut self, draft: VideoDraft) -> &mut Self {
        self.apply(draft);
        self.updated_at = Utc::now();
        self
    }

    pub fn validate<H: ValidationHandler>(&self, handler: &mut H) {
        rules::required_text(
            handler,
            "title",
            &self.title,
            Self::TITLE_MIN_LENGTH,
            Self::TITLE_MAX_LENGTH,
        );
        rules::max_text(
            handler,
            "description",
            &self.description,
            Self::DESCRIPTION_MAX_LENGTH,
        );
        rules::required(handler, "launchedAt", self.launched_at.as_ref());
        rules::required(handler, "rating", self.rating.as_ref());
    }

    fn apply(&mut self, draft: VideoDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.launched_at = draft.launched_at;
        self.duration = draft.duration;
        self.rating = draft.rating;
        self.opened = draft.opened;
        self.published = draft.published;
        self.categories = draft.categories;
        self.genres = draft.genres;
        self.cast_members = draft.cast_members;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kernel::validation::Notification;

    fn draft() -> VideoDraft {
        VideoDraft {
            title: "System Design".into(),
            description: "Interview preparation".into(),
            launched_at: Some(2022),
            duration: 120.5,
            rating: Some(Rating::L),
            opened: true,
            published: false,
            ..VideoDraft::default()
        }
    }

    fn messages(video: &Video) -> Vec<String> {
        let mut notification = Notification::create();
        video.validate(&mut notification);
        notification
            .into_errors()
            .into_iter()
            .map(|e| e.message().to_string())
            .collect()
    }

    #[test]
    fn test_valid_video() {
        let video = Video::new_video(draft());
        assert!(messages(&video).is_empty());
        assert_eq!(video.title, "System Design");
        assert_eq!(video.launched_at, Some(2022));
    }

    #[test]
    fn test_every_rule_in_declaration_order() {
        let video = Video::new_video(VideoDraft {
            title: String::new(),
            description: "d".repeat(4001),
            launched_at: None,
            rating: None,
            ..draft()
        });

        assert_eq!(
            messages(&video),
            vec![
                "'title' should not be empty",
                "'description' must be between 0 and 4000 characters",
                "'launchedAt' should not be null",
                "'rating' should not be null",
            ]
        );
    }

    #[test]
    fn test_title_too_long() {
        let video = Video::new_video(VideoDraft {
            title: "t".repeat(256),
            ..draft()
        });
        assert_eq!(
            messages(&video),
            vec!["'title' must be between 1 and 255 characters"]
        );
    }

    #[test]
    fn test_empty_description_is_valid() {
        let video = Video::new_video(VideoDraft {
            description: String::new(),
            ..draft()
        });
        assert!(messages(&video).is_empty());
    }

    #[test]
    fn test_update_replaces_relations() {
        let mut video = Video::new_video(draft());
        let id = video.id;
        let genre = GenreId::new();

        video.update(VideoDraft {
            genres: BTreeSet::from([genre]),
            published: true,
            ..draft()
        });

        assert_eq!(video.id, id);
        assert!(video.published);
        assert!(video.genres.contains(&genre));
        assert!(video.categories.is_empty());
    }
}
