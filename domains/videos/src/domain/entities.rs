//! Domain entities for the videos domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Published video
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Video {
    pub id: String,
    /// Subject id of the uploading account
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub views: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for publishing a video
#[derive(Debug, Clone)]
pub struct NewVideo {
    pub user_id: String,
    pub title: String,
    pub description: Option<String>,
    pub video_url: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
}

impl NewVideo {
    pub fn into_video(self) -> Video {
        let now = Utc::now();
        Video {
            id: Uuid::new_v4().to_string(),
            user_id: self.user_id,
            title: self.title,
            description: self.description,
            video_url: self.video_url,
            thumbnail_url: self.thumbnail_url,
            category: self.category,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Metadata edit. An empty title keeps the current one.
#[derive(Debug, Clone, Default)]
pub struct VideoUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
}

impl VideoUpdate {
    pub fn apply(self, video: &mut Video) {
        if let Some(title) = self.title.filter(|t| !t.trim().is_empty()) {
            video.title = title;
        }
        if let Some(description) = self.description {
            video.description = Some(description);
        }
        if let Some(category) = self.category {
            video.category = Some(category);
        }
        video.updated_at = Utc::now();
    }
}

/// Catalogue filter.
///
/// `?search=` matches title or description case-insensitively, `?userId=`
/// (or `?user_id=`) restricts to one uploader's channel, `?category=` is exact.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct VideoFilter {
    #[serde(default)]
    #[validate(length(max = 200))]
    pub search: Option<String>,
    #[serde(default, alias = "userId")]
    pub user_id: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

fn given(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

impl VideoFilter {
    pub fn matches(&self, video: &Video) -> bool {
        let search_ok = match given(self.search.as_deref()) {
            Some(term) => {
                let term = term.to_lowercase();
                video.title.to_lowercase().contains(&term)
                    || video
                        .description
                        .as_deref()
                        .is_some_and(|d| d.to_lowercase().contains(&term))
            }
            None => true,
        };
        let owner_ok = match given(self.user_id.as_deref()) {
            Some(user_id) => video.user_id == user_id,
            None => true,
        };
        let category_ok = match given(self.category.as_deref()) {
            Some(c) => video.category.as_deref() == Some(c),
            None => true,
        };
        search_ok && owner_ok && category_ok
    }
}

/// Public channel summary attached to video responses
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Uploader {
    pub id: String,
    pub name: Option<String>,
    pub profile_image_url: Option<String>,
}

/// Who watched, as far as the request tells us
#[derive(Debug, Clone, PartialEq)]
pub struct Viewer {
    /// Set when the watch request carried a valid session
    pub user_id: Option<String>,
    pub ip: String,
}

/// One analytics row, written per watch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewRecord {
    pub id: String,
    pub video_id: String,
    pub user_id: Option<String>,
    pub viewer_ip: String,
    pub viewed_at: DateTime<Utc>,
}

impl ViewRecord {
    pub fn new(video_id: &str, viewer: Viewer) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            video_id: video_id.to_string(),
            user_id: viewer.user_id,
            viewer_ip: viewer.ip,
            viewed_at: Utc::now(),
        }
    }
}
