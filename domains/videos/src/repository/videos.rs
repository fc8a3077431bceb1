//! Video repository

use std::sync::RwLock;

use async_trait::async_trait;
use clipstream_common::{Error, Pagination, Result};

use crate::domain::entities::{NewVideo, Video, VideoFilter, VideoUpdate, ViewRecord, Viewer};

/// Storage seam for the video catalogue
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Newest first, filtered, then paginated
    async fn list(&self, filter: &VideoFilter, page: Pagination) -> Result<Vec<Video>>;

    async fn get_by_id(&self, id: &str) -> Result<Option<Video>>;

    async fn create(&self, new_video: NewVideo) -> Result<Video>;

    async fn update(&self, id: &str, update: VideoUpdate) -> Result<Option<Video>>;

    /// Returns whether a video was removed. Its view records go with it.
    async fn delete(&self, id: &str) -> Result<bool>;

    /// Increment the view counter and append a view record, returning the
    /// updated video
    async fn record_view(&self, id: &str, viewer: Viewer) -> Result<Option<Video>>;

    /// View records for one video, newest first
    async fn views_for(&self, video_id: &str) -> Result<Vec<ViewRecord>>;
}

#[derive(Default)]
struct Catalogue {
    videos: Vec<Video>,
    views: Vec<ViewRecord>,
}

/// Process-local video store, kept in publish order
#[derive(Default)]
pub struct InMemoryVideoRepository {
    catalogue: RwLock<Catalogue>,
}

impl InMemoryVideoRepository {
    #[mutants::skip] // Default construction only
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Internal("video store lock poisoned".to_string())
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn list(&self, filter: &VideoFilter, page: Pagination) -> Result<Vec<Video>> {
        let catalogue = self.catalogue.read().map_err(poisoned)?;
        Ok(page.page(
            catalogue
                .videos
                .iter()
                .rev()
                .filter(|v| filter.matches(v))
                .cloned(),
        ))
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Video>> {
        let catalogue = self.catalogue.read().map_err(poisoned)?;
        Ok(catalogue.videos.iter().find(|v| v.id == id).cloned())
    }

    async fn create(&self, new_video: NewVideo) -> Result<Video> {
        let video = new_video.into_video();
        self.catalogue
            .write()
            .map_err(poisoned)?
            .videos
            .push(video.clone());
        Ok(video)
    }

    async fn update(&self, id: &str, update: VideoUpdate) -> Result<Option<Video>> {
        let mut catalogue = self.catalogue.write().map_err(poisoned)?;
        Ok(catalogue.videos.iter_mut().find(|v| v.id == id).map(|video| {
            update.apply(video);
            video.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        let mut catalogue = self.catalogue.write().map_err(poisoned)?;
        let before = catalogue.videos.len();
        catalogue.videos.retain(|v| v.id != id);
        if catalogue.videos.len() == before {
            return Ok(false);
        }
        catalogue.views.retain(|r| r.video_id != id);
        Ok(true)
    }

    async fn record_view(&self, id: &str, viewer: Viewer) -> Result<Option<Video>> {
        let mut catalogue = self.catalogue.write().map_err(poisoned)?;
        let Some(video) = catalogue.videos.iter_mut().find(|v| v.id == id) else {
            return Ok(None);
        };
        video.views += 1;
        let video = video.clone();

        catalogue.views.push(ViewRecord::new(id, viewer));
        Ok(Some(video))
    }

    async fn views_for(&self, video_id: &str) -> Result<Vec<ViewRecord>> {
        let catalogue = self.catalogue.read().map_err(poisoned)?;
        Ok(catalogue
            .views
            .iter()
            .rev()
            .filter(|r| r.video_id == video_id)
            .cloned()
            .collect())
    }
}
