//! Video catalogue API handlers
//!
//! Implements:
//! - GET /api/videos - Browse, search, list a channel
//! - POST /api/videos - Publish (creators and admins)
//! - GET /api/videos/{id} - Watch; counts a view and records analytics
//! - PATCH /api/videos/{id} - Edit metadata (owner or admin)
//! - DELETE /api/videos/{id} - Remove (owner or admin)
//! - GET /api/videos/{id}/analytics - View records (owner or admin)

use std::collections::HashMap;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use clipstream_auth::{require, RoleRequirement, SessionPrincipal};
use clipstream_common::{Error, Pagination, Result, ValidatedJson, ValidatedQuery};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::{AuthUser, CreatorUser, VideosState};
use crate::domain::entities::{
    NewVideo, Uploader, Video, VideoFilter, VideoUpdate, ViewRecord, Viewer,
};

const UNKNOWN_IP: &str = "unknown";

/// Request for publishing a video. The media itself is already stored;
/// only its location is recorded here, absolute or site-relative
/// (`/uploads/{user}/{file}`).
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVideoRequest {
    #[validate(length(min = 1, max = 200, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, max = 2048, message = "Video URL is required"))]
    pub video_url: String,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[validate(length(max = 2048))]
    pub thumbnail_url: Option<String>,

    #[validate(length(max = 50))]
    pub category: Option<String>,
}

/// Request for editing video metadata
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVideoRequest {
    #[validate(length(max = 200))]
    pub title: Option<String>,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    #[validate(length(max = 50))]
    pub category: Option<String>,
}

/// Video plus its uploader's channel summary
#[derive(Debug, Serialize)]
pub struct VideoDetails {
    #[serde(flatten)]
    pub video: Video,
    pub user: Option<Uploader>,
}

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub video: VideoDetails,
}

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub videos: Vec<VideoDetails>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyticsResponse {
    pub video_id: String,
    pub views: u64,
    pub records: Vec<ViewRecord>,
}

fn not_found() -> Error {
    Error::NotFound("Video not found".to_string())
}

/// First `x-forwarded-for` hop, then `x-real-ip`, else `"unknown"`
pub(crate) fn client_ip(headers: &HeaderMap) -> String {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
    };

    header("x-forwarded-for")
        .and_then(|chain| chain.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty())
        .or_else(|| header("x-real-ip"))
        .unwrap_or(UNKNOWN_IP)
        .to_string()
}

async fn with_uploader(state: &VideosState, video: Video) -> Result<VideoDetails> {
    let user = state.uploaders.find_uploader(&video.user_id).await?;
    Ok(VideoDetails { video, user })
}

/// Attach uploaders to a page of videos, looking each account up once
async fn with_uploaders(state: &VideosState, videos: Vec<Video>) -> Result<Vec<VideoDetails>> {
    let mut seen: HashMap<String, Option<Uploader>> = HashMap::new();
    let mut details = Vec::with_capacity(videos.len());

    for video in videos {
        let user = match seen.get(&video.user_id) {
            Some(user) => user.clone(),
            None => {
                let user = state.uploaders.find_uploader(&video.user_id).await?;
                seen.insert(video.user_id.clone(), user.clone());
                user
            }
        };
        details.push(VideoDetails { video, user });
    }

    Ok(details)
}

/// Load a video and check the caller may modify it
async fn load_owned(
    state: &VideosState,
    principal: &SessionPrincipal,
    id: &str,
) -> Result<Video> {
    let video = state.videos.get_by_id(id).await?.ok_or_else(not_found)?;
    require(principal, RoleRequirement::SelfOrAdmin(&video.user_id))?;
    Ok(video)
}

/// GET /api/videos - Browse, search, list a channel
pub async fn list_videos(
    State(state): State<VideosState>,
    ValidatedQuery(page): ValidatedQuery<Pagination>,
    ValidatedQuery(filter): ValidatedQuery<VideoFilter>,
) -> Result<Json<VideoListResponse>> {
    let videos = state.videos.list(&filter, page).await?;
    let videos = with_uploaders(&state, videos).await?;
    Ok(Json(VideoListResponse { videos }))
}

/// POST /api/videos - Publish (creators and admins)
pub async fn create_video(
    CreatorUser(principal): CreatorUser,
    State(state): State<VideosState>,
    ValidatedJson(request): ValidatedJson<CreateVideoRequest>,
) -> Result<(StatusCode, Json<VideoResponse>)> {
    if request.title.trim().is_empty() || request.video_url.trim().is_empty() {
        return Err(Error::Validation(
            "Title and video URL are required".to_string(),
        ));
    }

    let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

    let video = state
        .videos
        .create(NewVideo {
            user_id: principal.subject_id,
            title: request.title,
            description: non_empty(request.description),
            video_url: request.video_url,
            thumbnail_url: non_empty(request.thumbnail_url),
            category: non_empty(request.category),
        })
        .await?;

    tracing::info!(video_id = %video.id, user_id = %video.user_id, "Video published");

    let video = with_uploader(&state, video).await?;
    Ok((StatusCode::CREATED, Json(VideoResponse { video })))
}

/// GET /api/videos/{id} - Watch; counts a view and records analytics
pub async fn get_video(
    caller: Option<AuthUser>,
    State(state): State<VideosState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<VideoResponse>> {
    let viewer = Viewer {
        user_id: caller.map(|AuthUser(principal)| principal.subject_id),
        ip: client_ip(&headers),
    };

    let video = state
        .videos
        .record_view(&id, viewer)
        .await?
        .ok_or_else(not_found)?;

    let video = with_uploader(&state, video).await?;
    Ok(Json(VideoResponse { video }))
}

/// PATCH /api/videos/{id} - Edit metadata (owner or admin)
pub async fn update_video(
    AuthUser(principal): AuthUser,
    State(state): State<VideosState>,
    Path(id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateVideoRequest>,
) -> Result<Json<VideoResponse>> {
    load_owned(&state, &principal, &id).await?;

    let video = state
        .videos
        .update(
            &id,
            VideoUpdate {
                title: request.title,
                description: request.description,
                category: request.category,
            },
        )
        .await?
        .ok_or_else(not_found)?;

    tracing::info!(video_id = %video.id, editor = %principal.subject_id, "Video updated");

    let video = with_uploader(&state, video).await?;
    Ok(Json(VideoResponse { video }))
}

/// DELETE /api/videos/{id} - Remove (owner or admin)
pub async fn delete_video(
    AuthUser(principal): AuthUser,
    State(state): State<VideosState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>> {
    load_owned(&state, &principal, &id).await?;

    if !state.videos.delete(&id).await? {
        return Err(not_found());
    }

    tracing::info!(video_id = %id, editor = %principal.subject_id, "Video deleted");

    Ok(Json(DeleteResponse { success: true }))
}

/// GET /api/videos/{id}/analytics - View records (owner or admin)
pub async fn get_analytics(
    AuthUser(principal): AuthUser,
    State(state): State<VideosState>,
    Path(id): Path<String>,
) -> Result<Json<AnalyticsResponse>> {
    let video = load_owned(&state, &principal, &id).await?;
    let records = state.videos.views_for(&id).await?;

    Ok(Json(AnalyticsResponse {
        video_id: video.id,
        views: video.views,
        records,
    }))
}
