//! Route definitions for the videos domain API

use axum::{routing::get, Router};

use super::handlers::videos;
use super::middleware::VideosState;

/// Create all videos domain API routes
pub fn routes() -> Router<VideosState> {
    Router::new()
        .route(
            "/api/videos",
            get(videos::list_videos).post(videos::create_video),
        )
        .route(
            "/api/videos/{id}",
            get(videos::get_video)
                .patch(videos::update_video)
                .delete(videos::delete_video),
        )
        .route("/api/videos/{id}/analytics", get(videos::get_analytics))
}
