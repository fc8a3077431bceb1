//! Videos domain state and token authority integration

use std::sync::Arc;

use axum::extract::FromRef;
use clipstream_auth::TokenAuthority;

use crate::repository::{UploaderDirectory, VideoRepository};

pub use clipstream_auth::{AuthUser, CreatorUser};

/// Application state for the videos domain
#[derive(Clone)]
pub struct VideosState {
    pub videos: Arc<dyn VideoRepository>,
    pub uploaders: Arc<dyn UploaderDirectory>,
    pub auth: TokenAuthority,
}

impl FromRef<VideosState> for TokenAuthority {
    fn from_ref(state: &VideosState) -> Self {
        state.auth.clone()
    }
}
