//! Clipstream application composition root
//!
//! Composes all domain routers into a single application.

mod directory;

use std::sync::Arc;

use axum::Router;
use clipstream_auth::{AuthConfig, TokenAuthority};
use clipstream_common::Config;
use clipstream_users::{
    InMemorySubscriptionRepository, InMemoryUserRepository, SubscriptionRepository,
    UserRepository, UsersState,
};
use clipstream_videos::{InMemoryVideoRepository, VideoRepository, VideosState};

pub use directory::UserDirectory;

/// Storage backends shared by the domain routers
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserRepository>,
    pub videos: Arc<dyn VideoRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
}

impl Stores {
    /// Process-local stores; contents are lost on restart
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(InMemoryUserRepository::new()),
            videos: Arc::new(InMemoryVideoRepository::new()),
            subscriptions: Arc::new(InMemorySubscriptionRepository::new()),
        }
    }
}

/// Create the main application router from loaded configuration
pub fn create_app(config: &Config) -> Router {
    let authority = TokenAuthority::new(&AuthConfig::from(config));

    build_router(authority, Stores::in_memory())
}

/// Wire domain routers around explicit collaborators
pub fn build_router(authority: TokenAuthority, stores: Stores) -> Router {
    let uploaders = Arc::new(UserDirectory::new(stores.users.clone()));

    let users_state = UsersState {
        users: stores.users,
        subscriptions: stores.subscriptions,
        auth: authority.clone(),
    };

    let videos_state = VideosState {
        videos: stores.videos,
        uploaders,
        auth: authority,
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Clipstream API v0.0.1-SNAPSHOT" }),
        )
        .merge(clipstream_users::routes().with_state(users_state))
        .merge(clipstream_videos::routes().with_state(videos_state))
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
