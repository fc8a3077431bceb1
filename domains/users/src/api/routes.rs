//! Route definitions for the users domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{auth, profile, subscriptions};
use super::middleware::UsersState;

/// Signup and signin
fn auth_routes() -> Router<UsersState> {
    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/signin", post(auth::signin))
}

/// Profile of the authenticated caller
fn profile_routes() -> Router<UsersState> {
    Router::new().route(
        "/api/user/profile",
        get(profile::get_profile).patch(profile::update_profile),
    )
}

/// Following creators' channels
fn subscription_routes() -> Router<UsersState> {
    Router::new()
        .route(
            "/api/creators/{id}/subscription",
            get(subscriptions::get_subscription)
                .post(subscriptions::subscribe)
                .delete(subscriptions::unsubscribe),
        )
        .route(
            "/api/user/subscriptions",
            get(subscriptions::list_subscriptions),
        )
}

/// Create all users domain API routes
pub fn routes() -> Router<UsersState> {
    Router::new()
        .merge(auth_routes())
        .merge(profile_routes())
        .merge(subscription_routes())
}
