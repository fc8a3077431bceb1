//! Channel subscription handlers
//!
//! Implements:
//! - GET /api/creators/{id}/subscription - Whether the caller follows a creator
//! - POST /api/creators/{id}/subscription - Follow a creator
//! - DELETE /api/creators/{id}/subscription - Stop following a creator
//! - GET /api/user/subscriptions - Creators the caller follows

use axum::{
    extract::{Path, State},
    Json,
};
use clipstream_auth::Role;
use clipstream_common::{Error, Result};
use serde::Serialize;

use crate::api::middleware::{AuthUser, UsersState};

#[derive(Debug, Serialize)]
pub struct SubscriptionResponse {
    pub creator_id: String,
    pub subscribed: bool,
    pub subscriber_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SubscriptionListResponse {
    pub creator_ids: Vec<String>,
}

/// Only accounts that can publish have a channel to follow
async fn ensure_channel(state: &UsersState, creator_id: &str) -> Result<()> {
    match state.users.get_by_id(creator_id).await? {
        Some(user) if Role::PUBLISHERS.contains(&user.role) => Ok(()),
        _ => Err(Error::NotFound("Creator not found".to_string())),
    }
}

async fn status(state: &UsersState, user_id: &str, creator_id: &str) -> Result<SubscriptionResponse> {
    Ok(SubscriptionResponse {
        creator_id: creator_id.to_string(),
        subscribed: state.subscriptions.is_subscribed(user_id, creator_id).await?,
        subscriber_count: state.subscriptions.subscriber_count(creator_id).await?,
    })
}

/// GET /api/creators/{id}/subscription - Whether the caller follows a creator
pub async fn get_subscription(
    AuthUser(principal): AuthUser,
    State(state): State<UsersState>,
    Path(creator_id): Path<String>,
) -> Result<Json<SubscriptionResponse>> {
    ensure_channel(&state, &creator_id).await?;
    Ok(Json(status(&state, &principal.subject_id, &creator_id).await?))
}

/// POST /api/creators/{id}/subscription - Follow a creator
pub async fn subscribe(
    AuthUser(principal): AuthUser,
    State(state): State<UsersState>,
    Path(creator_id): Path<String>,
) -> Result<Json<SubscriptionResponse>> {
    if principal.subject_id == creator_id {
        return Err(Error::Validation(
            "Cannot subscribe to your own channel".to_string(),
        ));
    }
    ensure_channel(&state, &creator_id).await?;

    if state
        .subscriptions
        .subscribe(&principal.subject_id, &creator_id)
        .await?
    {
        tracing::info!(user_id = %principal.subject_id, creator_id = %creator_id, "Subscribed");
    }

    Ok(Json(status(&state, &principal.subject_id, &creator_id).await?))
}

/// DELETE /api/creators/{id}/subscription - Stop following a creator
pub async fn unsubscribe(
    AuthUser(principal): AuthUser,
    State(state): State<UsersState>,
    Path(creator_id): Path<String>,
) -> Result<Json<SubscriptionResponse>> {
    ensure_channel(&state, &creator_id).await?;

    if state
        .subscriptions
        .unsubscribe(&principal.subject_id, &creator_id)
        .await?
    {
        tracing::info!(user_id = %principal.subject_id, creator_id = %creator_id, "Unsubscribed");
    }

    Ok(Json(status(&state, &principal.subject_id, &creator_id).await?))
}

/// GET /api/user/subscriptions - Creators the caller follows
pub async fn list_subscriptions(
    AuthUser(principal): AuthUser,
    State(state): State<UsersState>,
) -> Result<Json<SubscriptionListResponse>> {
    let creator_ids = state
        .subscriptions
        .creators_for(&principal.subject_id)
        .await?;

    Ok(Json(SubscriptionListResponse { creator_ids }))
}
