//! Profile API handlers
//!
//! Implements:
//! - GET /api/user/profile - Current user's profile
//! - PATCH /api/user/profile - Update name, about text, images

use axum::{extract::State, Json};
use clipstream_common::{Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::UserResponse;
use crate::api::middleware::{AuthUser, UsersState};
use crate::domain::entities::ProfileUpdate;

/// Request for updating the caller's profile.
///
/// Absent fields and blank text are left as they are. Image locations may be
/// absolute URLs or site-relative upload paths.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 5000))]
    pub about_text: Option<String>,

    #[validate(length(max = 2048))]
    pub profile_image_url: Option<String>,

    #[validate(length(max = 2048))]
    pub banner_url: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        let given = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
        Self {
            name: given(request.name),
            about_text: given(request.about_text),
            profile_image_url: given(request.profile_image_url),
            banner_url: given(request.banner_url),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: UserResponse,
}

/// GET /api/user/profile - Current user's profile
pub async fn get_profile(
    AuthUser(principal): AuthUser,
    State(state): State<UsersState>,
) -> Result<Json<ProfileResponse>> {
    let user = state
        .users
        .get_by_id(&principal.subject_id)
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from(user),
    }))
}

/// PATCH /api/user/profile - Update name, about text, images
pub async fn update_profile(
    AuthUser(principal): AuthUser,
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>> {
    let user = state
        .users
        .update_profile(&principal.subject_id, ProfileUpdate::from(request))
        .await?
        .ok_or_else(|| Error::NotFound("User not found".to_string()))?;

    tracing::info!(user_id = %user.id, "Profile updated");

    Ok(Json(ProfileResponse {
        user: UserResponse::from(user),
    }))
}
