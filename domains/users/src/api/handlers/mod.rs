pub mod auth;
pub mod profile;
pub mod subscriptions;

use chrono::{DateTime, Utc};
use clipstream_auth::Role;
use serde::Serialize;

use crate::domain::entities::User;

/// Public view of a user account
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub name: Option<String>,
    pub profile_image_url: Option<String>,
    pub banner_url: Option<String>,
    pub about_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            role: user.role,
            name: user.name,
            profile_image_url: user.profile_image_url,
            banner_url: user.banner_url,
            about_text: user.about_text,
            created_at: user.created_at,
        }
    }
}
