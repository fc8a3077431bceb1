//! Domain entities for the users domain

use chrono::{DateTime, Utc};
use clipstream_auth::{Role, SessionPrincipal};
use uuid::Uuid;

/// Stored user account
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    /// Argon2 PHC digest, never serialized
    pub password_hash: String,
    pub role: Role,
    pub profile_image_url: Option<String>,
    pub banner_url: Option<String>,
    pub about_text: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Identity to embed in this user's session token
    pub fn principal(&self) -> SessionPrincipal {
        SessionPrincipal::new(self.id.clone(), self.email.clone(), self.role)
    }
}

/// Input for account creation
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub role: Role,
}

impl NewUser {
    pub fn into_user(self) -> User {
        User {
            id: Uuid::new_v4().to_string(),
            email: self.email,
            name: self.name,
            password_hash: self.password_hash,
            role: self.role,
            profile_image_url: None,
            banner_url: None,
            about_text: None,
            created_at: Utc::now(),
        }
    }
}

/// Partial profile update; `None` leaves the field untouched
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub about_text: Option<String>,
    pub profile_image_url: Option<String>,
    pub banner_url: Option<String>,
}

impl ProfileUpdate {
    pub fn apply(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = Some(name);
        }
        if let Some(about_text) = self.about_text {
            user.about_text = Some(about_text);
        }
        if let Some(url) = self.profile_image_url {
            user.profile_image_url = Some(url);
        }
        if let Some(url) = self.banner_url {
            user.banner_url = Some(url);
        }
    }
}

/// A viewer following a creator's channel
#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub user_id: String,
    pub creator_id: String,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(user_id: &str, creator_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            creator_id: creator_id.to_string(),
            created_at: Utc::now(),
        }
    }
}
