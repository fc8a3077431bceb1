//! User repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use clipstream_common::{Error, Result};

use crate::domain::entities::{NewUser, ProfileUpdate, User};

/// Storage seam for user accounts
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get user by ID
    async fn get_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Find user by exact email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Find the first user with this display name
    async fn find_by_name(&self, name: &str) -> Result<Option<User>>;

    /// Create a user; `Error::Conflict` when the email is taken
    async fn create(&self, new_user: NewUser) -> Result<User>;

    /// Apply a partial profile update, returning the updated user
    async fn update_profile(&self, id: &str, update: ProfileUpdate) -> Result<Option<User>>;
}

/// Process-local user store
#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Internal("user store lock poisoned".to_string())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<User>> {
        let users = self.users.read().map_err(poisoned)?;
        // Oldest account wins when names collide
        Ok(users
            .values()
            .filter(|u| u.name.as_deref() == Some(name))
            .min_by_key(|u| u.created_at)
            .cloned())
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.values().any(|u| u.email == new_user.email) {
            return Err(Error::Conflict(
                "User with this email already exists".to_string(),
            ));
        }

        let user = new_user.into_user();
        users.insert(user.id.clone(), user.clone());
        Ok(user)
    }

    async fn update_profile(&self, id: &str, update: ProfileUpdate) -> Result<Option<User>> {
        let mut users = self.users.write().map_err(poisoned)?;
        Ok(users.get_mut(id).map(|user| {
            update.apply(user);
            user.clone()
        }))
    }
}
