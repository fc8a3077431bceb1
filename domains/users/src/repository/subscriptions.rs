//! Channel subscription repository

use std::sync::RwLock;

use async_trait::async_trait;
use clipstream_common::{Error, Result};

use crate::domain::entities::Subscription;

/// Storage seam for who follows which creator
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Returns false when the subscription already existed
    async fn subscribe(&self, user_id: &str, creator_id: &str) -> Result<bool>;

    /// Returns false when there was nothing to remove
    async fn unsubscribe(&self, user_id: &str, creator_id: &str) -> Result<bool>;

    async fn is_subscribed(&self, user_id: &str, creator_id: &str) -> Result<bool>;

    /// Creator ids the user follows, oldest subscription first
    async fn creators_for(&self, user_id: &str) -> Result<Vec<String>>;

    async fn subscriber_count(&self, creator_id: &str) -> Result<usize>;
}

/// Process-local subscription store
#[derive(Default)]
pub struct InMemorySubscriptionRepository {
    subscriptions: RwLock<Vec<Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Internal("subscription store lock poisoned".to_string())
}

fn is_pair(s: &Subscription, user_id: &str, creator_id: &str) -> bool {
    s.user_id == user_id && s.creator_id == creator_id
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn subscribe(&self, user_id: &str, creator_id: &str) -> Result<bool> {
        let mut subscriptions = self.subscriptions.write().map_err(poisoned)?;
        if subscriptions.iter().any(|s| is_pair(s, user_id, creator_id)) {
            return Ok(false);
        }
        subscriptions.push(Subscription::new(user_id, creator_id));
        Ok(true)
    }

    async fn unsubscribe(&self, user_id: &str, creator_id: &str) -> Result<bool> {
        let mut subscriptions = self.subscriptions.write().map_err(poisoned)?;
        let before = subscriptions.len();
        subscriptions.retain(|s| !is_pair(s, user_id, creator_id));
        Ok(subscriptions.len() != before)
    }

    async fn is_subscribed(&self, user_id: &str, creator_id: &str) -> Result<bool> {
        let subscriptions = self.subscriptions.read().map_err(poisoned)?;
        Ok(subscriptions.iter().any(|s| is_pair(s, user_id, creator_id)))
    }

    async fn creators_for(&self, user_id: &str) -> Result<Vec<String>> {
        let subscriptions = self.subscriptions.read().map_err(poisoned)?;
        Ok(subscriptions
            .iter()
            .filter(|s| s.user_id == user_id)
            .map(|s| s.creator_id.clone())
            .collect())
    }

    async fn subscriber_count(&self, creator_id: &str) -> Result<usize> {
        let subscriptions = self.subscriptions.read().map_err(poisoned)?;
        Ok(subscriptions
            .iter()
            .filter(|s| s.creator_id == creator_id)
            .count())
    }
}
