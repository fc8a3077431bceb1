//! Repository implementations for the users domain

pub mod subscriptions;
pub mod users;

pub use subscriptions::{InMemorySubscriptionRepository, SubscriptionRepository};
pub use users::{InMemoryUserRepository, UserRepository};
