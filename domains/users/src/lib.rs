//! Users domain: signup, signin, profiles, channel subscriptions

pub mod api;
pub mod domain;
pub mod repository;

pub use domain::entities::{NewUser, ProfileUpdate, Subscription, User};
pub use repository::{
    InMemorySubscriptionRepository, InMemoryUserRepository, SubscriptionRepository, UserRepository,
};

pub use api::handlers::auth::AuthResponse;
pub use api::handlers::UserResponse;
pub use api::routes;
pub use api::UsersState;
