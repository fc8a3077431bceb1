//! Users domain state and token authority integration

use std::sync::Arc;

use axum::extract::FromRef;
use clipstream_auth::TokenAuthority;

use crate::repository::{SubscriptionRepository, UserRepository};

pub use clipstream_auth::AuthUser;

/// Application state for the users domain
#[derive(Clone)]
pub struct UsersState {
    pub users: Arc<dyn UserRepository>,
    pub subscriptions: Arc<dyn SubscriptionRepository>,
    pub auth: TokenAuthority,
}

impl FromRef<UsersState> for TokenAuthority {
    fn from_ref(state: &UsersState) -> Self {
        state.auth.clone()
    }
}
