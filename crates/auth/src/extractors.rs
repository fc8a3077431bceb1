//! Axum extractors for authentication
//!
//! Generic over any state `S` where `TokenAuthority: FromRef<S>`.
//! This is axum's idiomatic nested-state pattern.

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::authority::TokenAuthority;
use crate::claims::SessionPrincipal;
use crate::error::AuthError;
use crate::jwt::extract_bearer_token;
use crate::policy::{require, RoleRequirement};
use crate::types::Role;

/// Authenticated caller extractor
#[derive(Debug)]
pub struct AuthUser(pub SessionPrincipal);

impl<S> FromRequestParts<S> for AuthUser
where
    TokenAuthority: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let authority = TokenAuthority::from_ref(state);

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingToken)?;

        let token = extract_bearer_token(auth_header)?;
        let claim = authority.verify(token)?;

        Ok(AuthUser(claim.into_principal()))
    }
}

/// `Option<AuthUser>` for public routes: no header means an anonymous caller,
/// but a header that fails verification is still rejected.
impl<S> axum::extract::OptionalFromRequestParts<S> for AuthUser
where
    TokenAuthority: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Option<Self>, Self::Rejection> {
        if !parts.headers.contains_key(AUTHORIZATION) {
            return Ok(None);
        }

        <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state)
            .await
            .map(Some)
    }
}

/// Creator or admin extractor.
///
/// Like `AuthUser` but rejects viewers with 403. Used for upload and studio
/// endpoints.
#[derive(Debug)]
pub struct CreatorUser(pub SessionPrincipal);

impl<S> FromRequestParts<S> for CreatorUser
where
    TokenAuthority: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        let AuthUser(principal) =
            <AuthUser as FromRequestParts<S>>::from_request_parts(parts, state).await?;

        require(&principal, RoleRequirement::OneOf(Role::PUBLISHERS))?;

        Ok(CreatorUser(principal))
    }
}
