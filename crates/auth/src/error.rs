//! Authentication errors

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication and authorization failures.
///
/// The variant is for server-side diagnostics. Clients only ever see the
/// generic 401/403 body produced by `IntoResponse`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("no session token was presented")]
    MissingToken,
    #[error("authorization header is not a bearer token")]
    InvalidAuthorizationFormat,
    #[error("session token is structurally invalid")]
    MalformedToken,
    #[error("session token signature does not match")]
    InvalidSignature,
    #[error("session token has expired")]
    Expired,
    #[error("role does not satisfy the requirement")]
    InsufficientRole,
    #[error("caller does not own the resource")]
    NotOwner,
    #[error("cannot issue a token: {0} is empty")]
    InvalidIdentity(&'static str),
    #[error("token lifetime runs past the representable time range")]
    LifetimeOutOfRange,
    #[error("failed to sign session token: {0}")]
    Signing(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::InvalidAuthorizationFormat
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::Expired => StatusCode::UNAUTHORIZED,
            AuthError::InsufficientRole | AuthError::NotOwner => StatusCode::FORBIDDEN,
            AuthError::InvalidIdentity(_)
            | AuthError::LifetimeOutOfRange
            | AuthError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short stable name used in log fields
    pub fn kind(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::InvalidAuthorizationFormat => "invalid_authorization_format",
            AuthError::MalformedToken => "malformed_token",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::Expired => "expired",
            AuthError::InsufficientRole => "insufficient_role",
            AuthError::NotOwner => "not_owner",
            AuthError::LifetimeOutOfRange => "lifetime_out_of_range",
            AuthError::InvalidIdentity(_) => "invalid_identity",
            AuthError::Signing(_) => "signing",
        }
    }

    fn public_message(&self) -> &'static str {
        match self.status_code() {
            StatusCode::UNAUTHORIZED => "Unauthorized",
            StatusCode::FORBIDDEN => "Forbidden",
            _ => "Authentication failed",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "Session token could not be produced");
        } else {
            tracing::debug!(kind = self.kind(), "Request rejected by auth");
        }

        let code = match status {
            StatusCode::UNAUTHORIZED => "UNAUTHORIZED",
            StatusCode::FORBIDDEN => "FORBIDDEN",
            _ => "AUTH_ERROR",
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.public_message(),
            }
        }));

        (status, body).into_response()
    }
}

impl From<AuthError> for clipstream_common::Error {
    fn from(error: AuthError) -> Self {
        tracing::debug!(kind = error.kind(), "Auth error surfaced through handler");
        match error.status_code() {
            StatusCode::UNAUTHORIZED => {
                clipstream_common::Error::Authentication(error.public_message().to_string())
            }
            StatusCode::FORBIDDEN => {
                clipstream_common::Error::Authorization(error.public_message().to_string())
            }
            _ => clipstream_common::Error::Internal(error.to_string()),
        }
    }
}
