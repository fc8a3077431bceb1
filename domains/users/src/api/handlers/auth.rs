//! Signup and signin API handlers
//!
//! Implements:
//! - POST /api/auth/signup - Register a viewer account and open a session
//! - POST /api/auth/signin - Check credentials and open a session

use axum::{extract::State, Json};
use clipstream_auth::Role;
use clipstream_common::{hash_password, verify_password, Error, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::UserResponse;
use crate::api::middleware::UsersState;
use crate::domain::entities::{NewUser, User};
use crate::repository::UserRepository;

const INVALID_CREDENTIALS: &str = "Invalid identifier or password";

/// Request for account registration
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: Option<String>,

    #[validate(length(max = 100))]
    pub name: Option<String>,
}

/// Request for signin; `identifier` is an email or a display name
#[derive(Debug, Deserialize, Validate)]
pub struct SigninRequest {
    #[validate(length(max = 320))]
    pub identifier: Option<String>,
    pub password: Option<String>,
}

/// Session opened by signup or signin
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub token: String,
}

/// Resolve a login identifier: exact email first, then display name.
pub(crate) async fn find_by_identifier(
    users: &dyn UserRepository,
    identifier: &str,
) -> Result<Option<User>> {
    if let Some(user) = users.find_by_email(identifier).await? {
        return Ok(Some(user));
    }
    users.find_by_name(identifier).await
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// POST /api/auth/signup - Register a viewer account and open a session
pub async fn signup(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<SignupRequest>,
) -> Result<Json<AuthResponse>> {
    let (Some(email), Some(password)) = (non_empty(request.email), request.password) else {
        return Err(Error::Validation(
            "Email and password are required".to_string(),
        ));
    };

    if state.users.find_by_email(&email).await?.is_some() {
        return Err(Error::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let password_hash = hash_password(&password)?;

    let user = state
        .users
        .create(NewUser {
            email,
            name: non_empty(request.name),
            password_hash,
            role: Role::Viewer,
        })
        .await?;

    let token = state.auth.issue(&user.principal())?;

    tracing::info!(user_id = %user.id, "User signed up");

    Ok(Json(AuthResponse {
        user: UserResponse::from(user),
        token,
    }))
}

/// POST /api/auth/signin - Check credentials and open a session
pub async fn signin(
    State(state): State<UsersState>,
    ValidatedJson(request): ValidatedJson<SigninRequest>,
) -> Result<Json<AuthResponse>> {
    let (Some(identifier), Some(password)) = (non_empty(request.identifier), non_empty(request.password))
    else {
        return Err(Error::Validation(
            "Identifier and password are required".to_string(),
        ));
    };

    let Some(user) = find_by_identifier(state.users.as_ref(), &identifier).await? else {
        tracing::warn!("Signin failed: unknown identifier");
        return Err(Error::Authentication(INVALID_CREDENTIALS.to_string()));
    };

    if !verify_password(&password, &user.password_hash) {
        tracing::warn!(user_id = %user.id, "Signin failed: wrong password");
        return Err(Error::Authentication(INVALID_CREDENTIALS.to_string()));
    }

    let token = state.auth.issue(&user.principal())?;

    tracing::info!(user_id = %user.id, role = %user.role, "User signed in");

    Ok(Json(AuthResponse {
        user: UserResponse::from(user),
        token,
    }))
}
