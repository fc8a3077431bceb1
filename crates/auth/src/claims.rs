//! Session token claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Verified identity handed to authorization checks and route handlers.
///
/// Also the input to `TokenAuthority::issue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionPrincipal {
    /// Subject (user ID)
    #[serde(rename = "sub")]
    pub subject_id: String,
    pub email: String,
    pub role: Role,
}

impl SessionPrincipal {
    pub fn new(subject_id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            subject_id: subject_id.into(),
            email: email.into(),
            role,
        }
    }
}

/// Full token payload: the principal plus its validity window.
///
/// Timestamps are unix seconds, serialized as the registered `iat` / `exp`
/// claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityClaim {
    #[serde(flatten)]
    pub principal: SessionPrincipal,
    /// Issued at
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Expires at
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl IdentityClaim {
    /// True when `now` is at or past `expires_at`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now.timestamp()
    }

    pub fn into_principal(self) -> SessionPrincipal {
        self.principal
    }
}
