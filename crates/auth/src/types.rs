//! Role types for auth decisions

use serde::{Deserialize, Serialize};

/// Account role carried in every session token.
///
/// Serialized lowercase; any other string fails deserialization, which is
/// what makes a token with a foreign role malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Viewer,
    Creator,
    Admin,
}

impl Role {
    /// Roles allowed to upload and manage videos in the studio
    pub const PUBLISHERS: &'static [Role] = &[Role::Creator, Role::Admin];

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Viewer => "viewer",
            Role::Creator => "creator",
            Role::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
