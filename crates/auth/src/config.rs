//! Authentication configuration

use chrono::Duration;
use clipstream_common::Config;

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl: Duration,
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>, token_ttl: Duration) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            token_ttl,
        }
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        // Config rejects lifetimes chrono cannot hold; saturate rather than panic
        let token_ttl = Duration::try_seconds(config.token_ttl_seconds).unwrap_or(Duration::MAX);
        Self::new(config.jwt_secret.clone(), token_ttl)
    }
}

impl std::fmt::Debug for AuthConfig {
    #[mutants::skip] // Debug formatting only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
