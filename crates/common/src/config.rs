//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables (optionally seeded
//! from a `.env` file) once at startup and treated as read-only afterwards.

use anyhow::Result;
use chrono::{Duration, Utc};
use std::env;
use std::fmt;

/// Default session token lifetime: 7 days
pub const DEFAULT_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 60 * 60;

#[derive(Clone)]
pub struct Config {
    /// HMAC secret used to sign session tokens
    pub jwt_secret: String,

    /// Session token lifetime in seconds
    pub token_ttl_seconds: i64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

// Hand-written so the secret never ends up in logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("jwt_secret", &"<redacted>")
            .field("token_ttl_seconds", &self.token_ttl_seconds)
            .field("rust_log", &self.rust_log)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("JWT_SECRET is required"))?;

        let token_ttl_seconds = match lookup("JWT_TTL_SECONDS") {
            Some(raw) => {
                let ttl: i64 = raw
                    .parse()
                    .map_err(|_| anyhow::anyhow!("JWT_TTL_SECONDS must be an integer"))?;
                if ttl <= 0 {
                    anyhow::bail!("JWT_TTL_SECONDS must be positive");
                }
                // Tokens issued now must still have a representable expiry
                let representable = Duration::try_seconds(ttl)
                    .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
                    .is_some();
                if !representable {
                    anyhow::bail!("JWT_TTL_SECONDS is too large");
                }
                ttl
            }
            None => DEFAULT_TOKEN_TTL_SECONDS,
        };

        Ok(Self {
            jwt_secret,
            token_ttl_seconds,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "clipstream=debug".to_string()),
            port: lookup("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        })
    }
}
