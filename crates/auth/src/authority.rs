//! Session token issuance and verification

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{DecodingKey, EncodingKey};

use crate::claims::{IdentityClaim, SessionPrincipal};
use crate::clock::{Clock, SystemClock};
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::jwt::{decode_claim, encode_claim};

struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// Issues and verifies stateless, time-bound session tokens.
///
/// Holds nothing but key material derived from the shared secret, the token
/// lifetime and a clock, all immutable after construction. Cloning is cheap
/// and clones can be used from any number of requests concurrently.
#[derive(Clone)]
pub struct TokenAuthority {
    keys: Arc<Keys>,
    token_ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl TokenAuthority {
    pub fn new(config: &AuthConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: &AuthConfig, clock: Arc<dyn Clock>) -> Self {
        let secret = config.jwt_secret.as_bytes();
        Self {
            keys: Arc::new(Keys {
                encoding: EncodingKey::from_secret(secret),
                decoding: DecodingKey::from_secret(secret),
            }),
            token_ttl: config.token_ttl,
            clock,
        }
    }

    /// Encode a verified identity into a signed bearer token valid for the
    /// configured lifetime starting now.
    pub fn issue(&self, principal: &SessionPrincipal) -> Result<String, AuthError> {
        if principal.subject_id.is_empty() {
            return Err(AuthError::InvalidIdentity("subject_id"));
        }
        if principal.email.is_empty() {
            return Err(AuthError::InvalidIdentity("email"));
        }

        let now = self.clock.now();
        let expires_at = now
            .checked_add_signed(self.token_ttl)
            .ok_or(AuthError::LifetimeOutOfRange)?;

        let claim = IdentityClaim {
            principal: principal.clone(),
            issued_at: now.timestamp(),
            expires_at: expires_at.timestamp(),
        };

        encode_claim(&claim, &self.keys.encoding)
    }

    /// Turn a presented token back into its claim, or the reason it is not
    /// acceptable.
    pub fn verify(&self, token: &str) -> Result<IdentityClaim, AuthError> {
        if token.is_empty() {
            return Err(AuthError::MissingToken);
        }

        let claim = decode_claim(token, &self.keys.decoding)?;

        if claim.is_expired_at(self.clock.now()) {
            tracing::debug!(
                subject_id = %claim.principal.subject_id,
                expires_at = claim.expires_at,
                "Session token expired"
            );
            return Err(AuthError::Expired);
        }

        Ok(claim)
    }
}

impl std::fmt::Debug for TokenAuthority {
    #[mutants::skip] // Debug formatting only
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenAuthority")
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}
