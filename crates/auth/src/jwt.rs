//! JWT encoding/decoding and bearer token extraction helpers

use axum::http::HeaderValue;
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};

use crate::claims::IdentityClaim;
use crate::error::AuthError;

/// Sign a claim into a compact HS256 JWT
pub(crate) fn encode_claim(claim: &IdentityClaim, key: &EncodingKey) -> Result<String, AuthError> {
    encode(&Header::new(Algorithm::HS256), claim, key).map_err(|e| AuthError::Signing(e.to_string()))
}

/// Check the signature and decode the claim.
///
/// Expiry is deliberately not validated here; the authority compares
/// `exp` against its own clock with no leeway.
pub(crate) fn decode_claim(token: &str, key: &DecodingKey) -> Result<IdentityClaim, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.set_required_spec_claims(&["exp", "iat", "sub"]);

    let token_data = decode::<IdentityClaim>(token, key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "JWT validation failed");
        match e.kind() {
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::MalformedToken,
        }
    })?;

    let claim = token_data.claims;
    if claim.principal.subject_id.is_empty() || claim.principal.email.is_empty() {
        return Err(AuthError::MalformedToken);
    }

    Ok(claim)
}

/// Extract bearer token from Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<&str, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    match header_str.strip_prefix("Bearer ") {
        Some(token) if !token.trim().is_empty() => Ok(token.trim()),
        _ => Err(AuthError::InvalidAuthorizationFormat),
    }
}
