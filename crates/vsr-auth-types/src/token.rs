//! JWT bearer-token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;
#[cfg(any(feature = "issuer", test))]
use serde::Serialize;

/// Lifetime of tokens minted by [`issue_token`], in seconds.
pub const TOKEN_LIFETIME_SECS: u64 = 15;

/// Errors returned by [`validate_token`].
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid signature")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
    #[error("malformed token")]
    Malformed,
}

/// JWT claims payload.
///
/// | Field | JWT claim | Meaning |
/// |-------|-----------|---------|
/// | `uid` | custom | subject id issued by the identity provider |
/// | `exp` | `exp` | expiration, seconds since UNIX epoch |
///
/// [`Serialize`] requires the **`issuer`** cargo feature.
#[derive(Debug, Deserialize)]
#[cfg_attr(any(feature = "issuer", test), derive(Serialize))]
pub struct JwtClaims {
    pub uid: String,
    pub exp: u64,
}

// ── Core decode (private) ────────────────────────────────────────────────

/// Any HMAC family algorithm is accepted; asymmetric algorithms are rejected
/// because the key is a shared secret. Zero leeway on `exp`.
fn decode_jwt(token: &str, secret: &str) -> Result<JwtClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
    validation.leeway = 0;
    validation.validate_exp = true;
    validation.required_spec_claims.clear();
    validation.set_required_spec_claims(&["exp"]);

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
        jsonwebtoken::errors::ErrorKind::InvalidSignature
        | jsonwebtoken::errors::ErrorKind::InvalidAlgorithm => AuthError::InvalidSignature,
        _ => AuthError::Malformed,
    })?;

    Ok(data.claims)
}

// ── Public ───────────────────────────────────────────────────────────────

/// Validate a bearer token, returning its `uid` claim.
pub fn validate_token(token: &str, secret: &str) -> Result<String, AuthError> {
    let claims = decode_jwt(token, secret)?;
    if claims.uid.is_empty() {
        return Err(AuthError::Malformed);
    }
    Ok(claims.uid)
}

// ── Feature-gated: issuance ──────────────────────────────────────────────

#[cfg(any(feature = "issuer", test))]
fn now_secs() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}

/// Mint an HS256 token for `uid` expiring [`TOKEN_LIFETIME_SECS`] from now.
#[cfg(any(feature = "issuer", test))]
pub fn issue_token(uid: &str, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
    issue_token_with_exp(uid, secret, now_secs() + TOKEN_LIFETIME_SECS)
}

/// Mint an HS256 token with an explicit `exp`.
#[cfg(any(feature = "issuer", test))]
pub fn issue_token_with_exp(
    uid: &str,
    secret: &str,
    exp: u64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = JwtClaims {
        uid: uid.to_string(),
        exp,
    };
    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
}
