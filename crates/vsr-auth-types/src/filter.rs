//! Bearer-token extractors for the `Authorization` header.

use std::sync::Arc;

use axum::Json;
use axum::extract::{FromRef, FromRequestParts};
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use http::header::AUTHORIZATION;
use http::request::Parts;

use crate::token::validate_token;

/// Shared HMAC secret used to verify bearer tokens.
///
/// Services expose it from their state with `FromRef`.
#[derive(Clone)]
pub struct JwtSecret(pub Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }
}

impl std::fmt::Debug for JwtSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("JwtSecret(..)")
    }
}

/// Rejection for both extractors: 401 with body `{"message":"Unauthorized"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Unauthorized;

impl IntoResponse for Unauthorized {
    fn into_response(self) -> Response {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({ "message": "Unauthorized" })),
        )
            .into_response()
    }
}

/// Raw `Authorization` value. `None` when absent or empty, `Err` when not ASCII.
fn authorization_value(parts: &Parts) -> Result<Option<String>, Unauthorized> {
    let Some(value) = parts.headers.get(AUTHORIZATION) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| Unauthorized)?;
    if value.is_empty() {
        return Ok(None);
    }
    Ok(Some(value.to_string()))
}

fn verify(header_value: &str, secret: &str) -> Result<String, Unauthorized> {
    let token = header_value
        .strip_prefix("Bearer ")
        .unwrap_or(header_value);
    validate_token(token, secret).map_err(|e| {
        tracing::debug!(error = %e, "bearer token rejected");
        Unauthorized
    })
}

/// Subject id of an authenticated caller. Rejects with 401 when the header is
/// absent or the token does not verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredUid(pub String);

impl<S> FromRequestParts<S> for RequiredUid
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = Unauthorized;

    // axum-core 0.5 defines this as `fn -> impl Future + Send`; extract
    // synchronously and return a 'static async block.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = authorization_value(parts)
            .and_then(|value| value.ok_or(Unauthorized))
            .and_then(|value| verify(&value, &secret.0))
            .map(Self);

        async move { result }
    }
}

/// Subject id when a bearer token is presented, `None` when the header is
/// absent. A present but invalid token still rejects with 401.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionalUid(pub Option<String>);

impl<S> FromRequestParts<S> for OptionalUid
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = Unauthorized;

    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = authorization_value(parts).and_then(|value| match value {
            None => Ok(Self(None)),
            Some(value) => verify(&value, &secret.0).map(|uid| Self(Some(uid))),
        });

        async move { result }
    }
}
