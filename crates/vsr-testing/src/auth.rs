//! Bearer-token helpers for tests.
//!
//! Mints real HS256 tokens with the shared test secret so requests pass
//! through the same `RequiredUid` / `OptionalUid` extractors as production.

use axum::http::{HeaderMap, HeaderValue, header::AUTHORIZATION};

use vsr_auth_types::token::issue_token;

/// Secret every test `AppState` is built with.
pub const TEST_JWT_SECRET: &str = "vsr-test-jwt-secret";

/// Identity attached to test requests.
pub struct MockAuth {
    pub uid: String,
    pub secret: String,
}

impl MockAuth {
    pub fn new(uid: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            secret: TEST_JWT_SECRET.to_string(),
        }
    }

    /// A fresh token for this uid (15-second lifetime).
    pub fn token(&self) -> String {
        issue_token(&self.uid, &self.secret).expect("failed to sign test token")
    }

    /// `Authorization: Bearer <token>` header value.
    pub fn bearer(&self) -> HeaderValue {
        HeaderValue::from_str(&format!("Bearer {}", self.token())).unwrap()
    }

    pub fn headers(&self) -> HeaderMap {
        let mut map = HeaderMap::new();
        map.insert(AUTHORIZATION, self.bearer());
        map
    }
}
