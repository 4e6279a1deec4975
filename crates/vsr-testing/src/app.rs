//! Drive a router in-process with `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::{Body, to_bytes};
use http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE};
use serde_json::Value;
use tower::ServiceExt as _;

/// A router under test. Each call clones the router and sends one request.
pub struct TestApp {
    pub router: Router,
}

/// Status and parsed JSON body (`Value::Null` when the body is empty).
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        headers: Option<HeaderMap>,
        body: Option<Value>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(headers) = headers {
            for (name, value) in headers.iter() {
                builder = builder.header(name, value);
            }
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };
        let request = builder.body(body).unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse { status, body }
    }

    pub async fn get(&self, uri: &str, headers: Option<HeaderMap>) -> TestResponse {
        self.request(Method::GET, uri, headers, None).await
    }

    pub async fn post(&self, uri: &str, headers: Option<HeaderMap>, body: Value) -> TestResponse {
        self.request(Method::POST, uri, headers, Some(body)).await
    }

    pub async fn put(&self, uri: &str, headers: Option<HeaderMap>, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, headers, Some(body)).await
    }

    pub async fn delete(&self, uri: &str, headers: Option<HeaderMap>) -> TestResponse {
        self.request(Method::DELETE, uri, headers, None).await
    }
}
