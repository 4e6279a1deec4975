use http::StatusCode;

use vsr_domain::pagination::MAX_PAGE;

use crate::helpers::{auth, test_env};

const HUGE_PAGE: &str = "9223372036854775807";

#[tokio::test]
async fn should_reject_page_past_last_addressable_offset() {
    let env = test_env().await;
    let cases = [
        ("/api/v1alpha/decks", auth("alice")),
        ("/api/v1alpha/records", auth("alice")),
        ("/api/v1alpha/records", None),
        ("/api/v1alpha/official_events", None),
    ];
    for (path, headers) in cases {
        let res = env.app.get(&format!("{path}?page={HUGE_PAGE}"), headers).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{path}");
        assert_eq!(res.body["kind"], "INVALID_PARAMETER", "{path}");
    }
}

#[tokio::test]
async fn should_serve_last_addressable_page_as_empty() {
    let env = test_env().await;
    let res = env
        .app
        .get(&format!("/api/v1alpha/decks?page={MAX_PAGE}"), auth("alice"))
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["page"], MAX_PAGE);
    assert_eq!(res.body["decks"], serde_json::json!([]));
}

#[tokio::test]
async fn should_reject_duplicate_query_keys_with_error_body() {
    let env = test_env().await;
    let cases = [
        ("/api/v1alpha/decks?page=1&page=2", auth("alice")),
        ("/api/v1alpha/records?page=1&page=2", None),
        (
            "/api/v1alpha/official_events?start_date=2024-03-01&start_date=2024-03-02",
            None,
        ),
    ];
    for (uri, headers) in cases {
        let res = env.app.get(uri, headers).await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(res.body["kind"], "INVALID_PARAMETER", "{uri}");
    }
}
