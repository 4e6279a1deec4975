use chrono::{TimeZone, Utc};
use http::StatusCode;

use crate::helpers::{TestEnv, insert_official_event, test_env};

async fn seeded() -> TestEnv {
    let env = test_env().await;
    // 2024-03-01 00:00 JST is 2024-02-29 15:00 UTC.
    insert_official_event(&env.db, 1, Utc.with_ymd_and_hms(2024, 2, 29, 15, 0, 0).unwrap()).await;
    insert_official_event(&env.db, 2, Utc.with_ymd_and_hms(2024, 2, 29, 14, 59, 59).unwrap())
        .await;
    insert_official_event(&env.db, 3, Utc.with_ymd_and_hms(2024, 3, 31, 14, 59, 59).unwrap())
        .await;
    env
}

#[tokio::test]
async fn should_list_first_page_by_default() {
    let env = seeded().await;
    let res = env.app.get("/api/v1alpha/official_events", None).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["page"], 1);
    assert_eq!(res.body["offset"], 0);
    let ids: Vec<_> = res.body["official_events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, [2, 1, 3]);
}

#[tokio::test]
async fn should_filter_by_jst_date_range() {
    let env = seeded().await;
    let res = env
        .app
        .get(
            "/api/v1alpha/official_events?start_date=2024-03-01&end_date=2024-03-31&page=9",
            None,
        )
        .await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["start_date"], "2024-03-01");
    assert_eq!(res.body["end_date"], "2024-03-31");
    let events = res.body["official_events"].as_array().unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0]["date"], "2024-02-29T15:00:00.000Z");
}

#[tokio::test]
async fn should_reject_reversed_or_partial_date_range() {
    let env = seeded().await;
    let reversed = env
        .app
        .get(
            "/api/v1alpha/official_events?start_date=2024-04-01&end_date=2024-03-01",
            None,
        )
        .await;
    assert_eq!(reversed.status, StatusCode::BAD_REQUEST);

    let partial = env
        .app
        .get("/api/v1alpha/official_events?start_date=2024-04-01", None)
        .await;
    assert_eq!(partial.status, StatusCode::BAD_REQUEST);
    assert_eq!(partial.body["kind"], "INVALID_PARAMETER");
}

#[tokio::test]
async fn should_validate_official_event_id() {
    let env = seeded().await;
    for bad in ["0", "-1", "abc"] {
        let res = env
            .app
            .get(&format!("/api/v1alpha/official_events/{bad}"), None)
            .await;
        assert_eq!(res.status, StatusCode::BAD_REQUEST, "id {bad}");
    }

    let missing = env.app.get("/api/v1alpha/official_events/42", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["kind"], "OFFICIAL_EVENT_NOT_FOUND");

    let found = env.app.get("/api/v1alpha/official_events/3", None).await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["title"], "City League 3");
    assert!(found.body["started_at"].is_null());
}
