use chrono::{TimeZone, Utc};
use http::StatusCode;
use sea_orm::EntityTrait;
use serde_json::json;

use vsr_apiserver_schema::records;
use vsr_testing::ids::SequentialIdGenerator;

use crate::helpers::{auth, insert_official_event, test_env};

#[tokio::test]
async fn should_not_write_record_for_missing_official_event() {
    let env = test_env().await;

    let res = env
        .app
        .post(
            "/api/v1alpha/records",
            auth("alice"),
            json!({ "official_event_id": 404, "deck_id": "D1" }),
        )
        .await;

    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert_eq!(res.body["kind"], "OFFICIAL_EVENT_NOT_FOUND");
    let rows = records::Entity::find().all(&env.db).await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn should_create_and_list_records() {
    let env = test_env().await;
    insert_official_event(&env.db, 7, Utc.with_ymd_and_hms(2024, 3, 2, 1, 0, 0).unwrap()).await;
    let app = &env.app;

    let created = app
        .post(
            "/api/v1alpha/records",
            auth("alice"),
            json!({ "official_event_id": 7, "deck_id": "D1" }),
        )
        .await;
    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["official_event_id"], 7);
    app.post(
        "/api/v1alpha/records",
        auth("bob"),
        json!({ "official_event_id": 7, "deck_id": "D2" }),
    )
    .await;

    let mine = app.get("/api/v1alpha/records", auth("alice")).await;
    assert_eq!(mine.body["records"].as_array().unwrap().len(), 1);
    let everyone = app.get("/api/v1alpha/records", None).await;
    assert_eq!(everyone.body["records"].as_array().unwrap().len(), 2);
    assert_eq!(everyone.body["limit"], 20);

    let by_event = app.get("/api/v1alpha/official_events/7/records", None).await;
    assert_eq!(by_event.status, StatusCode::OK);
    assert_eq!(by_event.body.as_array().unwrap().len(), 2);

    let by_user = app.get("/api/v1alpha/users/bob/records", None).await;
    assert_eq!(by_user.body.as_array().unwrap().len(), 1);
    assert_eq!(by_user.body[0]["deck_id"], "D2");
}

#[tokio::test]
async fn should_list_records_of_existing_deck_only() {
    let env = test_env().await;
    insert_official_event(&env.db, 7, Utc.with_ymd_and_hms(2024, 3, 2, 1, 0, 0).unwrap()).await;
    let app = &env.app;

    app.post(
        "/api/v1alpha/decks",
        auth("alice"),
        json!({ "name": "Lugia", "code": "c", "private_code_flg": false }),
    )
    .await;
    let deck_id = SequentialIdGenerator::nth(1);
    app.post(
        "/api/v1alpha/records",
        auth("alice"),
        json!({ "official_event_id": 7, "deck_id": deck_id }),
    )
    .await;

    let listed = app
        .get(&format!("/api/v1alpha/decks/{deck_id}/records"), None)
        .await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body.as_array().unwrap().len(), 1);

    let missing = app.get("/api/v1alpha/decks/unknown/records", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_check_official_event_before_ownership_on_update() {
    let env = test_env().await;
    insert_official_event(&env.db, 7, Utc.with_ymd_and_hms(2024, 3, 2, 1, 0, 0).unwrap()).await;
    let app = &env.app;
    app.post(
        "/api/v1alpha/records",
        auth("alice"),
        json!({ "official_event_id": 7, "deck_id": "D1" }),
    )
    .await;
    let uri = format!("/api/v1alpha/records/{}", SequentialIdGenerator::nth(1));

    let bad_event = app
        .put(&uri, auth("bob"), json!({ "official_event_id": 99, "deck_id": "D1" }))
        .await;
    assert_eq!(bad_event.status, StatusCode::NOT_FOUND);

    let not_owner = app
        .put(&uri, auth("bob"), json!({ "official_event_id": 7, "deck_id": "D9" }))
        .await;
    assert_eq!(not_owner.status, StatusCode::FORBIDDEN);

    let not_owner_delete = app.delete(&uri, auth("bob")).await;
    assert_eq!(not_owner_delete.status, StatusCode::FORBIDDEN);
    assert_eq!(app.get(&uri, None).await.status, StatusCode::OK);
}
