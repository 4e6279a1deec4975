use http::StatusCode;
use serde_json::json;

use vsr_testing::ids::SequentialIdGenerator;

use crate::helpers::{auth, test_env};

const MASKED: &str = "ZZZZZZ-YYYYYY-ZZZZZZ";

fn private_deck() -> serde_json::Value {
    json!({
        "name": "Charizard ex",
        "code": "ggnnLg-abc123-QQPPnn",
        "private_code_flg": true
    })
}

#[tokio::test]
async fn should_run_full_deck_lifecycle() {
    let env = test_env().await;
    let app = &env.app;

    let created = app.post("/api/v1alpha/decks", auth("alice"), private_deck()).await;
    assert_eq!(created.status, StatusCode::OK);
    let id = SequentialIdGenerator::nth(1);
    assert_eq!(created.body["id"], id.as_str());
    assert_eq!(created.body["user_id"], "alice");
    assert_eq!(created.body["code"], "ggnnLg-abc123-QQPPnn");

    let uri = format!("/api/v1alpha/decks/{id}");

    let as_bob = app.get(&uri, auth("bob")).await;
    assert_eq!(as_bob.status, StatusCode::OK);
    assert_eq!(as_bob.body["code"], MASKED);

    let put_as_bob = app
        .put(
            &uri,
            auth("bob"),
            json!({ "name": "stolen", "code": "x", "private_code_flg": false }),
        )
        .await;
    assert_eq!(put_as_bob.status, StatusCode::FORBIDDEN);
    assert_eq!(put_as_bob.body["kind"], "NO_AUTHORITY");

    let put_as_alice = app
        .put(
            &uri,
            auth("alice"),
            json!({
                "name": "Charizard ex v2",
                "code": "ggnnLg-abc123-QQPPnn",
                "private_code_flg": true
            }),
        )
        .await;
    assert_eq!(put_as_alice.status, StatusCode::OK);
    assert_eq!(put_as_alice.body["name"], "Charizard ex v2");
    assert_eq!(put_as_alice.body["created_at"], created.body["created_at"]);

    let deleted = app.delete(&uri, auth("alice")).await;
    assert_eq!(deleted.status, StatusCode::ACCEPTED);
    assert_eq!(deleted.body, json!({ "message": "accepted" }));

    let gone = app.get(&uri, auth("alice")).await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
    assert_eq!(gone.body["kind"], "DECK_NOT_FOUND");
}

#[tokio::test]
async fn should_mask_private_deck_for_anonymous_reader() {
    let env = test_env().await;
    env.app
        .post("/api/v1alpha/decks", auth("alice"), private_deck())
        .await;

    let uri = format!("/api/v1alpha/decks/{}", SequentialIdGenerator::nth(1));
    let anonymous = env.app.get(&uri, None).await;
    assert_eq!(anonymous.status, StatusCode::OK);
    assert_eq!(anonymous.body["code"], MASKED);
}

#[tokio::test]
async fn should_mask_user_decks_but_not_own_deck_page() {
    let env = test_env().await;
    let app = &env.app;
    app.post("/api/v1alpha/decks", auth("alice"), private_deck()).await;
    app.post(
        "/api/v1alpha/decks",
        auth("alice"),
        json!({ "name": "Lugia", "code": "public-code", "private_code_flg": false }),
    )
    .await;

    let for_bob = app.get("/api/v1alpha/users/alice/decks", auth("bob")).await;
    assert_eq!(for_bob.status, StatusCode::OK);
    let codes: Vec<_> = for_bob
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["code"].clone())
        .collect();
    assert!(codes.contains(&json!(MASKED)));
    assert!(codes.contains(&json!("public-code")));

    let mine = app.get("/api/v1alpha/decks", auth("alice")).await;
    assert_eq!(mine.status, StatusCode::OK);
    assert_eq!(mine.body["page"], 1);
    assert_eq!(mine.body["limit"], 20);
    assert_eq!(mine.body["offset"], 0);
    let decks = mine.body["decks"].as_array().unwrap();
    assert_eq!(decks.len(), 2);
    assert!(decks.iter().all(|d| d["code"] != MASKED));
}

#[tokio::test]
async fn should_reject_non_numeric_page() {
    let env = test_env().await;
    let res = env.app.get("/api/v1alpha/decks?page=abc", auth("alice")).await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["kind"], "INVALID_PARAMETER");
}

#[tokio::test]
async fn should_treat_non_positive_page_as_first() {
    let env = test_env().await;
    let res = env.app.get("/api/v1alpha/decks?page=-4", auth("alice")).await;
    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.body["page"], 1);
    assert_eq!(res.body["offset"], 0);
}

#[tokio::test]
async fn should_return_invalid_body_for_malformed_json() {
    let env = test_env().await;
    let mut headers = auth("alice").unwrap();
    headers.insert(http::header::CONTENT_TYPE, "application/json".parse().unwrap());
    let res = env
        .app
        .request(http::Method::POST, "/api/v1alpha/decks", Some(headers), None)
        .await;
    assert_eq!(res.status, StatusCode::BAD_REQUEST);
    assert_eq!(res.body["kind"], "INVALID_BODY");
}

#[tokio::test]
async fn should_return_not_found_when_deleting_missing_deck() {
    let env = test_env().await;
    let res = env.app.delete("/api/v1alpha/decks/missing", auth("alice")).await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_surface_store_failure_message_as_internal() {
    use sea_orm::ConnectionTrait;

    let env = test_env().await;
    env.db.execute_unprepared("DROP TABLE decks").await.unwrap();

    let res = env.app.get("/api/v1alpha/decks/D1", None).await;

    assert_eq!(res.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(res.body["kind"], "INTERNAL");
    let message = res.body["message"].as_str().unwrap();
    assert!(message.starts_with("find deck by id: "), "{message}");
    assert!(message.contains("no such table: decks"), "{message}");
}
