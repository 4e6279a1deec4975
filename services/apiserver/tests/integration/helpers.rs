use std::sync::Arc;

use axum::{Json, Router, http::HeaderMap, http::StatusCode, routing::post};
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue::Set, DatabaseConnection};
use serde_json::{Value, json};

use vsr_apiserver::infra::identity::HttpUserPort;
use vsr_apiserver::router::build_router;
use vsr_apiserver::state::AppState;
use vsr_apiserver_migration::Migrator;
use vsr_apiserver_schema::official_events;
use vsr_auth_types::filter::JwtSecret;
use vsr_testing::app::TestApp;
use vsr_testing::auth::{MockAuth, TEST_JWT_SECRET};
use vsr_testing::db::sqlite_db;
use vsr_testing::ids::SequentialIdGenerator;

pub const IDP_TOKEN: &str = "idp-test-token";

pub struct TestEnv {
    pub app: TestApp,
    pub db: DatabaseConnection,
}

pub fn auth(uid: &str) -> Option<HeaderMap> {
    Some(MockAuth::new(uid).headers())
}

// ── Fake identity provider ───────────────────────────────────────────────────

async fn accounts_lookup(
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    let expected = format!("Bearer {IDP_TOKEN}");
    if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some(expected.as_str()) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    let body = match body["localId"][0].as_str() {
        Some("alice") => json!({
            "users": [{
                "localId": "alice",
                "displayName": "Alice",
                "photoUrl": "https://example.com/alice.png"
            }]
        }),
        _ => json!({}),
    };
    Ok(Json(body))
}

/// Serve `accounts:lookup` on an ephemeral port; knows only user `alice`.
pub async fn spawn_identity_provider() -> String {
    let router = Router::new().route(
        "/v1/projects/{project}/accounts:lookup",
        post(accounts_lookup),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{addr}")
}

// ── App ──────────────────────────────────────────────────────────────────────

pub async fn test_env() -> TestEnv {
    let db = sqlite_db::<Migrator>().await;
    let state = AppState {
        db: db.clone(),
        jwt_secret: JwtSecret::new(TEST_JWT_SECRET),
        user_port: HttpUserPort::new(spawn_identity_provider().await, "vsr-test", IDP_TOKEN),
        ids: Arc::new(SequentialIdGenerator::new()),
    };
    TestEnv {
        app: TestApp::new(build_router(state)),
        db,
    }
}

pub async fn insert_official_event(db: &DatabaseConnection, id: i32, date: DateTime<Utc>) {
    official_events::ActiveModel {
        id: Set(id),
        title: Set(format!("City League {id}")),
        address: Set("Tokyo".into()),
        venue: Set("Hall A".into()),
        date: Set(date),
        started_at: Set(None),
        ended_at: Set(None),
        type_id: Set(1),
        csp_flg: Set(true),
        league_title: Set("Master".into()),
        regulation_title: Set("Standard".into()),
        capacity: Set(64),
        shop_id: Set(0),
        shop_name: Set(String::new()),
    }
    .insert(db)
    .await
    .unwrap();
}
