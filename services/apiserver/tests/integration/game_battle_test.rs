use chrono::{TimeZone, Utc};
use http::StatusCode;
use serde_json::json;

use vsr_testing::ids::SequentialIdGenerator;

use crate::helpers::{TestEnv, auth, insert_official_event, test_env};

/// Event 7 plus one record owned by alice (id #1).
async fn with_record() -> (TestEnv, String) {
    let env = test_env().await;
    insert_official_event(&env.db, 7, Utc.with_ymd_and_hms(2024, 3, 2, 1, 0, 0).unwrap()).await;
    env.app
        .post(
            "/api/v1alpha/records",
            auth("alice"),
            json!({ "official_event_id": 7, "deck_id": "D1" }),
        )
        .await;
    (env, SequentialIdGenerator::nth(1))
}

#[tokio::test]
async fn should_use_misspelt_opponent_key_in_game_json() {
    let (env, record_id) = with_record().await;

    let created = env
        .app
        .post(
            "/api/v1alpha/games",
            auth("alice"),
            json!({
                "record_id": record_id,
                "opponentes_user_id": "carol",
                "bo3_flg": true,
                "victory_flg": true,
                "opponents_deck_info": "Gardevoir ex"
            }),
        )
        .await;

    assert_eq!(created.status, StatusCode::OK);
    assert_eq!(created.body["opponentes_user_id"], "carol");
    assert_eq!(created.body["qualifying_round_flg"], false);
    assert_eq!(created.body["memo"], "");
}

#[tokio::test]
async fn should_require_existing_parents() {
    let (env, _) = with_record().await;

    let game = env
        .app
        .post("/api/v1alpha/games", auth("alice"), json!({ "record_id": "nope" }))
        .await;
    assert_eq!(game.status, StatusCode::NOT_FOUND);
    assert_eq!(game.body["kind"], "RECORD_NOT_FOUND");

    let battle = env
        .app
        .post("/api/v1alpha/battles", auth("alice"), json!({ "game_id": "nope" }))
        .await;
    assert_eq!(battle.status, StatusCode::NOT_FOUND);
    assert_eq!(battle.body["kind"], "GAME_NOT_FOUND");
}

#[tokio::test]
async fn should_record_battles_within_game() {
    let (env, record_id) = with_record().await;
    let app = &env.app;

    app.post("/api/v1alpha/games", auth("alice"), json!({ "record_id": record_id }))
        .await;
    let game_id = SequentialIdGenerator::nth(2);

    for prizes in [6, 4] {
        let res = app
            .post(
                "/api/v1alpha/battles",
                auth("alice"),
                json!({
                    "game_id": game_id,
                    "go_first": true,
                    "victory_flg": prizes == 6,
                    "your_prize_cards": prizes,
                    "opponents_prize_cards": 2
                }),
            )
            .await;
        assert_eq!(res.status, StatusCode::OK);
    }

    let battles = app
        .get(&format!("/api/v1alpha/games/{game_id}/battles"), None)
        .await;
    assert_eq!(battles.status, StatusCode::OK);
    let prizes: Vec<_> = battles
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["your_prize_cards"].as_u64().unwrap())
        .collect();
    assert_eq!(prizes, [6, 4]);

    let games = app
        .get(&format!("/api/v1alpha/records/{record_id}/games"), None)
        .await;
    assert_eq!(games.body.as_array().unwrap().len(), 1);
    let user_games = app.get("/api/v1alpha/users/alice/games", None).await;
    assert_eq!(user_games.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn should_restrict_battle_mutation_to_owner() {
    let (env, record_id) = with_record().await;
    let app = &env.app;
    app.post("/api/v1alpha/games", auth("alice"), json!({ "record_id": record_id }))
        .await;
    let game_id = SequentialIdGenerator::nth(2);
    app.post("/api/v1alpha/battles", auth("alice"), json!({ "game_id": game_id }))
        .await;
    let uri = format!("/api/v1alpha/battles/{}", SequentialIdGenerator::nth(3));

    let put = app
        .put(&uri, auth("bob"), json!({ "game_id": game_id, "memo": "mine now" }))
        .await;
    assert_eq!(put.status, StatusCode::FORBIDDEN);
    let delete = app.delete(&uri, auth("bob")).await;
    assert_eq!(delete.status, StatusCode::FORBIDDEN);

    let put = app
        .put(&uri, auth("alice"), json!({ "game_id": game_id, "memo": "tight" }))
        .await;
    assert_eq!(put.status, StatusCode::OK);
    assert_eq!(put.body["memo"], "tight");

    let delete = app.delete(&uri, auth("alice")).await;
    assert_eq!(delete.status, StatusCode::ACCEPTED);
    assert_eq!(app.get(&uri, None).await.status, StatusCode::NOT_FOUND);
}
