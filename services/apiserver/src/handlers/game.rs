use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use vsr_auth_types::filter::RequiredUid;

use crate::domain::types::Game;
use crate::error::ApiServiceError;
use crate::handlers::{AcceptedResponse, accepted};
use crate::state::AppState;
use crate::usecase::game::{
    CreateGameUseCase, DeleteGameUseCase, GameInput, GetGameUseCase, GetRecordGamesUseCase,
    GetUserGamesUseCase, UpdateGameUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

// The misspelt `opponentes_user_id` key is part of the public API.
#[derive(Deserialize, Default)]
#[serde(default)]
pub struct GameRequest {
    pub record_id: String,
    #[serde(rename = "opponentes_user_id")]
    pub opponents_user_id: String,
    pub bo3_flg: bool,
    pub qualifying_round_flg: bool,
    pub final_tournament_flg: bool,
    pub victory_flg: bool,
    pub opponents_deck_info: String,
    pub memo: String,
}

impl From<GameRequest> for GameInput {
    fn from(body: GameRequest) -> Self {
        Self {
            record_id: body.record_id,
            opponents_user_id: body.opponents_user_id,
            bo3_flg: body.bo3_flg,
            qualifying_round_flg: body.qualifying_round_flg,
            final_tournament_flg: body.final_tournament_flg,
            victory_flg: body.victory_flg,
            opponents_deck_info: body.opponents_deck_info,
            memo: body.memo,
        }
    }
}

#[derive(Serialize)]
pub struct GameResponse {
    pub id: String,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub record_id: String,
    pub user_id: String,
    #[serde(rename = "opponentes_user_id")]
    pub opponents_user_id: String,
    pub bo3_flg: bool,
    pub qualifying_round_flg: bool,
    pub final_tournament_flg: bool,
    pub victory_flg: bool,
    pub opponents_deck_info: String,
    pub memo: String,
}

impl From<Game> for GameResponse {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            created_at: game.created_at,
            updated_at: game.updated_at,
            record_id: game.record_id,
            user_id: game.user_id,
            opponents_user_id: game.opponents_user_id,
            bo3_flg: game.bo3_flg,
            qualifying_round_flg: game.qualifying_round_flg,
            final_tournament_flg: game.final_tournament_flg,
            victory_flg: game.victory_flg,
            opponents_deck_info: game.opponents_deck_info,
            memo: game.memo,
        }
    }
}

fn game_list(games: Vec<Game>) -> Json<Vec<GameResponse>> {
    Json(games.into_iter().map(GameResponse::from).collect())
}

// ── GET /games/{id} ──────────────────────────────────────────────────────────

pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<GameResponse>, ApiServiceError> {
    let usecase = GetGameUseCase {
        repo: state.game_repo(),
    };
    let game = usecase.execute(&id).await?;
    Ok(Json(game.into()))
}

// ── GET /users/{id}/games ────────────────────────────────────────────────────

pub async fn get_user_games(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<GameResponse>>, ApiServiceError> {
    let usecase = GetUserGamesUseCase {
        repo: state.game_repo(),
    };
    Ok(game_list(usecase.execute(&user_id).await?))
}

// ── GET /records/{id}/games ──────────────────────────────────────────────────

pub async fn get_record_games(
    State(state): State<AppState>,
    Path(record_id): Path<String>,
) -> Result<Json<Vec<GameResponse>>, ApiServiceError> {
    let usecase = GetRecordGamesUseCase {
        repo: state.game_repo(),
        records: state.record_repo(),
    };
    Ok(game_list(usecase.execute(&record_id).await?))
}

// ── POST /games ──────────────────────────────────────────────────────────────

pub async fn create_game(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    body: Result<Json<GameRequest>, JsonRejection>,
) -> Result<Json<GameResponse>, ApiServiceError> {
    let Json(body) = body?;
    let usecase = CreateGameUseCase {
        repo: state.game_repo(),
        records: state.record_repo(),
        ids: state.ids(),
    };
    let game = usecase.execute(&uid, body.into()).await?;
    Ok(Json(game.into()))
}

// ── PUT /games/{id} ──────────────────────────────────────────────────────────

pub async fn update_game(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    Path(id): Path<String>,
    body: Result<Json<GameRequest>, JsonRejection>,
) -> Result<Json<GameResponse>, ApiServiceError> {
    let Json(body) = body?;
    let usecase = UpdateGameUseCase {
        repo: state.game_repo(),
        records: state.record_repo(),
    };
    let game = usecase.execute(&id, &uid, body.into()).await?;
    Ok(Json(game.into()))
}

// ── DELETE /games/{id} ───────────────────────────────────────────────────────

pub async fn delete_game(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<AcceptedResponse>), ApiServiceError> {
    let usecase = DeleteGameUseCase {
        repo: state.game_repo(),
    };
    usecase.execute(&id, &uid).await?;
    Ok(accepted())
}
