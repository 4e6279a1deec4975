use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use vsr_auth_types::filter::RequiredUid;

use crate::domain::types::Battle;
use crate::error::ApiServiceError;
use crate::handlers::{AcceptedResponse, accepted};
use crate::state::AppState;
use crate::usecase::battle::{
    BattleInput, CreateBattleUseCase, DeleteBattleUseCase, GetBattleUseCase,
    GetGameBattlesUseCase, UpdateBattleUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct BattleRequest {
    pub game_id: String,
    pub go_first: bool,
    pub victory_flg: bool,
    pub your_prize_cards: u32,
    pub opponents_prize_cards: u32,
    pub memo: String,
}

impl From<BattleRequest> for BattleInput {
    fn from(body: BattleRequest) -> Self {
        Self {
            game_id: body.game_id,
            go_first: body.go_first,
            victory_flg: body.victory_flg,
            your_prize_cards: body.your_prize_cards,
            opponents_prize_cards: body.opponents_prize_cards,
            memo: body.memo,
        }
    }
}

#[derive(Serialize)]
pub struct BattleResponse {
    pub id: String,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub game_id: String,
    pub user_id: String,
    pub go_first: bool,
    pub victory_flg: bool,
    pub your_prize_cards: u32,
    pub opponents_prize_cards: u32,
    pub memo: String,
}

impl From<Battle> for BattleResponse {
    fn from(battle: Battle) -> Self {
        Self {
            id: battle.id,
            created_at: battle.created_at,
            updated_at: battle.updated_at,
            game_id: battle.game_id,
            user_id: battle.user_id,
            go_first: battle.go_first,
            victory_flg: battle.victory_flg,
            your_prize_cards: battle.your_prize_cards,
            opponents_prize_cards: battle.opponents_prize_cards,
            memo: battle.memo,
        }
    }
}

// ── GET /battles/{id} ────────────────────────────────────────────────────────

pub async fn get_battle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<BattleResponse>, ApiServiceError> {
    let usecase = GetBattleUseCase {
        repo: state.battle_repo(),
    };
    let battle = usecase.execute(&id).await?;
    Ok(Json(battle.into()))
}

// ── GET /games/{id}/battles ──────────────────────────────────────────────────

pub async fn get_game_battles(
    State(state): State<AppState>,
    Path(game_id): Path<String>,
) -> Result<Json<Vec<BattleResponse>>, ApiServiceError> {
    let usecase = GetGameBattlesUseCase {
        repo: state.battle_repo(),
        games: state.game_repo(),
    };
    let battles = usecase.execute(&game_id).await?;
    Ok(Json(battles.into_iter().map(BattleResponse::from).collect()))
}

// ── POST /battles ────────────────────────────────────────────────────────────

pub async fn create_battle(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    body: Result<Json<BattleRequest>, JsonRejection>,
) -> Result<Json<BattleResponse>, ApiServiceError> {
    let Json(body) = body?;
    let usecase = CreateBattleUseCase {
        repo: state.battle_repo(),
        games: state.game_repo(),
        ids: state.ids(),
    };
    let battle = usecase.execute(&uid, body.into()).await?;
    Ok(Json(battle.into()))
}

// ── PUT /battles/{id} ────────────────────────────────────────────────────────

pub async fn update_battle(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    Path(id): Path<String>,
    body: Result<Json<BattleRequest>, JsonRejection>,
) -> Result<Json<BattleResponse>, ApiServiceError> {
    let Json(body) = body?;
    let usecase = UpdateBattleUseCase {
        repo: state.battle_repo(),
        games: state.game_repo(),
    };
    let battle = usecase.execute(&id, &uid, body.into()).await?;
    Ok(Json(battle.into()))
}

// ── DELETE /battles/{id} ─────────────────────────────────────────────────────

pub async fn delete_battle(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<AcceptedResponse>), ApiServiceError> {
    let usecase = DeleteBattleUseCase {
        repo: state.battle_repo(),
    };
    usecase.execute(&id, &uid).await?;
    Ok(accepted())
}
