use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use vsr_auth_types::filter::{OptionalUid, RequiredUid};
use vsr_domain::pagination::{PageMeta, PageRequest};

use crate::domain::types::Deck;
use crate::error::ApiServiceError;
use crate::handlers::{AcceptedResponse, PageQuery, accepted};
use crate::state::AppState;
use crate::usecase::deck::{
    CreateDeckUseCase, DeckInput, DeleteDeckUseCase, GetDeckUseCase, GetMyDecksUseCase,
    GetUserDecksUseCase, UpdateDeckUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct DeckRequest {
    pub name: String,
    pub code: String,
    pub private_code_flg: bool,
}

impl From<DeckRequest> for DeckInput {
    fn from(body: DeckRequest) -> Self {
        Self {
            name: body.name,
            code: body.code,
            private_code_flg: body.private_code_flg,
        }
    }
}

#[derive(Serialize)]
pub struct DeckResponse {
    pub id: String,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub user_id: String,
    pub name: String,
    pub code: String,
    pub private_code_flg: bool,
}

impl From<Deck> for DeckResponse {
    fn from(deck: Deck) -> Self {
        Self {
            id: deck.id,
            created_at: deck.created_at,
            updated_at: deck.updated_at,
            user_id: deck.user_id,
            name: deck.name,
            code: deck.code,
            private_code_flg: deck.private_code_flg,
        }
    }
}

#[derive(Serialize)]
pub struct DeckPageResponse {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub decks: Vec<DeckResponse>,
}

// ── GET /decks ───────────────────────────────────────────────────────────────

pub async fn get_my_decks(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<DeckPageResponse>, ApiServiceError> {
    let Query(query) = query?;
    let page = PageRequest::parse(query.page.as_deref())?;
    let usecase = GetMyDecksUseCase {
        repo: state.deck_repo(),
    };
    let decks = usecase.execute(&uid, page).await?;
    Ok(Json(DeckPageResponse {
        meta: page.meta(),
        decks: decks.into_iter().map(DeckResponse::from).collect(),
    }))
}

// ── GET /decks/{id} ──────────────────────────────────────────────────────────

pub async fn get_deck(
    State(state): State<AppState>,
    OptionalUid(uid): OptionalUid,
    Path(id): Path<String>,
) -> Result<Json<DeckResponse>, ApiServiceError> {
    let usecase = GetDeckUseCase {
        repo: state.deck_repo(),
    };
    let deck = usecase.execute(&id, uid.as_deref()).await?;
    Ok(Json(deck.into()))
}

// ── GET /users/{id}/decks ────────────────────────────────────────────────────

pub async fn get_user_decks(
    State(state): State<AppState>,
    OptionalUid(uid): OptionalUid,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<DeckResponse>>, ApiServiceError> {
    let usecase = GetUserDecksUseCase {
        repo: state.deck_repo(),
    };
    let decks = usecase.execute(&user_id, uid.as_deref()).await?;
    Ok(Json(decks.into_iter().map(DeckResponse::from).collect()))
}

// ── POST /decks ──────────────────────────────────────────────────────────────

pub async fn create_deck(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    body: Result<Json<DeckRequest>, JsonRejection>,
) -> Result<Json<DeckResponse>, ApiServiceError> {
    let Json(body) = body?;
    let usecase = CreateDeckUseCase {
        repo: state.deck_repo(),
        ids: state.ids(),
    };
    let deck = usecase.execute(&uid, body.into()).await?;
    Ok(Json(deck.into()))
}

// ── PUT /decks/{id} ──────────────────────────────────────────────────────────

pub async fn update_deck(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    Path(id): Path<String>,
    body: Result<Json<DeckRequest>, JsonRejection>,
) -> Result<Json<DeckResponse>, ApiServiceError> {
    let Json(body) = body?;
    let usecase = UpdateDeckUseCase {
        repo: state.deck_repo(),
    };
    let deck = usecase.execute(&id, &uid, body.into()).await?;
    Ok(Json(deck.into()))
}

// ── DELETE /decks/{id} ───────────────────────────────────────────────────────

pub async fn delete_deck(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<AcceptedResponse>), ApiServiceError> {
    let usecase = DeleteDeckUseCase {
        repo: state.deck_repo(),
    };
    usecase.execute(&id, &uid).await?;
    Ok(accepted())
}
