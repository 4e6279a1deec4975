use axum::{
    Json,
    extract::{Path, Query, State, rejection::{JsonRejection, QueryRejection}},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use vsr_auth_types::filter::{OptionalUid, RequiredUid};
use vsr_domain::pagination::{PageMeta, PageRequest};

use crate::domain::types::{Record, parse_official_event_id};
use crate::error::ApiServiceError;
use crate::handlers::{AcceptedResponse, PageQuery, accepted};
use crate::state::AppState;
use crate::usecase::record::{
    CreateRecordUseCase, DeleteRecordUseCase, GetDeckRecordsUseCase,
    GetOfficialEventRecordsUseCase, GetRecordUseCase, GetRecordsUseCase, GetUserRecordsUseCase,
    RecordInput, UpdateRecordUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
pub struct RecordRequest {
    pub official_event_id: u32,
    pub deck_id: String,
}

impl From<RecordRequest> for RecordInput {
    fn from(body: RecordRequest) -> Self {
        Self {
            official_event_id: body.official_event_id,
            deck_id: body.deck_id,
        }
    }
}

#[derive(Serialize)]
pub struct RecordResponse {
    pub id: String,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub official_event_id: u32,
    pub user_id: String,
    pub deck_id: String,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            official_event_id: record.official_event_id,
            user_id: record.user_id,
            deck_id: record.deck_id,
        }
    }
}

#[derive(Serialize)]
pub struct RecordPageResponse {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub records: Vec<RecordResponse>,
}

fn record_list(records: Vec<Record>) -> Json<Vec<RecordResponse>> {
    Json(records.into_iter().map(RecordResponse::from).collect())
}

// ── GET /records ─────────────────────────────────────────────────────────────

pub async fn get_records(
    State(state): State<AppState>,
    OptionalUid(uid): OptionalUid,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<RecordPageResponse>, ApiServiceError> {
    let Query(query) = query?;
    let page = PageRequest::parse(query.page.as_deref())?;
    let usecase = GetRecordsUseCase {
        repo: state.record_repo(),
    };
    let records = usecase.execute(uid.as_deref(), page).await?;
    Ok(Json(RecordPageResponse {
        meta: page.meta(),
        records: records.into_iter().map(RecordResponse::from).collect(),
    }))
}

// ── GET /records/{id} ────────────────────────────────────────────────────────

pub async fn get_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RecordResponse>, ApiServiceError> {
    let usecase = GetRecordUseCase {
        repo: state.record_repo(),
    };
    let record = usecase.execute(&id).await?;
    Ok(Json(record.into()))
}

// ── GET /users/{id}/records ──────────────────────────────────────────────────

pub async fn get_user_records(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<RecordResponse>>, ApiServiceError> {
    let usecase = GetUserRecordsUseCase {
        repo: state.record_repo(),
    };
    Ok(record_list(usecase.execute(&user_id).await?))
}

// ── GET /decks/{id}/records ──────────────────────────────────────────────────

pub async fn get_deck_records(
    State(state): State<AppState>,
    Path(deck_id): Path<String>,
) -> Result<Json<Vec<RecordResponse>>, ApiServiceError> {
    let usecase = GetDeckRecordsUseCase {
        repo: state.record_repo(),
        decks: state.deck_repo(),
    };
    Ok(record_list(usecase.execute(&deck_id).await?))
}

// ── GET /official_events/{id}/records ────────────────────────────────────────

pub async fn get_official_event_records(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<RecordResponse>>, ApiServiceError> {
    let id = parse_official_event_id(&id).ok_or(ApiServiceError::InvalidParameter)?;
    let usecase = GetOfficialEventRecordsUseCase {
        repo: state.record_repo(),
        events: state.official_event_repo(),
    };
    Ok(record_list(usecase.execute(id).await?))
}

// ── POST /records ────────────────────────────────────────────────────────────

pub async fn create_record(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    body: Result<Json<RecordRequest>, JsonRejection>,
) -> Result<Json<RecordResponse>, ApiServiceError> {
    let Json(body) = body?;
    let usecase = CreateRecordUseCase {
        repo: state.record_repo(),
        events: state.official_event_repo(),
        ids: state.ids(),
    };
    let record = usecase.execute(&uid, body.into()).await?;
    Ok(Json(record.into()))
}

// ── PUT /records/{id} ────────────────────────────────────────────────────────

pub async fn update_record(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    Path(id): Path<String>,
    body: Result<Json<RecordRequest>, JsonRejection>,
) -> Result<Json<RecordResponse>, ApiServiceError> {
    let Json(body) = body?;
    let usecase = UpdateRecordUseCase {
        repo: state.record_repo(),
        events: state.official_event_repo(),
    };
    let record = usecase.execute(&id, &uid, body.into()).await?;
    Ok(Json(record.into()))
}

// ── DELETE /records/{id} ─────────────────────────────────────────────────────

pub async fn delete_record(
    State(state): State<AppState>,
    RequiredUid(uid): RequiredUid,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<AcceptedResponse>), ApiServiceError> {
    let usecase = DeleteRecordUseCase {
        repo: state.record_repo(),
    };
    usecase.execute(&id, &uid).await?;
    Ok(accepted())
}
