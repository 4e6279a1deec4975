use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use vsr_domain::date::DateRange;
use vsr_domain::pagination::{PageMeta, PageRequest};

use crate::domain::types::{OfficialEvent, parse_official_event_id};
use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::official_event::{
    GetOfficialEventUseCase, GetOfficialEventsByDateUseCase, GetOfficialEventsUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct OfficialEventResponse {
    pub id: u32,
    pub title: String,
    pub address: String,
    pub venue: String,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms")]
    pub date: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms_opt")]
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(serialize_with = "vsr_core::serde::to_rfc3339_ms_opt")]
    pub ended_at: Option<chrono::DateTime<chrono::Utc>>,
    pub type_id: i32,
    pub csp_flg: bool,
    pub league_title: String,
    pub regulation_title: String,
    pub capacity: i32,
    pub shop_id: i32,
    pub shop_name: String,
}

impl From<OfficialEvent> for OfficialEventResponse {
    fn from(event: OfficialEvent) -> Self {
        Self {
            id: event.id,
            title: event.title,
            address: event.address,
            venue: event.venue,
            date: event.date,
            started_at: event.started_at,
            ended_at: event.ended_at,
            type_id: event.type_id,
            csp_flg: event.csp_flg,
            league_title: event.league_title,
            regulation_title: event.regulation_title,
            capacity: event.capacity,
            shop_id: event.shop_id,
            shop_name: event.shop_name,
        }
    }
}

#[derive(Serialize)]
pub struct OfficialEventPageResponse {
    #[serde(flatten)]
    pub meta: PageMeta,
    pub official_events: Vec<OfficialEventResponse>,
}

#[derive(Serialize)]
pub struct OfficialEventDateResponse {
    pub start_date: String,
    pub end_date: String,
    pub official_events: Vec<OfficialEventResponse>,
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct OfficialEventListQuery {
    pub page: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn event_list(events: Vec<OfficialEvent>) -> Vec<OfficialEventResponse> {
    events.into_iter().map(OfficialEventResponse::from).collect()
}

// ── GET /official_events ─────────────────────────────────────────────────────

/// Date-range mode when either `start_date` or `end_date` is given, page mode
/// otherwise. A lone date bound fails to parse and yields 400.
pub async fn get_official_events(
    State(state): State<AppState>,
    query: Result<Query<OfficialEventListQuery>, QueryRejection>,
) -> Result<Response, ApiServiceError> {
    let Query(query) = query?;
    if present(&query.start_date) || present(&query.end_date) {
        let start_date = query.start_date.unwrap_or_default();
        let end_date = query.end_date.unwrap_or_default();
        let range = DateRange::parse(&start_date, &end_date)?;
        let usecase = GetOfficialEventsByDateUseCase {
            repo: state.official_event_repo(),
        };
        let events = usecase.execute(&range).await?;
        return Ok(Json(OfficialEventDateResponse {
            start_date,
            end_date,
            official_events: event_list(events),
        })
        .into_response());
    }

    let page = PageRequest::parse(query.page.as_deref())?;
    let usecase = GetOfficialEventsUseCase {
        repo: state.official_event_repo(),
    };
    let events = usecase.execute(page).await?;
    Ok(Json(OfficialEventPageResponse {
        meta: page.meta(),
        official_events: event_list(events),
    })
    .into_response())
}

// ── GET /official_events/{id} ────────────────────────────────────────────────

pub async fn get_official_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OfficialEventResponse>, ApiServiceError> {
    let id = parse_official_event_id(&id).ok_or(ApiServiceError::InvalidParameter)?;
    let usecase = GetOfficialEventUseCase {
        repo: state.official_event_repo(),
    };
    let event = usecase.execute(id).await?;
    Ok(Json(event.into()))
}
