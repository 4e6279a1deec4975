pub mod battle;
pub mod deck;
pub mod game;
pub mod official_event;
pub mod record;
pub mod user;

use axum::{Json, http::StatusCode};
use serde::{Deserialize, Serialize};

/// `?page=` on paginated lists. Kept as a raw string so that a non-numeric
/// value maps to `INVALID_PARAMETER` instead of an extractor rejection.
#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

#[derive(Serialize)]
pub struct AcceptedResponse {
    pub message: &'static str,
}

/// 202 with `{"message":"accepted"}`, returned by every delete.
pub fn accepted() -> (StatusCode, Json<AcceptedResponse>) {
    (
        StatusCode::ACCEPTED,
        Json(AcceptedResponse {
            message: "accepted",
        }),
    )
}
