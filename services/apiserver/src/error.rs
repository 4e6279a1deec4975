use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use vsr_domain::date::DateRangeError;
use vsr_domain::pagination::PageError;

/// API server domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum ApiServiceError {
    #[error("user not found")]
    UserNotFound,
    #[error("deck not found")]
    DeckNotFound,
    #[error("record not found")]
    RecordNotFound,
    #[error("game not found")]
    GameNotFound,
    #[error("battle not found")]
    BattleNotFound,
    #[error("official event not found")]
    OfficialEventNotFound,
    #[error("invalid parameter")]
    InvalidParameter,
    #[error("{0}")]
    InvalidBody(String),
    #[error("no authority")]
    NoAuthority,
    #[error("{0:#}")]
    Internal(#[from] anyhow::Error),
}

impl ApiServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::DeckNotFound => "DECK_NOT_FOUND",
            Self::RecordNotFound => "RECORD_NOT_FOUND",
            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::BattleNotFound => "BATTLE_NOT_FOUND",
            Self::OfficialEventNotFound => "OFFICIAL_EVENT_NOT_FOUND",
            Self::InvalidParameter => "INVALID_PARAMETER",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::NoAuthority => "NO_AUTHORITY",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl From<PageError> for ApiServiceError {
    fn from(_: PageError) -> Self {
        Self::InvalidParameter
    }
}

impl From<DateRangeError> for ApiServiceError {
    fn from(_: DateRangeError) -> Self {
        Self::InvalidParameter
    }
}

impl From<JsonRejection> for ApiServiceError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiServiceError {
    fn from(_: QueryRejection) -> Self {
        Self::InvalidParameter
    }
}

impl IntoResponse for ApiServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UserNotFound
            | Self::DeckNotFound
            | Self::RecordNotFound
            | Self::GameNotFound
            | Self::BattleNotFound
            | Self::OfficialEventNotFound => StatusCode::NOT_FOUND,
            Self::InvalidParameter | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NoAuthority => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
