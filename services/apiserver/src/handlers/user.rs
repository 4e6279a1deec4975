use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::error::ApiServiceError;
use crate::state::AppState;
use crate::usecase::user::GetUserUseCase;

// ── GET /users/{id} ──────────────────────────────────────────────────────────

#[derive(Serialize)]
pub struct UserResponse {
    pub uid: String,
    pub display_name: String,
    pub photo_url: String,
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(uid): Path<String>,
) -> Result<Json<UserResponse>, ApiServiceError> {
    let usecase = GetUserUseCase {
        users: state.user_port(),
    };
    let user = usecase.execute(&uid).await?;
    Ok(Json(UserResponse {
        uid: user.uid,
        display_name: user.display_name,
        photo_url: user.photo_url,
    }))
}
