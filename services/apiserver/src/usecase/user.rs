use crate::domain::repository::UserPort;
use crate::domain::types::User;
use crate::error::ApiServiceError;

// ── GetUser ──────────────────────────────────────────────────────────────────

pub struct GetUserUseCase<P: UserPort> {
    pub users: P,
}

impl<P: UserPort> GetUserUseCase<P> {
    pub async fn execute(&self, uid: &str) -> Result<User, ApiServiceError> {
        self.users
            .find_by_id(uid)
            .await?
            .ok_or(ApiServiceError::UserNotFound)
    }
}
