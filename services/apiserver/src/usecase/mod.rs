pub mod battle;
pub mod deck;
pub mod game;
pub mod official_event;
pub mod record;
pub mod user;

#[cfg(test)]
pub(crate) mod mock;

use crate::error::ApiServiceError;

/// Only the stored owner may mutate or delete an entity.
pub(crate) fn ensure_owner(owner: &str, caller: &str) -> Result<(), ApiServiceError> {
    if owner != caller {
        return Err(ApiServiceError::NoAuthority);
    }
    Ok(())
}
