use vsr_domain::date::DateRange;
use vsr_domain::pagination::PageRequest;

use crate::domain::repository::OfficialEventRepository;
use crate::domain::types::OfficialEvent;
use crate::error::ApiServiceError;

// ── GetOfficialEvent ─────────────────────────────────────────────────────────

pub struct GetOfficialEventUseCase<E: OfficialEventRepository> {
    pub repo: E,
}

impl<E: OfficialEventRepository> GetOfficialEventUseCase<E> {
    pub async fn execute(&self, id: u32) -> Result<OfficialEvent, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::OfficialEventNotFound)
    }
}

// ── GetOfficialEvents (paginated) ────────────────────────────────────────────

pub struct GetOfficialEventsUseCase<E: OfficialEventRepository> {
    pub repo: E,
}

impl<E: OfficialEventRepository> GetOfficialEventsUseCase<E> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<OfficialEvent>, ApiServiceError> {
        self.repo.find(page).await
    }
}

// ── GetOfficialEvents (date range) ───────────────────────────────────────────

pub struct GetOfficialEventsByDateUseCase<E: OfficialEventRepository> {
    pub repo: E,
}

impl<E: OfficialEventRepository> GetOfficialEventsByDateUseCase<E> {
    pub async fn execute(&self, range: &DateRange) -> Result<Vec<OfficialEvent>, ApiServiceError> {
        self.repo.find_by_date(range).await
    }
}
