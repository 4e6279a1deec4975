use chrono::Utc;

use vsr_domain::id::IdGenerator;
use vsr_domain::pagination::PageRequest;

use crate::domain::repository::{DeckRepository, OfficialEventRepository, RecordRepository};
use crate::domain::types::Record;
use crate::error::ApiServiceError;
use crate::usecase::ensure_owner;

pub struct RecordInput {
    pub official_event_id: u32,
    pub deck_id: String,
}

async fn ensure_official_event<E: OfficialEventRepository>(
    events: &E,
    id: u32,
) -> Result<(), ApiServiceError> {
    events
        .find_by_id(id)
        .await?
        .map(|_| ())
        .ok_or(ApiServiceError::OfficialEventNotFound)
}

// ── GetRecords (paginated) ───────────────────────────────────────────────────

pub struct GetRecordsUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> GetRecordsUseCase<R> {
    /// An authenticated caller sees their own records, anyone else sees all.
    pub async fn execute(
        &self,
        requester: Option<&str>,
        page: PageRequest,
    ) -> Result<Vec<Record>, ApiServiceError> {
        match requester {
            Some(user_id) => self.repo.find_by_user(user_id, page).await,
            None => self.repo.find(page).await,
        }
    }
}

// ── GetRecord ────────────────────────────────────────────────────────────────

pub struct GetRecordUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> GetRecordUseCase<R> {
    pub async fn execute(&self, id: &str) -> Result<Record, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::RecordNotFound)
    }
}

// ── GetUserRecords ───────────────────────────────────────────────────────────

pub struct GetUserRecordsUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> GetUserRecordsUseCase<R> {
    pub async fn execute(&self, user_id: &str) -> Result<Vec<Record>, ApiServiceError> {
        self.repo.find_all_by_user(user_id).await
    }
}

// ── GetDeckRecords ───────────────────────────────────────────────────────────

pub struct GetDeckRecordsUseCase<R: RecordRepository, D: DeckRepository> {
    pub repo: R,
    pub decks: D,
}

impl<R: RecordRepository, D: DeckRepository> GetDeckRecordsUseCase<R, D> {
    pub async fn execute(&self, deck_id: &str) -> Result<Vec<Record>, ApiServiceError> {
        if self.decks.find_by_id(deck_id).await?.is_none() {
            return Err(ApiServiceError::DeckNotFound);
        }
        self.repo.find_by_deck_id(deck_id).await
    }
}

// ── GetOfficialEventRecords ──────────────────────────────────────────────────

pub struct GetOfficialEventRecordsUseCase<R: RecordRepository, E: OfficialEventRepository> {
    pub repo: R,
    pub events: E,
}

impl<R: RecordRepository, E: OfficialEventRepository> GetOfficialEventRecordsUseCase<R, E> {
    pub async fn execute(&self, official_event_id: u32) -> Result<Vec<Record>, ApiServiceError> {
        ensure_official_event(&self.events, official_event_id).await?;
        self.repo.find_by_official_event_id(official_event_id).await
    }
}

// ── CreateRecord ─────────────────────────────────────────────────────────────

pub struct CreateRecordUseCase<R: RecordRepository, E: OfficialEventRepository, G: IdGenerator> {
    pub repo: R,
    pub events: E,
    pub ids: G,
}

impl<R: RecordRepository, E: OfficialEventRepository, G: IdGenerator> CreateRecordUseCase<R, E, G> {
    pub async fn execute(
        &self,
        user_id: &str,
        input: RecordInput,
    ) -> Result<Record, ApiServiceError> {
        ensure_official_event(&self.events, input.official_event_id).await?;

        let now = Utc::now();
        let record = Record {
            id: self.ids.generate(),
            created_at: now,
            updated_at: now,
            official_event_id: input.official_event_id,
            user_id: user_id.to_string(),
            deck_id: input.deck_id,
        };
        self.repo.save(&record).await?;
        Ok(record)
    }
}

// ── UpdateRecord ─────────────────────────────────────────────────────────────

pub struct UpdateRecordUseCase<R: RecordRepository, E: OfficialEventRepository> {
    pub repo: R,
    pub events: E,
}

impl<R: RecordRepository, E: OfficialEventRepository> UpdateRecordUseCase<R, E> {
    pub async fn execute(
        &self,
        id: &str,
        user_id: &str,
        input: RecordInput,
    ) -> Result<Record, ApiServiceError> {
        ensure_official_event(&self.events, input.official_event_id).await?;

        let mut record = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::RecordNotFound)?;
        ensure_owner(&record.user_id, user_id)?;

        record.official_event_id = input.official_event_id;
        record.deck_id = input.deck_id;
        record.updated_at = Utc::now();
        self.repo.save(&record).await?;
        Ok(record)
    }
}

// ── DeleteRecord ─────────────────────────────────────────────────────────────

pub struct DeleteRecordUseCase<R: RecordRepository> {
    pub repo: R,
}

impl<R: RecordRepository> DeleteRecordUseCase<R> {
    pub async fn execute(&self, id: &str, user_id: &str) -> Result<(), ApiServiceError> {
        let record = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::RecordNotFound)?;
        ensure_owner(&record.user_id, user_id)?;
        self.repo.delete(id, user_id).await?;
        Ok(())
    }
}
