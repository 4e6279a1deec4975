#![allow(async_fn_in_trait)]

use vsr_domain::date::DateRange;
use vsr_domain::pagination::PageRequest;

use crate::domain::types::{Battle, Deck, Game, OfficialEvent, Record, User};
use crate::error::ApiServiceError;

// Every read excludes soft-deleted rows. `save` upserts by id. `delete`
// soft-deletes rows matching both id and owner and returns the affected count;
// an owner mismatch affects zero rows and is not an error.

/// Repository for decks.
pub trait DeckRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Deck>, ApiServiceError>;
    /// One page of a user's decks, newest first.
    async fn find_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Deck>, ApiServiceError>;
    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Deck>, ApiServiceError>;
    async fn save(&self, deck: &Deck) -> Result<(), ApiServiceError>;
    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError>;
}

/// Repository for records.
pub trait RecordRepository: Send + Sync {
    /// One page of every user's records, newest first.
    async fn find(&self, page: PageRequest) -> Result<Vec<Record>, ApiServiceError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Record>, ApiServiceError>;
    async fn find_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Record>, ApiServiceError>;
    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Record>, ApiServiceError>;
    async fn find_by_deck_id(&self, deck_id: &str) -> Result<Vec<Record>, ApiServiceError>;
    async fn find_by_official_event_id(
        &self,
        official_event_id: u32,
    ) -> Result<Vec<Record>, ApiServiceError>;
    async fn save(&self, record: &Record) -> Result<(), ApiServiceError>;
    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError>;
}

/// Repository for games.
pub trait GameRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, ApiServiceError>;
    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Game>, ApiServiceError>;
    async fn find_by_record_id(&self, record_id: &str) -> Result<Vec<Game>, ApiServiceError>;
    async fn save(&self, game: &Game) -> Result<(), ApiServiceError>;
    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError>;
}

/// Repository for battles.
pub trait BattleRepository: Send + Sync {
    async fn find_by_id(&self, id: &str) -> Result<Option<Battle>, ApiServiceError>;
    async fn find_by_game_id(&self, game_id: &str) -> Result<Vec<Battle>, ApiServiceError>;
    async fn save(&self, battle: &Battle) -> Result<(), ApiServiceError>;
    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError>;
}

/// Read-only repository for official events.
pub trait OfficialEventRepository: Send + Sync {
    async fn find(&self, page: PageRequest) -> Result<Vec<OfficialEvent>, ApiServiceError>;
    async fn find_by_id(&self, id: u32) -> Result<Option<OfficialEvent>, ApiServiceError>;
    /// Events whose `date` lies within the range, bounds inclusive.
    async fn find_by_date(
        &self,
        range: &DateRange,
    ) -> Result<Vec<OfficialEvent>, ApiServiceError>;
}

/// Port for looking up user profiles at the identity provider.
pub trait UserPort: Send + Sync {
    async fn find_by_id(&self, uid: &str) -> Result<Option<User>, ApiServiceError>;
}
