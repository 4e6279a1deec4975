use chrono::Utc;

use vsr_domain::id::IdGenerator;
use vsr_domain::pagination::PageRequest;

use crate::domain::repository::DeckRepository;
use crate::domain::types::Deck;
use crate::error::ApiServiceError;
use crate::usecase::ensure_owner;

/// Caller-supplied deck fields, shared by create and update.
pub struct DeckInput {
    pub name: String,
    pub code: String,
    pub private_code_flg: bool,
}

// ── GetDeck ──────────────────────────────────────────────────────────────────

pub struct GetDeckUseCase<R: DeckRepository> {
    pub repo: R,
}

impl<R: DeckRepository> GetDeckUseCase<R> {
    pub async fn execute(
        &self,
        id: &str,
        requester: Option<&str>,
    ) -> Result<Deck, ApiServiceError> {
        let deck = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::DeckNotFound)?;
        Ok(deck.masked_for(requester))
    }
}

// ── GetMyDecks (paginated) ───────────────────────────────────────────────────

pub struct GetMyDecksUseCase<R: DeckRepository> {
    pub repo: R,
}

impl<R: DeckRepository> GetMyDecksUseCase<R> {
    /// The caller owns every deck returned, so nothing is masked.
    pub async fn execute(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Deck>, ApiServiceError> {
        self.repo.find_by_user(user_id, page).await
    }
}

// ── GetUserDecks ─────────────────────────────────────────────────────────────

pub struct GetUserDecksUseCase<R: DeckRepository> {
    pub repo: R,
}

impl<R: DeckRepository> GetUserDecksUseCase<R> {
    pub async fn execute(
        &self,
        user_id: &str,
        requester: Option<&str>,
    ) -> Result<Vec<Deck>, ApiServiceError> {
        let decks = self.repo.find_all_by_user(user_id).await?;
        Ok(decks
            .into_iter()
            .map(|deck| deck.masked_for(requester))
            .collect())
    }
}

// ── CreateDeck ───────────────────────────────────────────────────────────────

pub struct CreateDeckUseCase<R: DeckRepository, G: IdGenerator> {
    pub repo: R,
    pub ids: G,
}

impl<R: DeckRepository, G: IdGenerator> CreateDeckUseCase<R, G> {
    pub async fn execute(&self, user_id: &str, input: DeckInput) -> Result<Deck, ApiServiceError> {
        let now = Utc::now();
        let deck = Deck {
            id: self.ids.generate(),
            created_at: now,
            updated_at: now,
            user_id: user_id.to_string(),
            name: input.name,
            code: input.code,
            private_code_flg: input.private_code_flg,
        };
        self.repo.save(&deck).await?;
        Ok(deck)
    }
}

// ── UpdateDeck ───────────────────────────────────────────────────────────────

pub struct UpdateDeckUseCase<R: DeckRepository> {
    pub repo: R,
}

impl<R: DeckRepository> UpdateDeckUseCase<R> {
    pub async fn execute(
        &self,
        id: &str,
        user_id: &str,
        input: DeckInput,
    ) -> Result<Deck, ApiServiceError> {
        let mut deck = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::DeckNotFound)?;
        ensure_owner(&deck.user_id, user_id)?;

        deck.name = input.name;
        deck.code = input.code;
        deck.private_code_flg = input.private_code_flg;
        deck.updated_at = Utc::now();
        self.repo.save(&deck).await?;
        Ok(deck)
    }
}

// ── DeleteDeck ───────────────────────────────────────────────────────────────

pub struct DeleteDeckUseCase<R: DeckRepository> {
    pub repo: R,
}

impl<R: DeckRepository> DeleteDeckUseCase<R> {
    pub async fn execute(&self, id: &str, user_id: &str) -> Result<(), ApiServiceError> {
        let deck = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::DeckNotFound)?;
        ensure_owner(&deck.user_id, user_id)?;
        self.repo.delete(id, user_id).await?;
        Ok(())
    }
}
