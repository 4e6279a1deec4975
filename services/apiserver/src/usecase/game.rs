use chrono::Utc;

use vsr_domain::id::IdGenerator;

use crate::domain::repository::{GameRepository, RecordRepository};
use crate::domain::types::Game;
use crate::error::ApiServiceError;
use crate::usecase::ensure_owner;

pub struct GameInput {
    pub record_id: String,
    pub opponents_user_id: String,
    pub bo3_flg: bool,
    pub qualifying_round_flg: bool,
    pub final_tournament_flg: bool,
    pub victory_flg: bool,
    pub opponents_deck_info: String,
    pub memo: String,
}

async fn ensure_record<R: RecordRepository>(records: &R, id: &str) -> Result<(), ApiServiceError> {
    records
        .find_by_id(id)
        .await?
        .map(|_| ())
        .ok_or(ApiServiceError::RecordNotFound)
}

// ── GetGame ──────────────────────────────────────────────────────────────────

pub struct GetGameUseCase<G: GameRepository> {
    pub repo: G,
}

impl<G: GameRepository> GetGameUseCase<G> {
    pub async fn execute(&self, id: &str) -> Result<Game, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::GameNotFound)
    }
}

// ── GetUserGames ─────────────────────────────────────────────────────────────

pub struct GetUserGamesUseCase<G: GameRepository> {
    pub repo: G,
}

impl<G: GameRepository> GetUserGamesUseCase<G> {
    pub async fn execute(&self, user_id: &str) -> Result<Vec<Game>, ApiServiceError> {
        self.repo.find_all_by_user(user_id).await
    }
}

// ── GetRecordGames ───────────────────────────────────────────────────────────

pub struct GetRecordGamesUseCase<G: GameRepository, R: RecordRepository> {
    pub repo: G,
    pub records: R,
}

impl<G: GameRepository, R: RecordRepository> GetRecordGamesUseCase<G, R> {
    pub async fn execute(&self, record_id: &str) -> Result<Vec<Game>, ApiServiceError> {
        ensure_record(&self.records, record_id).await?;
        self.repo.find_by_record_id(record_id).await
    }
}

// ── CreateGame ───────────────────────────────────────────────────────────────

pub struct CreateGameUseCase<G: GameRepository, R: RecordRepository, I: IdGenerator> {
    pub repo: G,
    pub records: R,
    pub ids: I,
}

impl<G: GameRepository, R: RecordRepository, I: IdGenerator> CreateGameUseCase<G, R, I> {
    pub async fn execute(&self, user_id: &str, input: GameInput) -> Result<Game, ApiServiceError> {
        ensure_record(&self.records, &input.record_id).await?;

        let now = Utc::now();
        let game = Game {
            id: self.ids.generate(),
            created_at: now,
            updated_at: now,
            record_id: input.record_id,
            user_id: user_id.to_string(),
            opponents_user_id: input.opponents_user_id,
            bo3_flg: input.bo3_flg,
            qualifying_round_flg: input.qualifying_round_flg,
            final_tournament_flg: input.final_tournament_flg,
            victory_flg: input.victory_flg,
            opponents_deck_info: input.opponents_deck_info,
            memo: input.memo,
        };
        self.repo.save(&game).await?;
        Ok(game)
    }
}

// ── UpdateGame ───────────────────────────────────────────────────────────────

pub struct UpdateGameUseCase<G: GameRepository, R: RecordRepository> {
    pub repo: G,
    pub records: R,
}

impl<G: GameRepository, R: RecordRepository> UpdateGameUseCase<G, R> {
    pub async fn execute(
        &self,
        id: &str,
        user_id: &str,
        input: GameInput,
    ) -> Result<Game, ApiServiceError> {
        ensure_record(&self.records, &input.record_id).await?;

        let mut game = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::GameNotFound)?;
        ensure_owner(&game.user_id, user_id)?;

        game.record_id = input.record_id;
        game.opponents_user_id = input.opponents_user_id;
        game.bo3_flg = input.bo3_flg;
        game.qualifying_round_flg = input.qualifying_round_flg;
        game.final_tournament_flg = input.final_tournament_flg;
        game.victory_flg = input.victory_flg;
        game.opponents_deck_info = input.opponents_deck_info;
        game.memo = input.memo;
        game.updated_at = Utc::now();
        self.repo.save(&game).await?;
        Ok(game)
    }
}

// ── DeleteGame ───────────────────────────────────────────────────────────────

pub struct DeleteGameUseCase<G: GameRepository> {
    pub repo: G,
}

impl<G: GameRepository> DeleteGameUseCase<G> {
    pub async fn execute(&self, id: &str, user_id: &str) -> Result<(), ApiServiceError> {
        let game = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::GameNotFound)?;
        ensure_owner(&game.user_id, user_id)?;
        self.repo.delete(id, user_id).await?;
        Ok(())
    }
}
