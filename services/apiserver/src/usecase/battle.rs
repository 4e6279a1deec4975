use chrono::Utc;

use vsr_domain::id::IdGenerator;

use crate::domain::repository::{BattleRepository, GameRepository};
use crate::domain::types::Battle;
use crate::error::ApiServiceError;
use crate::usecase::ensure_owner;

pub struct BattleInput {
    pub game_id: String,
    pub go_first: bool,
    pub victory_flg: bool,
    pub your_prize_cards: u32,
    pub opponents_prize_cards: u32,
    pub memo: String,
}

async fn ensure_game<G: GameRepository>(games: &G, id: &str) -> Result<(), ApiServiceError> {
    games
        .find_by_id(id)
        .await?
        .map(|_| ())
        .ok_or(ApiServiceError::GameNotFound)
}

// ── GetBattle ────────────────────────────────────────────────────────────────

pub struct GetBattleUseCase<B: BattleRepository> {
    pub repo: B,
}

impl<B: BattleRepository> GetBattleUseCase<B> {
    pub async fn execute(&self, id: &str) -> Result<Battle, ApiServiceError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::BattleNotFound)
    }
}

// ── GetGameBattles ───────────────────────────────────────────────────────────

pub struct GetGameBattlesUseCase<B: BattleRepository, G: GameRepository> {
    pub repo: B,
    pub games: G,
}

impl<B: BattleRepository, G: GameRepository> GetGameBattlesUseCase<B, G> {
    pub async fn execute(&self, game_id: &str) -> Result<Vec<Battle>, ApiServiceError> {
        ensure_game(&self.games, game_id).await?;
        self.repo.find_by_game_id(game_id).await
    }
}

// ── CreateBattle ─────────────────────────────────────────────────────────────

pub struct CreateBattleUseCase<B: BattleRepository, G: GameRepository, I: IdGenerator> {
    pub repo: B,
    pub games: G,
    pub ids: I,
}

impl<B: BattleRepository, G: GameRepository, I: IdGenerator> CreateBattleUseCase<B, G, I> {
    pub async fn execute(
        &self,
        user_id: &str,
        input: BattleInput,
    ) -> Result<Battle, ApiServiceError> {
        ensure_game(&self.games, &input.game_id).await?;

        let now = Utc::now();
        let battle = Battle {
            id: self.ids.generate(),
            created_at: now,
            updated_at: now,
            game_id: input.game_id,
            user_id: user_id.to_string(),
            go_first: input.go_first,
            victory_flg: input.victory_flg,
            your_prize_cards: input.your_prize_cards,
            opponents_prize_cards: input.opponents_prize_cards,
            memo: input.memo,
        };
        self.repo.save(&battle).await?;
        Ok(battle)
    }
}

// ── UpdateBattle ─────────────────────────────────────────────────────────────

pub struct UpdateBattleUseCase<B: BattleRepository, G: GameRepository> {
    pub repo: B,
    pub games: G,
}

impl<B: BattleRepository, G: GameRepository> UpdateBattleUseCase<B, G> {
    pub async fn execute(
        &self,
        id: &str,
        user_id: &str,
        input: BattleInput,
    ) -> Result<Battle, ApiServiceError> {
        ensure_game(&self.games, &input.game_id).await?;

        let mut battle = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::BattleNotFound)?;
        ensure_owner(&battle.user_id, user_id)?;

        battle.game_id = input.game_id;
        battle.go_first = input.go_first;
        battle.victory_flg = input.victory_flg;
        battle.your_prize_cards = input.your_prize_cards;
        battle.opponents_prize_cards = input.opponents_prize_cards;
        battle.memo = input.memo;
        battle.updated_at = Utc::now();
        self.repo.save(&battle).await?;
        Ok(battle)
    }
}

// ── DeleteBattle ─────────────────────────────────────────────────────────────

pub struct DeleteBattleUseCase<B: BattleRepository> {
    pub repo: B,
}

impl<B: BattleRepository> DeleteBattleUseCase<B> {
    pub async fn execute(&self, id: &str, user_id: &str) -> Result<(), ApiServiceError> {
        let battle = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(ApiServiceError::BattleNotFound)?;
        ensure_owner(&battle.user_id, user_id)?;
        self.repo.delete(id, user_id).await?;
        Ok(())
    }
}
