use anyhow::Context as _;
use chrono::Utc;
use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, sea_query::Expr, sea_query::OnConflict,
};

use vsr_apiserver_schema::{battles, decks, games, official_events, records};
use vsr_domain::date::DateRange;
use vsr_domain::pagination::PageRequest;

use crate::domain::repository::{
    BattleRepository, DeckRepository, GameRepository, OfficialEventRepository, RecordRepository,
};
use crate::domain::types::{Battle, Deck, Game, OfficialEvent, Record};
use crate::error::ApiServiceError;

fn to_u32(value: i32) -> u32 {
    u32::try_from(value).unwrap_or_default()
}

fn to_i32(value: u32, what: &str) -> Result<i32, ApiServiceError> {
    Ok(i32::try_from(value).with_context(|| format!("{what} out of range: {value}"))?)
}

// ── Deck repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbDeckRepository {
    pub db: DatabaseConnection,
}

impl DeckRepository for DbDeckRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Deck>, ApiServiceError> {
        let model = decks::Entity::find_by_id(id.to_owned())
            .filter(decks::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .context("find deck by id")?;
        Ok(model.map(deck_from_model))
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Deck>, ApiServiceError> {
        let models = decks::Entity::find()
            .filter(decks::Column::UserId.eq(user_id))
            .filter(decks::Column::DeletedAt.is_null())
            .order_by_desc(decks::Column::CreatedAt)
            .order_by_desc(decks::Column::Id)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .context("list decks by user")?;
        Ok(models.into_iter().map(deck_from_model).collect())
    }

    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Deck>, ApiServiceError> {
        let models = decks::Entity::find()
            .filter(decks::Column::UserId.eq(user_id))
            .filter(decks::Column::DeletedAt.is_null())
            .order_by_desc(decks::Column::CreatedAt)
            .order_by_desc(decks::Column::Id)
            .all(&self.db)
            .await
            .context("list all decks by user")?;
        Ok(models.into_iter().map(deck_from_model).collect())
    }

    async fn save(&self, deck: &Deck) -> Result<(), ApiServiceError> {
        let am = decks::ActiveModel {
            id: Set(deck.id.clone()),
            created_at: Set(deck.created_at),
            updated_at: Set(deck.updated_at),
            user_id: Set(deck.user_id.clone()),
            name: Set(deck.name.clone()),
            code: Set(deck.code.clone()),
            private_code_flg: Set(deck.private_code_flg),
            ..Default::default()
        };
        decks::Entity::insert(am)
            .on_conflict(
                OnConflict::column(decks::Column::Id)
                    .update_columns([
                        decks::Column::UpdatedAt,
                        decks::Column::UserId,
                        decks::Column::Name,
                        decks::Column::Code,
                        decks::Column::PrivateCodeFlg,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert deck")?;
        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError> {
        let result = decks::Entity::update_many()
            .col_expr(decks::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(decks::Column::Id.eq(id))
            .filter(decks::Column::UserId.eq(user_id))
            .filter(decks::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .context("soft delete deck")?;
        Ok(result.rows_affected)
    }
}

fn deck_from_model(model: decks::Model) -> Deck {
    Deck {
        id: model.id,
        created_at: model.created_at,
        updated_at: model.updated_at,
        user_id: model.user_id,
        name: model.name,
        code: model.code,
        private_code_flg: model.private_code_flg,
    }
}

// ── Record repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRecordRepository {
    pub db: DatabaseConnection,
}

impl RecordRepository for DbRecordRepository {
    async fn find(&self, page: PageRequest) -> Result<Vec<Record>, ApiServiceError> {
        let models = records::Entity::find()
            .filter(records::Column::DeletedAt.is_null())
            .order_by_desc(records::Column::CreatedAt)
            .order_by_desc(records::Column::Id)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .context("list records")?;
        Ok(models.into_iter().map(record_from_model).collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Record>, ApiServiceError> {
        let model = records::Entity::find_by_id(id.to_owned())
            .filter(records::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .context("find record by id")?;
        Ok(model.map(record_from_model))
    }

    async fn find_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Record>, ApiServiceError> {
        let models = records::Entity::find()
            .filter(records::Column::UserId.eq(user_id))
            .filter(records::Column::DeletedAt.is_null())
            .order_by_desc(records::Column::CreatedAt)
            .order_by_desc(records::Column::Id)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .context("list records by user")?;
        Ok(models.into_iter().map(record_from_model).collect())
    }

    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Record>, ApiServiceError> {
        let models = records::Entity::find()
            .filter(records::Column::UserId.eq(user_id))
            .filter(records::Column::DeletedAt.is_null())
            .order_by_desc(records::Column::CreatedAt)
            .order_by_desc(records::Column::Id)
            .all(&self.db)
            .await
            .context("list all records by user")?;
        Ok(models.into_iter().map(record_from_model).collect())
    }

    async fn find_by_deck_id(&self, deck_id: &str) -> Result<Vec<Record>, ApiServiceError> {
        let models = records::Entity::find()
            .filter(records::Column::DeckId.eq(deck_id))
            .filter(records::Column::DeletedAt.is_null())
            .order_by_asc(records::Column::CreatedAt)
            .order_by_asc(records::Column::Id)
            .all(&self.db)
            .await
            .context("list records by deck")?;
        Ok(models.into_iter().map(record_from_model).collect())
    }

    async fn find_by_official_event_id(
        &self,
        official_event_id: u32,
    ) -> Result<Vec<Record>, ApiServiceError> {
        let Ok(official_event_id) = i32::try_from(official_event_id) else {
            return Ok(vec![]);
        };
        let models = records::Entity::find()
            .filter(records::Column::OfficialEventId.eq(official_event_id))
            .filter(records::Column::DeletedAt.is_null())
            .order_by_asc(records::Column::CreatedAt)
            .order_by_asc(records::Column::Id)
            .all(&self.db)
            .await
            .context("list records by official event")?;
        Ok(models.into_iter().map(record_from_model).collect())
    }

    async fn save(&self, record: &Record) -> Result<(), ApiServiceError> {
        let am = records::ActiveModel {
            id: Set(record.id.clone()),
            created_at: Set(record.created_at),
            updated_at: Set(record.updated_at),
            official_event_id: Set(to_i32(record.official_event_id, "official_event_id")?),
            user_id: Set(record.user_id.clone()),
            deck_id: Set(record.deck_id.clone()),
            ..Default::default()
        };
        records::Entity::insert(am)
            .on_conflict(
                OnConflict::column(records::Column::Id)
                    .update_columns([
                        records::Column::UpdatedAt,
                        records::Column::OfficialEventId,
                        records::Column::UserId,
                        records::Column::DeckId,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert record")?;
        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError> {
        let result = records::Entity::update_many()
            .col_expr(records::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(records::Column::Id.eq(id))
            .filter(records::Column::UserId.eq(user_id))
            .filter(records::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .context("soft delete record")?;
        Ok(result.rows_affected)
    }
}

fn record_from_model(model: records::Model) -> Record {
    Record {
        id: model.id,
        created_at: model.created_at,
        updated_at: model.updated_at,
        official_event_id: to_u32(model.official_event_id),
        user_id: model.user_id,
        deck_id: model.deck_id,
    }
}

// ── Game repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbGameRepository {
    pub db: DatabaseConnection,
}

impl GameRepository for DbGameRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, ApiServiceError> {
        let model = games::Entity::find_by_id(id.to_owned())
            .filter(games::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .context("find game by id")?;
        Ok(model.map(game_from_model))
    }

    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Game>, ApiServiceError> {
        let models = games::Entity::find()
            .filter(games::Column::UserId.eq(user_id))
            .filter(games::Column::DeletedAt.is_null())
            .order_by_desc(games::Column::CreatedAt)
            .order_by_desc(games::Column::Id)
            .all(&self.db)
            .await
            .context("list all games by user")?;
        Ok(models.into_iter().map(game_from_model).collect())
    }

    async fn find_by_record_id(&self, record_id: &str) -> Result<Vec<Game>, ApiServiceError> {
        let models = games::Entity::find()
            .filter(games::Column::RecordId.eq(record_id))
            .filter(games::Column::DeletedAt.is_null())
            .order_by_asc(games::Column::CreatedAt)
            .order_by_asc(games::Column::Id)
            .all(&self.db)
            .await
            .context("list games by record")?;
        Ok(models.into_iter().map(game_from_model).collect())
    }

    async fn save(&self, game: &Game) -> Result<(), ApiServiceError> {
        let am = games::ActiveModel {
            id: Set(game.id.clone()),
            created_at: Set(game.created_at),
            updated_at: Set(game.updated_at),
            record_id: Set(game.record_id.clone()),
            user_id: Set(game.user_id.clone()),
            opponents_user_id: Set(game.opponents_user_id.clone()),
            bo3_flg: Set(game.bo3_flg),
            qualifying_round_flg: Set(game.qualifying_round_flg),
            final_tournament_flg: Set(game.final_tournament_flg),
            victory_flg: Set(game.victory_flg),
            opponents_deck_info: Set(game.opponents_deck_info.clone()),
            memo: Set(game.memo.clone()),
            ..Default::default()
        };
        games::Entity::insert(am)
            .on_conflict(
                OnConflict::column(games::Column::Id)
                    .update_columns([
                        games::Column::UpdatedAt,
                        games::Column::RecordId,
                        games::Column::UserId,
                        games::Column::OpponentsUserId,
                        games::Column::Bo3Flg,
                        games::Column::QualifyingRoundFlg,
                        games::Column::FinalTournamentFlg,
                        games::Column::VictoryFlg,
                        games::Column::OpponentsDeckInfo,
                        games::Column::Memo,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert game")?;
        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError> {
        let result = games::Entity::update_many()
            .col_expr(games::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(games::Column::Id.eq(id))
            .filter(games::Column::UserId.eq(user_id))
            .filter(games::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .context("soft delete game")?;
        Ok(result.rows_affected)
    }
}

fn game_from_model(model: games::Model) -> Game {
    Game {
        id: model.id,
        created_at: model.created_at,
        updated_at: model.updated_at,
        record_id: model.record_id,
        user_id: model.user_id,
        opponents_user_id: model.opponents_user_id,
        bo3_flg: model.bo3_flg,
        qualifying_round_flg: model.qualifying_round_flg,
        final_tournament_flg: model.final_tournament_flg,
        victory_flg: model.victory_flg,
        opponents_deck_info: model.opponents_deck_info,
        memo: model.memo,
    }
}

// ── Battle repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbBattleRepository {
    pub db: DatabaseConnection,
}

impl BattleRepository for DbBattleRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<Battle>, ApiServiceError> {
        let model = battles::Entity::find_by_id(id.to_owned())
            .filter(battles::Column::DeletedAt.is_null())
            .one(&self.db)
            .await
            .context("find battle by id")?;
        Ok(model.map(battle_from_model))
    }

    async fn find_by_game_id(&self, game_id: &str) -> Result<Vec<Battle>, ApiServiceError> {
        let models = battles::Entity::find()
            .filter(battles::Column::GameId.eq(game_id))
            .filter(battles::Column::DeletedAt.is_null())
            .order_by_asc(battles::Column::CreatedAt)
            .order_by_asc(battles::Column::Id)
            .all(&self.db)
            .await
            .context("list battles by game")?;
        Ok(models.into_iter().map(battle_from_model).collect())
    }

    async fn save(&self, battle: &Battle) -> Result<(), ApiServiceError> {
        let am = battles::ActiveModel {
            id: Set(battle.id.clone()),
            created_at: Set(battle.created_at),
            updated_at: Set(battle.updated_at),
            game_id: Set(battle.game_id.clone()),
            user_id: Set(battle.user_id.clone()),
            go_first: Set(battle.go_first),
            victory_flg: Set(battle.victory_flg),
            your_prize_cards: Set(to_i32(battle.your_prize_cards, "your_prize_cards")?),
            opponents_prize_cards: Set(to_i32(
                battle.opponents_prize_cards,
                "opponents_prize_cards",
            )?),
            memo: Set(battle.memo.clone()),
            ..Default::default()
        };
        battles::Entity::insert(am)
            .on_conflict(
                OnConflict::column(battles::Column::Id)
                    .update_columns([
                        battles::Column::UpdatedAt,
                        battles::Column::GameId,
                        battles::Column::UserId,
                        battles::Column::GoFirst,
                        battles::Column::VictoryFlg,
                        battles::Column::YourPrizeCards,
                        battles::Column::OpponentsPrizeCards,
                        battles::Column::Memo,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .context("upsert battle")?;
        Ok(())
    }

    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError> {
        let result = battles::Entity::update_many()
            .col_expr(battles::Column::DeletedAt, Expr::value(Utc::now()))
            .filter(battles::Column::Id.eq(id))
            .filter(battles::Column::UserId.eq(user_id))
            .filter(battles::Column::DeletedAt.is_null())
            .exec(&self.db)
            .await
            .context("soft delete battle")?;
        Ok(result.rows_affected)
    }
}

fn battle_from_model(model: battles::Model) -> Battle {
    Battle {
        id: model.id,
        created_at: model.created_at,
        updated_at: model.updated_at,
        game_id: model.game_id,
        user_id: model.user_id,
        go_first: model.go_first,
        victory_flg: model.victory_flg,
        your_prize_cards: to_u32(model.your_prize_cards),
        opponents_prize_cards: to_u32(model.opponents_prize_cards),
        memo: model.memo,
    }
}

// ── Official event repository ────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOfficialEventRepository {
    pub db: DatabaseConnection,
}

impl OfficialEventRepository for DbOfficialEventRepository {
    async fn find(&self, page: PageRequest) -> Result<Vec<OfficialEvent>, ApiServiceError> {
        let models = official_events::Entity::find()
            .order_by_asc(official_events::Column::Date)
            .order_by_asc(official_events::Column::Id)
            .limit(page.limit())
            .offset(page.offset())
            .all(&self.db)
            .await
            .context("list official events")?;
        Ok(models.into_iter().map(official_event_from_model).collect())
    }

    async fn find_by_id(&self, id: u32) -> Result<Option<OfficialEvent>, ApiServiceError> {
        let Ok(id) = i32::try_from(id) else {
            return Ok(None);
        };
        let model = official_events::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find official event by id")?;
        Ok(model.map(official_event_from_model))
    }

    async fn find_by_date(
        &self,
        range: &DateRange,
    ) -> Result<Vec<OfficialEvent>, ApiServiceError> {
        let models = official_events::Entity::find()
            .filter(official_events::Column::Date.between(range.start_utc(), range.end_utc()))
            .order_by_asc(official_events::Column::Date)
            .order_by_asc(official_events::Column::Id)
            .all(&self.db)
            .await
            .context("list official events by date")?;
        Ok(models.into_iter().map(official_event_from_model).collect())
    }
}

fn official_event_from_model(model: official_events::Model) -> OfficialEvent {
    OfficialEvent {
        id: to_u32(model.id),
        title: model.title,
        address: model.address,
        venue: model.venue,
        date: model.date,
        started_at: model.started_at,
        ended_at: model.ended_at,
        type_id: model.type_id,
        csp_flg: model.csp_flg,
        league_title: model.league_title,
        regulation_title: model.regulation_title,
        capacity: model.capacity,
        shop_id: model.shop_id,
        shop_name: model.shop_name,
    }
}
