//! In-memory repositories for use case tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, TimeZone, Utc};

use vsr_domain::date::DateRange;
use vsr_domain::pagination::PageRequest;

use crate::domain::repository::{
    BattleRepository, DeckRepository, GameRepository, OfficialEventRepository, RecordRepository,
    UserPort,
};
use crate::domain::types::{Battle, Deck, Game, OfficialEvent, Record, User};
use crate::error::ApiServiceError;

pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
}

pub trait Row: Clone + Send {
    fn id(&self) -> &str;
    fn user_id(&self) -> &str;
}

macro_rules! impl_row {
    ($($ty:ty),*) => {
        $(impl Row for $ty {
            fn id(&self) -> &str {
                &self.id
            }
            fn user_id(&self) -> &str {
                &self.user_id
            }
        })*
    };
}

impl_row!(Deck, Record, Game, Battle);

/// Rows live in a shared vec so a test keeps a handle after moving the repo
/// into a use case. `deleted` records every `delete` call.
pub struct MockRepo<T> {
    pub rows: Arc<Mutex<Vec<T>>>,
    pub deleted: Arc<Mutex<Vec<(String, String)>>>,
}

impl<T: Row> MockRepo<T> {
    pub fn new(rows: Vec<T>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
            deleted: Arc::new(Mutex::new(vec![])),
        }
    }

    pub fn rows_handle(&self) -> Arc<Mutex<Vec<T>>> {
        self.rows.clone()
    }

    pub fn deleted_handle(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        self.deleted.clone()
    }

    fn by_id(&self, id: &str) -> Option<T> {
        self.rows.lock().unwrap().iter().find(|r| r.id() == id).cloned()
    }

    fn filtered(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| pred(r))
            .cloned()
            .collect()
    }

    fn upsert(&self, row: &T) {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|r| r.id() == row.id()) {
            Some(existing) => *existing = row.clone(),
            None => rows.push(row.clone()),
        }
    }

    fn remove(&self, id: &str, user_id: &str) -> u64 {
        self.deleted
            .lock()
            .unwrap()
            .push((id.to_string(), user_id.to_string()));
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| !(r.id() == id && r.user_id() == user_id));
        (before - rows.len()) as u64
    }
}

fn page_of<T>(rows: Vec<T>, page: PageRequest) -> Vec<T> {
    rows.into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

impl DeckRepository for MockRepo<Deck> {
    async fn find_by_id(&self, id: &str) -> Result<Option<Deck>, ApiServiceError> {
        Ok(self.by_id(id))
    }
    async fn find_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Deck>, ApiServiceError> {
        Ok(page_of(self.filtered(|d| d.user_id == user_id), page))
    }
    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Deck>, ApiServiceError> {
        Ok(self.filtered(|d| d.user_id == user_id))
    }
    async fn save(&self, deck: &Deck) -> Result<(), ApiServiceError> {
        self.upsert(deck);
        Ok(())
    }
    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError> {
        Ok(self.remove(id, user_id))
    }
}

impl RecordRepository for MockRepo<Record> {
    async fn find(&self, page: PageRequest) -> Result<Vec<Record>, ApiServiceError> {
        Ok(page_of(self.filtered(|_| true), page))
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Record>, ApiServiceError> {
        Ok(self.by_id(id))
    }
    async fn find_by_user(
        &self,
        user_id: &str,
        page: PageRequest,
    ) -> Result<Vec<Record>, ApiServiceError> {
        Ok(page_of(self.filtered(|r| r.user_id == user_id), page))
    }
    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Record>, ApiServiceError> {
        Ok(self.filtered(|r| r.user_id == user_id))
    }
    async fn find_by_deck_id(&self, deck_id: &str) -> Result<Vec<Record>, ApiServiceError> {
        Ok(self.filtered(|r| r.deck_id == deck_id))
    }
    async fn find_by_official_event_id(
        &self,
        official_event_id: u32,
    ) -> Result<Vec<Record>, ApiServiceError> {
        Ok(self.filtered(|r| r.official_event_id == official_event_id))
    }
    async fn save(&self, record: &Record) -> Result<(), ApiServiceError> {
        self.upsert(record);
        Ok(())
    }
    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError> {
        Ok(self.remove(id, user_id))
    }
}

impl GameRepository for MockRepo<Game> {
    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, ApiServiceError> {
        Ok(self.by_id(id))
    }
    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Game>, ApiServiceError> {
        Ok(self.filtered(|g| g.user_id == user_id))
    }
    async fn find_by_record_id(&self, record_id: &str) -> Result<Vec<Game>, ApiServiceError> {
        Ok(self.filtered(|g| g.record_id == record_id))
    }
    async fn save(&self, game: &Game) -> Result<(), ApiServiceError> {
        self.upsert(game);
        Ok(())
    }
    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError> {
        Ok(self.remove(id, user_id))
    }
}

impl BattleRepository for MockRepo<Battle> {
    async fn find_by_id(&self, id: &str) -> Result<Option<Battle>, ApiServiceError> {
        Ok(self.by_id(id))
    }
    async fn find_by_game_id(&self, game_id: &str) -> Result<Vec<Battle>, ApiServiceError> {
        Ok(self.filtered(|b| b.game_id == game_id))
    }
    async fn save(&self, battle: &Battle) -> Result<(), ApiServiceError> {
        self.upsert(battle);
        Ok(())
    }
    async fn delete(&self, id: &str, user_id: &str) -> Result<u64, ApiServiceError> {
        Ok(self.remove(id, user_id))
    }
}

pub struct MockOfficialEventRepo {
    pub events: Vec<OfficialEvent>,
}

impl OfficialEventRepository for MockOfficialEventRepo {
    async fn find(&self, page: PageRequest) -> Result<Vec<OfficialEvent>, ApiServiceError> {
        Ok(page_of(self.events.clone(), page))
    }
    async fn find_by_id(&self, id: u32) -> Result<Option<OfficialEvent>, ApiServiceError> {
        Ok(self.events.iter().find(|e| e.id == id).cloned())
    }
    async fn find_by_date(
        &self,
        range: &DateRange,
    ) -> Result<Vec<OfficialEvent>, ApiServiceError> {
        let (start, end) = (range.start_utc(), range.end_utc());
        Ok(self
            .events
            .iter()
            .filter(|e| e.date >= start && e.date <= end)
            .cloned()
            .collect())
    }
}

pub struct MockUserPort {
    pub users: Vec<User>,
}

impl UserPort for MockUserPort {
    async fn find_by_id(&self, uid: &str) -> Result<Option<User>, ApiServiceError> {
        Ok(self.users.iter().find(|u| u.uid == uid).cloned())
    }
}

pub fn deck(id: &str, owner: &str) -> Deck {
    Deck {
        id: id.into(),
        created_at: at(0),
        updated_at: at(0),
        user_id: owner.into(),
        name: format!("deck {id}"),
        code: "ggnnLg-abc123-QQPPnn".into(),
        private_code_flg: false,
    }
}

pub fn record(id: &str, owner: &str, official_event_id: u32) -> Record {
    Record {
        id: id.into(),
        created_at: at(0),
        updated_at: at(0),
        official_event_id,
        user_id: owner.into(),
        deck_id: "D1".into(),
    }
}

pub fn game(id: &str, owner: &str, record_id: &str) -> Game {
    Game {
        id: id.into(),
        created_at: at(0),
        updated_at: at(0),
        record_id: record_id.into(),
        user_id: owner.into(),
        opponents_user_id: String::new(),
        bo3_flg: false,
        qualifying_round_flg: true,
        final_tournament_flg: false,
        victory_flg: true,
        opponents_deck_info: "Lugia VSTAR".into(),
        memo: String::new(),
    }
}

pub fn battle(id: &str, owner: &str, game_id: &str) -> Battle {
    Battle {
        id: id.into(),
        created_at: at(0),
        updated_at: at(0),
        game_id: game_id.into(),
        user_id: owner.into(),
        go_first: true,
        victory_flg: true,
        your_prize_cards: 6,
        opponents_prize_cards: 3,
        memo: String::new(),
    }
}

pub fn official_event(id: u32, date: DateTime<Utc>) -> OfficialEvent {
    OfficialEvent {
        id,
        title: format!("City League {id}"),
        address: "Tokyo".into(),
        venue: "Hall A".into(),
        date,
        started_at: None,
        ended_at: None,
        type_id: 1,
        csp_flg: true,
        league_title: "Master".into(),
        regulation_title: "Standard".into(),
        capacity: 64,
        shop_id: 0,
        shop_name: String::new(),
    }
}
