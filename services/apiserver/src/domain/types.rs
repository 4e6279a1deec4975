use chrono::{DateTime, Utc};

/// Replacement shown for a private deck code to anyone but its owner.
pub const MASKED_DECK_CODE: &str = "ZZZZZZ-YYYYYY-ZZZZZZ";

/// Player profile held by the identity provider. Never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub uid: String,
    pub display_name: String,
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user_id: String,
    pub name: String,
    pub code: String,
    pub private_code_flg: bool,
}

impl Deck {
    /// Mask `code` when the deck is private and `requester` is not its owner.
    /// An anonymous requester (`None`) never owns a deck.
    pub fn masked_for(mut self, requester: Option<&str>) -> Self {
        if self.private_code_flg && requester != Some(self.user_id.as_str()) {
            self.code = MASKED_DECK_CODE.to_string();
        }
        self
    }
}

/// A user's entry in one official event, played with one deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub official_event_id: u32,
    pub user_id: String,
    pub deck_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub record_id: String,
    pub user_id: String,
    pub opponents_user_id: String,
    pub bo3_flg: bool,
    pub qualifying_round_flg: bool,
    pub final_tournament_flg: bool,
    pub victory_flg: bool,
    pub opponents_deck_info: String,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Battle {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub game_id: String,
    pub user_id: String,
    pub go_first: bool,
    pub victory_flg: bool,
    pub your_prize_cards: u32,
    pub opponents_prize_cards: u32,
    pub memo: String,
}

/// Read-only event imported by an external job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficialEvent {
    pub id: u32,
    pub title: String,
    pub address: String,
    pub venue: String,
    pub date: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub type_id: i32,
    pub csp_flg: bool,
    pub league_title: String,
    pub regulation_title: String,
    pub capacity: i32,
    pub shop_id: i32,
    pub shop_name: String,
}

/// Parse an official event path id: a positive integer.
pub fn parse_official_event_id(raw: &str) -> Option<u32> {
    raw.parse::<u32>().ok().filter(|id| *id > 0)
}
