use sea_orm::entity::prelude::*;

/// A user's participation in one official event with one deck.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "records")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub official_event_id: i32,
    pub user_id: String,
    pub deck_id: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::official_events::Entity",
        from = "Column::OfficialEventId",
        to = "super::official_events::Column::Id"
    )]
    OfficialEvent,
    #[sea_orm(
        belongs_to = "super::decks::Entity",
        from = "Column::DeckId",
        to = "super::decks::Column::Id"
    )]
    Deck,
    #[sea_orm(has_many = "super::games::Entity")]
    Games,
}

impl Related<super::official_events::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OfficialEvent.def()
    }
}

impl Related<super::decks::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Deck.def()
    }
}

impl Related<super::games::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Games.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
