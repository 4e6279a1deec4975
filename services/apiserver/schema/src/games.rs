use sea_orm::entity::prelude::*;

/// One match (best-of-one or best-of-three) within a record.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "games")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
    pub deleted_at: Option<chrono::DateTime<chrono::Utc>>,
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

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::records::Entity",
        from = "Column::RecordId",
        to = "super::records::Column::Id"
    )]
    Record,
    #[sea_orm(has_many = "super::battles::Entity")]
    Battles,
}

impl Related<super::records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Record.def()
    }
}

impl Related<super::battles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Battles.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
