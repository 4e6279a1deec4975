use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// (index name, table, column) for every owner / parent lookup.
const INDEXES: &[(&str, &str, &str)] = &[
    ("idx_decks_user_id", "decks", "user_id"),
    ("idx_records_user_id", "records", "user_id"),
    ("idx_records_deck_id", "records", "deck_id"),
    ("idx_records_official_event_id", "records", "official_event_id"),
    ("idx_games_user_id", "games", "user_id"),
    ("idx_games_record_id", "games", "record_id"),
    ("idx_battles_game_id", "battles", "game_id"),
];

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, column) in INDEXES {
            manager
                .create_index(
                    Index::create()
                        .table(Alias::new(*table))
                        .col(Alias::new(*column))
                        .name(*name)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for (name, table, _) in INDEXES.iter().rev() {
            manager
                .drop_index(
                    Index::drop()
                        .table(Alias::new(*table))
                        .name(*name)
                        .to_owned(),
                )
                .await?;
        }
        Ok(())
    }
}
