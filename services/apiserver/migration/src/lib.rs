use sea_orm_migration::prelude::*;

mod m20260101_000001_create_official_events;
mod m20260101_000002_create_decks;
mod m20260101_000003_create_records;
mod m20260101_000004_create_games;
mod m20260101_000005_create_battles;
mod m20260101_000006_add_lookup_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_official_events::Migration),
            Box::new(m20260101_000002_create_decks::Migration),
            Box::new(m20260101_000003_create_records::Migration),
            Box::new(m20260101_000004_create_games::Migration),
            Box::new(m20260101_000005_create_battles::Migration),
            Box::new(m20260101_000006_add_lookup_indexes::Migration),
        ]
    }
}
