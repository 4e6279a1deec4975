use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OfficialEvents::Table)
                    .if_not_exists()
                    // Ids come from the import job, never generated here.
                    .col(
                        ColumnDef::new(OfficialEvents::Id)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(OfficialEvents::Title).text().not_null())
                    .col(ColumnDef::new(OfficialEvents::Address).text().not_null())
                    .col(ColumnDef::new(OfficialEvents::Venue).text().not_null())
                    .col(
                        ColumnDef::new(OfficialEvents::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OfficialEvents::StartedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(OfficialEvents::EndedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(OfficialEvents::TypeId).integer().not_null())
                    .col(
                        ColumnDef::new(OfficialEvents::CspFlg)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(OfficialEvents::LeagueTitle).text().not_null())
                    .col(
                        ColumnDef::new(OfficialEvents::RegulationTitle)
                            .text()
                            .not_null(),
                    )
                    .col(ColumnDef::new(OfficialEvents::Capacity).integer().not_null())
                    .col(ColumnDef::new(OfficialEvents::ShopId).integer().not_null())
                    .col(ColumnDef::new(OfficialEvents::ShopName).text().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(OfficialEvents::Table)
                    .col(OfficialEvents::Date)
                    .name("idx_official_events_date")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OfficialEvents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum OfficialEvents {
    Table,
    Id,
    Title,
    Address,
    Venue,
    Date,
    StartedAt,
    EndedAt,
    TypeId,
    CspFlg,
    LeagueTitle,
    RegulationTitle,
    Capacity,
    ShopId,
    ShopName,
}
