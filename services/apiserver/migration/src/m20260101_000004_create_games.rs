use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Games::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Games::Id)
                            .string_len(26)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Games::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Games::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Games::DeletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Games::RecordId).text().not_null())
                    .col(ColumnDef::new(Games::UserId).text().not_null())
                    .col(
                        ColumnDef::new(Games::OpponentsUserId)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Games::Bo3Flg).boolean().not_null().default(false))
                    .col(
                        ColumnDef::new(Games::QualifyingRoundFlg)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::FinalTournamentFlg)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::VictoryFlg)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Games::OpponentsDeckInfo)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Games::Memo).text().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Games::Table)
                    .col(Games::DeletedAt)
                    .name("idx_games_deleted_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Games::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Games {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    RecordId,
    UserId,
    OpponentsUserId,
    Bo3Flg,
    QualifyingRoundFlg,
    FinalTournamentFlg,
    VictoryFlg,
    OpponentsDeckInfo,
    Memo,
}
