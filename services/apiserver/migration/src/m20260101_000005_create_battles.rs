use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Battles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Battles::Id)
                            .string_len(26)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Battles::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Battles::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Battles::DeletedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Battles::GameId).text().not_null())
                    .col(ColumnDef::new(Battles::UserId).text().not_null())
                    .col(
                        ColumnDef::new(Battles::GoFirst)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Battles::VictoryFlg)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Battles::YourPrizeCards)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Battles::OpponentsPrizeCards)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Battles::Memo).text().not_null().default(""))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Battles::Table)
                    .col(Battles::DeletedAt)
                    .name("idx_battles_deleted_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Battles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Battles {
    Table,
    Id,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    GameId,
    UserId,
    GoFirst,
    VictoryFlg,
    YourPrizeCards,
    OpponentsPrizeCards,
    Memo,
}
