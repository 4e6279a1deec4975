use sea_orm_migration::prelude::*;

use vsr_apiserver_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
