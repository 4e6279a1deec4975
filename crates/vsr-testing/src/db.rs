//! In-memory SQLite databases with a migrated schema.

use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

/// Connect to a fresh `sqlite::memory:` database and run every migration of `M`.
///
/// Panics on failure; test-only.
pub async fn sqlite_db<M: MigratorTrait>() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");
    M::up(&db, None).await.expect("failed to run migrations");
    db
}
