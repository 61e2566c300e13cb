#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// Fresh in-memory database with every migration applied.
/// Each test gets its own, so tests never see each other's rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::with_url("sqlite::memory:")).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
