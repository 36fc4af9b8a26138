#![cfg(test)]
use sea_orm::DatabaseConnection;
use models::db::{connect_with_config, ensure_schema, DatabaseConfig};

/// Fresh in-memory SQLite database with the product table created.
/// Each call yields an isolated store.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let cfg = DatabaseConfig::sqlite_in_memory();
    let db = connect_with_config(&cfg).await?;
    ensure_schema(&db).await?;
    Ok(db)
}
