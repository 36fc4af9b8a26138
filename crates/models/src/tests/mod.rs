
/// CRUD operations against the product table
pub mod crud_tests;

use anyhow::Result;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, ensure_schema, DatabaseConfig};

/// Fresh in-memory database with the product table in place.
pub(crate) async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::sqlite_in_memory()).await?;
    ensure_schema(&db).await?;
    Ok(db)
}
