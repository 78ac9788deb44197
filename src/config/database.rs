//! Database configuration module for the store.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{Order, Phone};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Establishes a connection to the `SQLite` database at the configured URL.
///
/// # Errors
/// Returns an error if the connection cannot be established.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates the store tables using `SeaORM`'s schema generation from entity definitions.
///
/// Statements carry `IF NOT EXISTS`, so this is safe to run on every startup
/// against an already-initialized database.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut phone_table = schema.create_table_from_entity(Phone);
    phone_table.if_not_exists();
    let mut order_table = schema.create_table_from_entity(Order);
    order_table.if_not_exists();

    db.execute(builder.build(&phone_table)).await?;
    db.execute(builder.build(&order_table)).await?;

    Ok(())
}
