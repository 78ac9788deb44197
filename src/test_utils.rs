//! Shared test utilities for the store.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{core::catalog, entities, errors::Result};
use sea_orm::DatabaseConnection;

/// Cart token used by tests that only need one cart.
pub const TEST_CART: &str = "test-cart";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test phone with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `name` - Listing name
///
/// # Defaults
/// * `brand`: "Acme"
/// * `price`: 10.0
/// * `condition`: "new"
/// * `image`: "phone.png"
pub async fn create_test_phone(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::phone::Model> {
    catalog::create_phone(
        db,
        name.to_string(),
        "Acme".to_string(),
        10.0,
        "new".to_string(),
        "phone.png".to_string(),
    )
    .await
}

/// Creates a test phone with custom parameters.
/// Use this when you need to test specific listing configurations.
pub async fn create_custom_phone(
    db: &DatabaseConnection,
    name: &str,
    brand: &str,
    price: f64,
    condition: &str,
    image: &str,
) -> Result<entities::phone::Model> {
    catalog::create_phone(
        db,
        name.to_string(),
        brand.to_string(),
        price,
        condition.to_string(),
        image.to_string(),
    )
    .await
}

/// Sets up a complete test environment with one phone in the catalog.
/// Returns (db, phone) for common test scenarios.
pub async fn setup_with_phone() -> Result<(DatabaseConnection, entities::phone::Model)> {
    let db = setup_test_db().await?;
    let phone = create_test_phone(&db, "Test Phone").await?;
    Ok((db, phone))
}
