//! Catalog business logic - Handles all phone listing operations.
//!
//! This module provides functions for listing, retrieving, and creating phone
//! listings. Creation validates every field at the service boundary rather than
//! trusting the presentation layer: names and brands must be non-empty, prices
//! must be finite and non-negative, and the condition must be one of the two
//! allowed values. All functions are async and return Result types for proper
//! error handling throughout the system.

use crate::{
    entities::{Phone, phone},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Conditions a listing may carry. Anything else is rejected at creation.
pub const ALLOWED_CONDITIONS: [&str; 2] = ["new", "used"];

/// Retrieves every phone in the catalog, ordered by id ascending.
///
/// Each phone appears exactly once; the ordering is insertion order and
/// carries no further meaning to callers.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn list_phones(db: &DatabaseConnection) -> Result<Vec<phone::Model>> {
    Phone::find()
        .order_by_asc(phone::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific phone by its unique ID.
///
/// # Errors
/// Returns [`Error::PhoneNotFound`] if no phone has this id, or an error if
/// the database query fails.
pub async fn get_phone(db: &DatabaseConnection, id: i64) -> Result<phone::Model> {
    Phone::find_by_id(id)
        .one(db)
        .await?
        .ok_or(Error::PhoneNotFound { id })
}

/// Creates a new phone listing, performing input validation.
///
/// Text fields are trimmed before storage. The assigned id is available on the
/// returned model.
///
/// # Errors
/// Returns [`Error::Validation`] if:
/// - name, brand, or image is empty or whitespace-only
/// - the price is negative or not finite (NaN, infinity)
/// - the condition is not one of [`ALLOWED_CONDITIONS`]
///
/// Returns a database error if the insert fails.
pub async fn create_phone(
    db: &DatabaseConnection,
    name: String,
    brand: String,
    price: f64,
    condition: String,
    image: String,
) -> Result<phone::Model> {
    if name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Phone name cannot be empty".to_string(),
        });
    }

    if brand.trim().is_empty() {
        return Err(Error::Validation {
            message: "Brand cannot be empty".to_string(),
        });
    }

    if !price.is_finite() || price < 0.0 {
        return Err(Error::Validation {
            message: format!("Price must be a non-negative number, got {price}"),
        });
    }

    let condition = condition.trim().to_string();
    if !ALLOWED_CONDITIONS.contains(&condition.as_str()) {
        return Err(Error::Validation {
            message: format!("Condition must be one of {ALLOWED_CONDITIONS:?}, got {condition:?}"),
        });
    }

    if image.trim().is_empty() {
        return Err(Error::Validation {
            message: "Image reference cannot be empty".to_string(),
        });
    }

    let phone = phone::ActiveModel {
        name: Set(name.trim().to_string()),
        brand: Set(brand.trim().to_string()),
        price: Set(price),
        condition: Set(condition),
        image: Set(image.trim().to_string()),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    phone.insert(db).await.map_err(Into::into)
}
