//! Checkout business logic - Clears a cart in one sweep.
//!
//! There is no payment step and no receipt; checkout simply deletes every line
//! item for the cart token. The single `DELETE` is atomic at the store level,
//! so a concurrent add either lands before the sweep (and is cleared) or after
//! it (and survives into the next cart).

use crate::{
    entities::{Order, order},
    errors::Result,
};
use sea_orm::prelude::*;

/// Deletes every line item belonging to `cart_token` and returns how many
/// rows were cleared. Calling this on an empty cart is a no-op returning 0.
///
/// # Errors
/// Returns an error if the database delete fails.
pub async fn checkout(db: &DatabaseConnection, cart_token: &str) -> Result<u64> {
    let result = Order::delete_many()
        .filter(order::Column::CartToken.eq(cart_token))
        .exec(db)
        .await?;

    tracing::info!(cart_token, cleared = result.rows_affected, "checkout complete");
    Ok(result.rows_affected)
}
