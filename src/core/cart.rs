//! Cart business logic - Handles line items and the computed cart view.
//!
//! Every cart is keyed by an opaque `cart_token` (the value of the browser's
//! cart cookie), so concurrent visitors never see each other's items. Line
//! items are append-only: adding the same phone twice produces two rows rather
//! than accumulating quantity. The add path runs its existence check and insert
//! inside one database transaction so a concurrent checkout cannot interleave
//! between them.

use crate::{
    entities::{Order, Phone, order, phone},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// One line of the cart: an order row paired with the phone it references.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// The underlying order row
    pub order: order::Model,
    /// The phone the order references
    pub phone: phone::Model,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    pub fn line_total(&self) -> f64 {
        self.phone.price * f64::from(self.order.quantity)
    }
}

/// The full contents of one cart plus its grand total.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    /// Line items in insertion order
    pub lines: Vec<CartLine>,
    /// Sum of all line totals
    pub total: f64,
}

impl CartView {
    /// True when the cart holds no line items.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Appends a new line item to the cart identified by `cart_token`.
///
/// The phone existence check and the insert run in one database transaction,
/// so the new row cannot land after a concurrent checkout has already swept
/// the cart's rows away mid-add.
///
/// # Errors
/// Returns [`Error::Validation`] if `quantity` is not positive, and
/// [`Error::PhoneNotFound`] if `phone_id` does not reference an existing
/// phone. In both cases no order row is created.
pub async fn add_line_item(
    db: &DatabaseConnection,
    cart_token: &str,
    phone_id: i64,
    quantity: i32,
) -> Result<order::Model> {
    if quantity <= 0 {
        return Err(Error::Validation {
            message: format!("Quantity must be a positive integer, got {quantity}"),
        });
    }

    let txn = db.begin().await?;

    Phone::find_by_id(phone_id)
        .one(&txn)
        .await?
        .ok_or(Error::PhoneNotFound { id: phone_id })?;

    let line = order::ActiveModel {
        phone_id: Set(phone_id),
        cart_token: Set(cart_token.to_string()),
        quantity: Set(quantity),
        created_at: Set(chrono::Utc::now().naive_utc()),
        ..Default::default()
    };
    let line = line.insert(&txn).await?;

    txn.commit().await?;

    Ok(line)
}

/// Computes the cart view for `cart_token`: every line item paired with its
/// phone, in insertion order, plus the grand total.
///
/// # Errors
/// Returns [`Error::PhoneNotFound`] if any line item references a phone that
/// no longer exists. A dangling reference is surfaced as an explicit error
/// instead of a hole in the rendered cart.
pub async fn get_cart_view(db: &DatabaseConnection, cart_token: &str) -> Result<CartView> {
    let rows = Order::find()
        .filter(order::Column::CartToken.eq(cart_token))
        .order_by_asc(order::Column::Id)
        .find_also_related(Phone)
        .all(db)
        .await?;

    let mut lines = Vec::with_capacity(rows.len());
    for (order, phone) in rows {
        let phone = phone.ok_or(Error::PhoneNotFound {
            id: order.phone_id,
        })?;
        lines.push(CartLine { order, phone });
    }

    let total = lines.iter().map(CartLine::line_total).sum();
    Ok(CartView { lines, total })
}
