//! Order entity - Represents a single cart line item.
//!
//! Each order references a phone, belongs to one cart (keyed by `cart_token`,
//! the value of the browser's cart cookie), and carries a positive quantity.
//! Orders are append-only: repeated adds of the same phone create new rows, and
//! checkout deletes every row for the cart token.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Order database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    /// Unique identifier for the line item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the phone this line item refers to
    pub phone_id: i64,
    /// Cart cookie token identifying the owning cart
    pub cart_token: String,
    /// Number of units, always positive
    pub quantity: i32,
    /// When the line item was added
    pub created_at: DateTime,
}

/// Defines relationships between Order and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each line item refers to one phone
    #[sea_orm(
        belongs_to = "super::phone::Entity",
        from = "Column::PhoneId",
        to = "super::phone::Column::Id"
    )]
    Phone,
}

impl Related<super::phone::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Phone.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
