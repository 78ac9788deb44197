//! Phone entity - Represents a listing in the store catalog.
//!
//! Each phone has a name, brand, price, condition (`"new"` or `"used"`), and an
//! image reference (either an external URL or an `/uploads/...` path produced by
//! the upload module). Phones are immutable once created; the store exposes no
//! edit or delete routes.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Phone database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "phones")]
pub struct Model {
    /// Unique identifier for the phone
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name of the listing (e.g., "Galaxy S24")
    pub name: String,
    /// Manufacturer brand (e.g., "Samsung")
    pub brand: String,
    /// Price per unit in dollars
    pub price: f64,
    /// Listing condition: `"new"` or `"used"`
    pub condition: String,
    /// Image reference: URL or stored upload path
    pub image: String,
    /// When the listing was created
    pub created_at: DateTime,
}

/// Defines relationships between Phone and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One phone may appear in many cart line items
    #[sea_orm(has_many = "super::order::Entity")]
    Orders,
}

impl Related<super::order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Orders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
