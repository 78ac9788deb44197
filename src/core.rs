//! Core business logic - framework-agnostic catalog, cart, checkout, and
//! upload operations. Nothing in here knows about HTTP; the web layer calls
//! into these functions and renders whatever they return.

/// Cart operations - adding line items and computing the cart view
pub mod cart;
/// Catalog operations - listing, fetching, and creating phones
pub mod catalog;
/// Checkout operation - clearing a cart
pub mod checkout;
/// Upload handling - extension allow-list and image storage
pub mod upload;
