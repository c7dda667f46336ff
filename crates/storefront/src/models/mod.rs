//! Domain models for the marketplace.
//!
//! These are the persisted record shapes. The collections that own them
//! live in [`crate::catalog`], [`crate::wishlist`] and [`crate::cart`].

pub mod cart_line;
pub mod product;

pub use cart_line::CartLine;
pub use product::Product;
