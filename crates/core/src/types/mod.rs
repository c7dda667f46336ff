//! Core types for EcoSwap.
//!
//! This module provides type-safe wrappers for the marketplace's domain concepts.

pub mod category;
pub mod id;
pub mod price;

pub use category::{Category, CategoryError};
pub use id::*;
pub use price::{CurrencyCode, Price, PriceError};
