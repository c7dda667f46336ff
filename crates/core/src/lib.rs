//! EcoSwap Core - Shared domain types.
//!
//! This crate provides the types used across all EcoSwap components:
//! - `storefront` - Marketplace state, persistence and form validation
//! - `cli` - The `ecoswap` command-line front-end
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product IDs, prices and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
