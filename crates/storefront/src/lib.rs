//! EcoSwap Storefront library.
//!
//! Marketplace state and its persistence rules, independent of any
//! front-end. A front-end loads a [`Marketplace`] over some [`store::Store`],
//! renders from its read accessors and calls its mutation methods in
//! response to user actions.
//!
//! # Modules
//!
//! - [`store`] - Key-value persistence (`FileStore`, `MemoryStore`)
//! - [`catalog`], [`wishlist`], [`cart`] - The three collections
//! - [`forms`] - Sign-up, login and sell form validation
//! - [`routes`] - View resolution
//! - [`state`] - The [`Marketplace`] root

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod forms;
pub mod ids;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod wishlist;

pub use error::{MarketError, Result};
pub use state::Marketplace;
