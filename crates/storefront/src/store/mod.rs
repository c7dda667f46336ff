//! Persistent key-value store for marketplace collections.
//!
//! # Keys
//!
//! Three collections are persisted, each as one JSON document:
//!
//! - `products` - The catalog, most recently listed first
//! - `wishlist` - Array of favorited product IDs
//! - `cart` - Array of cart lines (`{ ...product, qty }`)
//!
//! A write replaces the whole value under its key. Nothing is diffed and
//! there are no multi-key transactions; a single `save` is atomic.
//!
//! # Implementations
//!
//! - [`FileStore`] - One JSON file per key in a data directory
//! - [`MemoryStore`] - Process-local map, used in tests

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Errors returned by store implementations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The underlying storage could not be read or written.
    #[error("failed to access `{key}`: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded as JSON.
    #[error("failed to serialize `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The persisted text is not valid JSON of the expected shape.
    #[error("stored value for `{key}` is corrupt: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Names of the persisted collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Products,
    Wishlist,
    Cart,
}

impl StoreKey {
    /// Every persisted collection.
    pub const ALL: [Self; 3] = [Self::Products, Self::Wishlist, Self::Cart];

    /// The literal key the collection is stored under.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Wishlist => "wishlist",
            Self::Cart => "cart",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw text key-value storage.
pub trait Store {
    /// Read the text stored under `key`, or `None` if nothing was saved yet.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the backing storage cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Typed JSON access on top of any [`Store`].
pub trait JsonStore: Store {
    /// Load and decode the collection stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the stored text does not decode as `T`.
    fn load_json<T: DeserializeOwned>(&self, key: StoreKey) -> Result<Option<T>, StoreError> {
        let Some(text) = self.load(key.as_str())? else {
            return Ok(None);
        };

        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StoreError::Corrupt {
                key: key.to_string(),
                source,
            })
    }

    /// Encode `value` as JSON and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the underlying write fails.
    fn save_json<T: Serialize + ?Sized>(
        &mut self,
        key: StoreKey,
        value: &T,
    ) -> Result<(), StoreError> {
        let text = serde_json::to_string(value).map_err(|source| StoreError::Serialize {
            key: key.to_string(),
            source,
        })?;

        self.save(key.as_str(), &text)?;
        tracing::debug!(key = %key, bytes = text.len(), "Collection persisted");
        Ok(())
    }
}

impl<S: Store + ?Sized> JsonStore for S {}

impl<S: Store + ?Sized> Store for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_key_names() {
        let names: Vec<_> = StoreKey::ALL.iter().map(StoreKey::as_str).collect();
        assert_eq!(names, ["products", "wishlist", "cart"]);
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = MemoryStore::new();
        store.save_json(StoreKey::Wishlist, &[3_i64, 1, 2]).unwrap();

        assert_eq!(store.load("wishlist").unwrap().as_deref(), Some("[3,1,2]"));
        let ids: Vec<i64> = store.load_json(StoreKey::Wishlist).unwrap().unwrap();
        assert_eq!(ids, [3, 1, 2]);
    }

    #[test]
    fn test_missing_key_is_none() {
        let store = MemoryStore::new();
        let cart: Option<Vec<i64>> = store.load_json(StoreKey::Cart).unwrap();
        assert!(cart.is_none());
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let mut store = MemoryStore::new();
        store.save("products", "{not json").unwrap();

        let err = store.load_json::<Vec<i64>>(StoreKey::Products).unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { ref key, .. } if key == "products"));
    }

    #[test]
    fn test_boxed_store_is_a_store() {
        let mut store: Box<dyn Store> = Box::new(MemoryStore::new());
        store.save_json(StoreKey::Cart, &Vec::<i64>::new()).unwrap();
        assert_eq!(store.load("cart").unwrap().as_deref(), Some("[]"));
    }
}
