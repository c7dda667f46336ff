//! Wishlist: the set of favorited product IDs.

use ecoswap_core::ProductId;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::Catalog;
use crate::models::Product;

/// Set of favorited product IDs, kept in the order they were added.
///
/// IDs are references only: a wishlisted ID need not exist in the catalog.
/// Duplicates are dropped when a persisted list is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    ids: Vec<ProductId>,
}

impl Wishlist {
    /// Create an empty wishlist.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove `id` if present, otherwise add it.
    ///
    /// Returns `true` if `id` is wishlisted afterwards.
    pub fn toggle(&mut self, id: ProductId) -> bool {
        if let Some(pos) = self.ids.iter().position(|&x| x == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id);
            true
        }
    }

    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.ids.contains(&id)
    }

    /// Catalog products that are wishlisted, in catalog order.
    #[must_use]
    pub fn filter<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        catalog
            .list()
            .iter()
            .filter(|p| self.contains(p.id))
            .collect()
    }

    #[must_use]
    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl From<Vec<ProductId>> for Wishlist {
    fn from(ids: Vec<ProductId>) -> Self {
        let mut wishlist = Self::new();
        for id in ids {
            if !wishlist.contains(id) {
                wishlist.ids.push(id);
            }
        }
        wishlist
    }
}

impl Serialize for Wishlist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.ids.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Wishlist {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<ProductId>::deserialize(deserializer).map(Self::from)
    }
}
