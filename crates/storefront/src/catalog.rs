//! Product catalog: every listed product, newest first.

use ecoswap_core::ProductId;
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Ordered collection of listed products.
///
/// Products are only ever prepended; nothing is edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All products, most recently added first.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Put `product` at the front of the catalog.
    pub fn add(&mut self, product: Product) {
        self.products.insert(0, product);
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Largest ID in the catalog, used to seed ID generation after a reload.
    #[must_use]
    pub fn max_id(&self) -> Option<ProductId> {
        self.products.iter().map(|p| p.id).max()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
