//! Cart line: a product snapshot plus a quantity.

use ecoswap_core::{Price, ProductId};
use serde::{Deserialize, Serialize};

use super::Product;

/// One product in the cart.
///
/// The product is copied when first added, so the line keeps the title,
/// price and image it was added with. Persisted flat as
/// `{ id, title, ..., qty }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(flatten)]
    pub product: Product,
    /// Always at least 1.
    pub qty: u32,
}

impl CartLine {
    /// A new line holding one unit of `product`.
    #[must_use]
    pub fn new(product: &Product) -> Self {
        Self {
            product: product.clone(),
            qty: 1,
        }
    }

    /// The product this line refers to.
    #[must_use]
    pub const fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Price of the whole line (`price * qty`).
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.qty)
    }
}
