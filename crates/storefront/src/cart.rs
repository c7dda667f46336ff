//! Cart ledger: one line per product, with quantities and a mock checkout.

use ecoswap_core::{Price, ProductId};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::{CartLine, Product};

/// Acknowledgement returned by [`Cart::checkout`].
///
/// No payment is taken; this only records what the cart held.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutReceipt {
    /// Total number of units that were in the cart.
    pub items: u64,
    /// Total price of the cart.
    pub total: Price,
}

/// Products in the cart with their quantities.
///
/// Holds at most one line per product ID. When a persisted cart is loaded,
/// duplicate lines are merged by summing their quantities and lines with a
/// zero quantity are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `product`.
    ///
    /// Increments the existing line for the product, or appends a new line
    /// holding a snapshot of it. Returns the line's quantity afterwards.
    pub fn add_or_increment(&mut self, product: &Product) -> u32 {
        if let Some(line) = self.line_mut(product.id) {
            line.qty = line.qty.saturating_add(1);
            return line.qty;
        }

        self.lines.push(CartLine::new(product));
        1
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_quantity(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.qty)).sum()
    }

    /// Sum of `price * qty` across all lines.
    #[must_use]
    pub fn total_price(&self) -> Price {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Empty the cart and acknowledge the (simulated) payment.
    ///
    /// Cannot fail.
    pub fn checkout(&mut self) -> CheckoutReceipt {
        let receipt = CheckoutReceipt {
            items: self.total_quantity(),
            total: self.total_price(),
        };
        self.lines.clear();
        receipt
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// The line for `id`, if the product is in the cart.
    #[must_use]
    pub fn line(&self, id: ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id() == id)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn line_mut(&mut self, id: ProductId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_id() == id)
    }
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.qty == 0 {
                tracing::warn!(product_id = %line.product_id(), "Dropping cart line with zero quantity");
                continue;
            }
            match cart.line_mut(line.product_id()) {
                Some(existing) => existing.qty = existing.qty.saturating_add(line.qty),
                None => cart.lines.push(line),
            }
        }
        cart
    }
}

impl Serialize for Cart {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.lines.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<CartLine>::deserialize(deserializer).map(Self::from)
    }
}
