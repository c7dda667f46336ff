//! Listed product.

use ecoswap_core::{Category, Price, ProductId};
use serde::{Deserialize, Serialize};

use crate::forms::ValidDraft;

/// A product listed for sale.
///
/// Products are immutable once listed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Creation time in milliseconds, unique within the catalog.
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: Price,
    /// Picture encoded as a `data:` URL.
    pub image: String,
}

impl Product {
    /// Build a product from a validated draft.
    #[must_use]
    pub fn from_draft(id: ProductId, draft: ValidDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            category: draft.category,
            price: draft.price,
            image: draft.image,
        }
    }
}
