//! The sell form: a product draft entered by a seller.

use ecoswap_core::{Category, Price};

use super::{ValidationError, require};

/// Product listing form data, exactly as entered.
///
/// `image` holds the picture already encoded as text (a `data:` URL).
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub image: String,
}

/// A draft that passed validation, with typed category and price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidDraft {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub price: Price,
    pub image: String,
}

impl ProductDraft {
    /// Check every field and convert the draft into typed values.
    ///
    /// All five fields must be present before the category and price are
    /// interpreted. Title, description and image are kept exactly as entered.
    ///
    /// # Errors
    ///
    /// Returns `MissingField` for the first blank field, `InvalidCategory`
    /// for an unknown category, or `InvalidPrice` if the price is not a
    /// non-negative number.
    pub fn validate(&self) -> Result<ValidDraft, ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("category", &self.category)?;
        require("price", &self.price)?;
        require("image", &self.image)?;

        let category = self
            .category
            .parse::<Category>()
            .map_err(|e| ValidationError::InvalidCategory(e.0))?;
        let price = Price::parse(&self.price)
            .map_err(|e| ValidationError::InvalidPrice(e.to_string()))?;

        Ok(ValidDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            category,
            price,
            image: self.image.clone(),
        })
    }
}
