//! Product categories offered by the sell form.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when text does not name a known [`Category`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0:?}")]
pub struct CategoryError(pub String);

/// Category of a listed product.
///
/// Persisted as its display label (e.g. `"Home Decor"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Clothing,
    Electronic,
    #[serde(rename = "Home Decor")]
    HomeDecor,
    Books,
    Toys,
    Furniture,
    Others,
}

impl Category {
    /// Every category, in the order the sell form offers them.
    pub const ALL: [Self; 7] = [
        Self::Clothing,
        Self::Electronic,
        Self::HomeDecor,
        Self::Books,
        Self::Toys,
        Self::Furniture,
        Self::Others,
    ];

    /// Human-readable label, identical to the persisted form.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Clothing => "Clothing",
            Self::Electronic => "Electronic",
            Self::HomeDecor => "Home Decor",
            Self::Books => "Books",
            Self::Toys => "Toys",
            Self::Furniture => "Furniture",
            Self::Others => "Others",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = CategoryError;

    /// Matches labels case-insensitively; `home-decor` and `home_decor` are
    /// accepted for `Home Decor` so the value can be typed on a command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|category| category.label().to_ascii_lowercase() == wanted)
            .ok_or_else(|| CategoryError(s.to_owned()))
    }
}
