//! Integration tests for EcoSwap.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p ecoswap-integration-tests
//! ```
//!
//! Every test runs the marketplace over a [`FileStore`] in its own
//! temporary directory, so tests exercise real persistence and can run in
//! parallel.

use std::path::Path;

use ecoswap_storefront::Marketplace;
use ecoswap_storefront::forms::ProductDraft;
use ecoswap_storefront::ids::SequentialIds;
use ecoswap_storefront::store::FileStore;
use tempfile::TempDir;

/// Marketplace with deterministic IDs over a file store.
pub type TestMarket = Marketplace<FileStore, SequentialIds>;

/// A data directory that is removed when the context is dropped.
pub struct TestContext {
    dir: TempDir,
}

impl TestContext {
    /// Create a fresh, empty data directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// The data directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Load (or reload) the marketplace from the data directory.
    ///
    /// # Panics
    ///
    /// Panics if stored state cannot be loaded.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn market(&self) -> TestMarket {
        Marketplace::load_with_ids(FileStore::new(self.path()), SequentialIds::new())
            .expect("Failed to load marketplace")
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A complete, valid sell-form draft.
#[must_use]
pub fn draft(title: &str, category: &str, price: &str) -> ProductDraft {
    ProductDraft {
        title: title.to_owned(),
        description: format!("{title}, gently used"),
        category: category.to_owned(),
        price: price.to_owned(),
        image: "data:image/png;base64,iVBORw0KGgo=".to_owned(),
    }
}
