//! Application state: the marketplace root.
//!
//! [`Marketplace`] owns the injected [`Store`] and the three in-memory
//! collections. State is hydrated once by [`Marketplace::load`]; after that
//! every mutation rewrites the affected collection in full before returning,
//! so the store always matches what the front-end renders next.

use ecoswap_core::ProductId;
use tracing::{info, instrument, warn};

use crate::cart::{Cart, CheckoutReceipt};
use crate::catalog::Catalog;
use crate::error::{MarketError, Result};
use crate::forms::ProductDraft;
use crate::ids::{ProductIds, TimestampIds};
use crate::models::{CartLine, Product};
use crate::store::{JsonStore, Store, StoreKey};
use crate::wishlist::Wishlist;

/// The marketplace: catalog, wishlist and cart over a persistent store.
pub struct Marketplace<S, I = TimestampIds> {
    store: S,
    ids: I,
    catalog: Catalog,
    wishlist: Wishlist,
    cart: Cart,
}

impl<S: Store> Marketplace<S> {
    /// Hydrate the marketplace from `store`, issuing IDs from the system clock.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Store` if a collection cannot be read or is corrupt.
    pub fn load(store: S) -> Result<Self> {
        Marketplace::load_with_ids(store, TimestampIds::new())
    }
}

impl<S: Store, I: ProductIds> Marketplace<S, I> {
    /// Hydrate the marketplace from `store` with a custom ID source.
    ///
    /// Missing collections start empty. The ID source is seeded from the
    /// loaded catalog and cart so new IDs never collide with stored ones.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Store` if a collection cannot be read or is corrupt.
    pub fn load_with_ids(store: S, mut ids: I) -> Result<Self> {
        let catalog: Catalog = store.load_json(StoreKey::Products)?.unwrap_or_default();
        let wishlist: Wishlist = store.load_json(StoreKey::Wishlist)?.unwrap_or_default();
        let cart: Cart = store.load_json(StoreKey::Cart)?.unwrap_or_default();

        let in_cart = cart.lines().iter().map(CartLine::product_id).max();
        if let Some(max) = catalog.max_id().max(in_cart) {
            ids.observe(max);
        }

        info!(
            products = catalog.len(),
            wishlist = wishlist.len(),
            cart_items = cart.total_quantity(),
            "Marketplace state loaded"
        );

        Ok(Self {
            store,
            ids,
            catalog,
            wishlist,
            cart,
        })
    }

    /// List a new product from the sell form.
    ///
    /// Nothing is created if the draft is invalid.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Validation` if the draft is incomplete or
    /// malformed, or `MarketError::Store` if the catalog cannot be saved.
    #[instrument(skip(self, draft), fields(title = %draft.title))]
    pub fn sell(&mut self, draft: &ProductDraft) -> Result<Product> {
        let valid = draft.validate().inspect_err(|e| {
            warn!(error = %e, "Listing rejected");
        })?;

        let product = Product::from_draft(self.ids.next_id(), valid);
        self.catalog.add(product.clone());
        self.store.save_json(StoreKey::Products, &self.catalog)?;

        info!(product_id = %product.id, price = %product.price, "Product listed");
        Ok(product)
    }

    /// Add or remove a product from the wishlist.
    ///
    /// The ID is not checked against the catalog. Returns `true` if the
    /// product is wishlisted afterwards.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Store` if the wishlist cannot be saved.
    #[instrument(skip(self))]
    pub fn toggle_wishlist(&mut self, id: ProductId) -> Result<bool> {
        let added = self.wishlist.toggle(id);
        self.store.save_json(StoreKey::Wishlist, &self.wishlist)?;

        info!(product_id = %id, added, "Wishlist toggled");
        Ok(added)
    }

    /// Put one unit of a listed product in the cart.
    ///
    /// Returns the product's quantity in the cart afterwards.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::ProductNotFound` if no listed product has `id`,
    /// or `MarketError::Store` if the cart cannot be saved.
    #[instrument(skip(self))]
    pub fn add_to_cart(&mut self, id: ProductId) -> Result<u32> {
        let product = self
            .catalog
            .get(id)
            .ok_or(MarketError::ProductNotFound(id))?;
        let qty = self.cart.add_or_increment(product);
        self.store.save_json(StoreKey::Cart, &self.cart)?;

        info!(product_id = %id, qty, "Added to cart");
        Ok(qty)
    }

    /// Simulate payment: empty the cart and return what it held.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Store` if the emptied cart cannot be saved.
    #[instrument(skip(self))]
    pub fn checkout(&mut self) -> Result<CheckoutReceipt> {
        let receipt = self.cart.checkout();
        self.store.save_json(StoreKey::Cart, &self.cart)?;

        info!(items = receipt.items, total = %receipt.total, "Checkout complete");
        Ok(receipt)
    }

    /// Write all three collections to the store.
    ///
    /// # Errors
    ///
    /// Returns `MarketError::Store` if any collection cannot be saved.
    pub fn save_all(&mut self) -> Result<()> {
        self.store.save_json(StoreKey::Products, &self.catalog)?;
        self.store.save_json(StoreKey::Wishlist, &self.wishlist)?;
        self.store.save_json(StoreKey::Cart, &self.cart)?;
        Ok(())
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Listed products that are wishlisted, in catalog order.
    #[must_use]
    pub fn wishlisted_products(&self) -> Vec<&Product> {
        self.wishlist.filter(&self.catalog)
    }

    /// The underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the store, dropping in-memory state.
    #[must_use]
    pub fn into_store(self) -> S {
        self.store
    }
}
