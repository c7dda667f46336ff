//! Product grid and wishlist.

use ecoswap_core::ProductId;
use ecoswap_storefront::config::MarketConfig;
use ecoswap_storefront::models::Product;

use super::{CliError, Market};

/// Render the product grid, or only the wishlisted products.
#[allow(clippy::print_stdout)]
pub fn products(market: &Market, wishlist_only: bool, config: &MarketConfig) {
    println!(
        "EcoSwap | Wishlist ({}) | Cart ({})",
        market.wishlist().len(),
        market.cart().total_quantity()
    );

    let shown: Vec<&Product> = if wishlist_only {
        market.wishlisted_products()
    } else {
        market.catalog().list().iter().collect()
    };

    if shown.is_empty() {
        println!(
            "{}",
            if wishlist_only {
                "No items in wishlist."
            } else {
                "No products available."
            }
        );
        return;
    }

    for product in shown {
        let heart = if market.wishlist().contains(product.id) {
            '♥'
        } else {
            '♡'
        };
        println!(
            "{heart} [{}] {}  {}  {}",
            product.id,
            product.title,
            product.category,
            product.price.display(config.currency)
        );
        println!("    {}", product.description);
    }
}

/// Toggle a product on the wishlist.
///
/// # Errors
///
/// Returns an error if the wishlist cannot be saved.
#[allow(clippy::print_stdout)]
pub fn toggle_wishlist(market: &mut Market, id: ProductId) -> Result<(), CliError> {
    if market.toggle_wishlist(id)? {
        println!("Added {id} to wishlist");
    } else {
        println!("Removed {id} from wishlist");
    }
    Ok(())
}
