//! Cart summary and checkout.

use ecoswap_core::ProductId;
use ecoswap_storefront::config::MarketConfig;

use super::{CliError, Market};

/// Add one unit of a product to the cart.
///
/// # Errors
///
/// Returns an error if the product is not listed or the cart cannot be saved.
#[allow(clippy::print_stdout)]
pub fn add(market: &mut Market, id: ProductId) -> Result<(), CliError> {
    let qty = market.add_to_cart(id)?;
    println!(
        "Cart: {qty} x {id} ({} items total)",
        market.cart().total_quantity()
    );
    Ok(())
}

/// Render the order summary.
#[allow(clippy::print_stdout)]
pub fn show(market: &Market, config: &MarketConfig) {
    let cart = market.cart();
    println!("Order Summary");

    if cart.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    for line in cart.lines() {
        println!(
            "  {}  Qty: {}  Price: {}",
            line.product.title,
            line.qty,
            line.line_total().display(config.currency)
        );
    }
    println!("Total: {}", cart.total_price().display(config.currency));
}

/// Simulate payment for the cart.
///
/// # Errors
///
/// Returns an error if the emptied cart cannot be saved.
#[allow(clippy::print_stdout)]
pub fn checkout(market: &mut Market, config: &MarketConfig) -> Result<(), CliError> {
    if market.cart().is_empty() {
        println!("Your cart is empty.");
        return Ok(());
    }

    let receipt = market.checkout()?;
    println!(
        "Payment successful: {} items, {}",
        receipt.items,
        receipt.total.display(config.currency)
    );
    Ok(())
}
