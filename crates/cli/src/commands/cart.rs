//! Cart commands.

use shopfront_core::{Price, ProductId};
use shopfront_storefront::error::{AppError, Result};
use shopfront_storefront::format::pluralize;
use shopfront_storefront::state::AppState;

/// Render the cart contents and totals.
pub fn show(state: &AppState) -> String {
    let cart = state.cart();
    if cart.is_empty() {
        return "Your cart is empty".to_owned();
    }

    let mut lines: Vec<String> = cart
        .items()
        .iter()
        .map(|item| {
            format!(
                "[{}] {} x{} @ {} = {}",
                item.product.id,
                item.product.name,
                item.quantity,
                item.product.unit_price(),
                Price::usd(item.line_total())
            )
        })
        .collect();

    let count = cart.count();
    lines.push(format!(
        "{count} {}, total {}",
        pluralize(usize::try_from(count).unwrap_or(usize::MAX), "item", "items"),
        cart.total_price()
    ));
    lines.join("\n")
}

/// Add `quantity` units of a catalog product.
///
/// # Errors
///
/// Returns `AppError::NotFound` when the product is not in the catalog.
pub fn add(state: &mut AppState, id: &str, quantity: u32) -> Result<String> {
    let id = ProductId::new(id);
    let (catalog, cart) = state.catalog_and_cart();
    let product = catalog
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Product {id}")))?;

    Ok(cart.add_quantity(product, quantity).description())
}

/// Remove a product's line.
pub fn remove(state: &mut AppState, id: &str) -> String {
    state.cart_mut().remove(&ProductId::new(id)).description()
}

/// Overwrite a product's quantity.
pub fn set(state: &mut AppState, id: &str, quantity: i64) -> String {
    state
        .cart_mut()
        .set_quantity(&ProductId::new(id), quantity)
        .description()
}

/// Empty the cart.
pub fn clear(state: &mut AppState) -> String {
    state.cart_mut().clear().description()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::commands::test_support;

    #[tokio::test]
    async fn test_empty_cart() {
        let state = test_support::state().await;
        assert_eq!(show(&state), "Your cart is empty");
    }

    #[tokio::test]
    async fn test_add_then_show() {
        let mut state = test_support::state().await;

        assert_eq!(
            add(&mut state, "3", 1).unwrap(),
            "Ultra-Slim Laptop Pro added to your cart"
        );
        assert_eq!(
            add(&mut state, "3", 1).unwrap(),
            "Ultra-Slim Laptop Pro quantity increased to 2"
        );
        add(&mut state, "8", 1).unwrap();

        assert_eq!(
            show(&state),
            "[3] Ultra-Slim Laptop Pro x2 @ $1,299.99 = $2,599.98\n\
             [8] Premium Mechanical Keyboard x1 @ $149.99 = $149.99\n\
             3 items, total $2,749.97"
        );
    }

    #[tokio::test]
    async fn test_add_unknown_product() {
        let mut state = test_support::state().await;
        let err = add(&mut state, "99", 1).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(state.cart().is_empty());
    }

    #[tokio::test]
    async fn test_set_zero_is_ignored() {
        let mut state = test_support::state().await;
        add(&mut state, "1", 2).unwrap();

        let message = set(&mut state, "1", 0);

        assert_eq!(message, "Quantity must be at least 1 (got 0)");
        assert_eq!(state.cart().count(), 2);
    }

    #[tokio::test]
    async fn test_set_negative_is_ignored() {
        let mut state = test_support::state().await;
        add(&mut state, "1", 2).unwrap();

        let message = set(&mut state, "1", -1);

        assert_eq!(message, "Quantity must be at least 1 (got -1)");
        assert_eq!(state.cart().count(), 2);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let mut state = test_support::state().await;
        add(&mut state, "1", 1).unwrap();
        add(&mut state, "2", 1).unwrap();

        assert_eq!(remove(&mut state, "1"), "Item removed from your cart");
        assert_eq!(remove(&mut state, "1"), "Product 1 is not in your cart");
        assert_eq!(
            clear(&mut state),
            "All items have been removed from your cart"
        );
        assert!(state.cart().is_empty());
    }
}
