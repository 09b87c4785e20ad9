//! Cart line item type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Product;

/// A product in the cart with its quantity.
///
/// Quantity is always at least one; the cart store removes the line
/// rather than letting it reach zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub product: Product,
    pub quantity: u32,
}

impl CartItem {
    /// Price multiplied by quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
