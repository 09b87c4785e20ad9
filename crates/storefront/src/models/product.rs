//! Product domain type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use shopfront_core::{Price, ProductId};

/// A purchasable catalog product.
///
/// Immutable once loaded: the catalog hands out shared references and
/// the cart stores its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Marketing description.
    pub description: String,
    /// Unit price in US dollars. Never negative.
    pub price: Decimal,
    /// Image URL.
    pub image: String,
    /// Free-text category tag (e.g., "electronics").
    pub category: String,
}

impl Product {
    /// The unit price as a displayable [`Price`].
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        Price::usd(self.price)
    }
}
