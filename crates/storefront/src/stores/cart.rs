//! Cart store: line items with persisted snapshots.
//!
//! Every mutation returns a [`CartEvent`] describing what happened so the
//! presentation layer can decide how to notify the shopper. The full cart
//! is written to durable storage after each change; write failures are
//! logged and never fail the mutation.

use rust_decimal::Decimal;
use tracing::instrument;

use shopfront_core::{Price, ProductId};

use crate::error::{add_breadcrumb, capture_storage_error};
use crate::models::{CartItem, Product};
use crate::storage::{SharedStorage, keys, load_json, save_json};

/// What a cart mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartEvent {
    /// A new line was appended.
    Added {
        product_id: ProductId,
        name: String,
        quantity: u32,
    },
    /// An existing line's quantity went up via add.
    QuantityIncreased {
        product_id: ProductId,
        name: String,
        quantity: u32,
    },
    /// An existing line's quantity was overwritten.
    QuantityChanged { product_id: ProductId, quantity: u32 },
    /// A line was deleted.
    Removed { product_id: ProductId },
    /// The product has no line in the cart; nothing changed.
    NotInCart { product_id: ProductId },
    /// The requested quantity was below one; nothing changed.
    Ignored { product_id: ProductId, quantity: i64 },
    /// Every line was deleted.
    Cleared,
}

impl CartEvent {
    /// Returns `true` if the cart contents changed.
    #[must_use]
    pub const fn changed(&self) -> bool {
        !matches!(self, Self::NotInCart { .. } | Self::Ignored { .. })
    }

    /// User-facing description of the event.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Added { name, quantity, .. } if *quantity == 1 => {
                format!("{name} added to your cart")
            }
            Self::Added { name, quantity, .. } => {
                format!("{quantity} × {name} added to your cart")
            }
            Self::QuantityIncreased { name, quantity, .. } => {
                format!("{name} quantity increased to {quantity}")
            }
            Self::QuantityChanged { quantity, .. } => format!("Quantity updated to {quantity}"),
            Self::Removed { .. } => "Item removed from your cart".to_owned(),
            Self::NotInCart { product_id } => format!("Product {product_id} is not in your cart"),
            Self::Ignored { quantity, .. } => {
                format!("Quantity must be at least 1 (got {quantity})")
            }
            Self::Cleared => "All items have been removed from your cart".to_owned(),
        }
    }
}

/// The shopping cart.
///
/// Invariants:
/// - every line has quantity >= 1
/// - a product appears in at most one line
/// - lines keep insertion order
#[derive(Debug)]
pub struct CartStore {
    storage: SharedStorage,
    items: Vec<CartItem>,
}

impl CartStore {
    /// Restore the cart from storage.
    ///
    /// A missing, unreadable or malformed snapshot yields an empty cart.
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        let items = match load_json::<Vec<CartItem>>(&*storage, keys::CART) {
            Ok(Some(items)) => normalize(items),
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding persisted cart");
                Vec::new()
            }
        };

        tracing::debug!(lines = items.len(), "Cart restored");
        Self { storage, items }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The cart lines in insertion order.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// The line for a product, if present.
    #[must_use]
    pub fn get(&self, product_id: &ProductId) -> Option<&CartItem> {
        self.items.iter().find(|item| &item.product.id == product_id)
    }

    /// Returns `true` if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// The total as a displayable [`Price`].
    #[must_use]
    pub fn total_price(&self) -> Price {
        Price::usd(self.total())
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items
            .iter()
            .fold(0, |count, item| count.saturating_add(item.quantity))
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add one unit of a product.
    pub fn add(&mut self, product: &Product) -> CartEvent {
        self.add_quantity(product, 1)
    }

    /// Add `quantity` units of a product in one step.
    ///
    /// Equivalent to calling [`CartStore::add`] `quantity` times. Zero is
    /// ignored.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_quantity(&mut self, product: &Product, quantity: u32) -> CartEvent {
        if quantity == 0 {
            return CartEvent::Ignored {
                product_id: product.id.clone(),
                quantity: 0,
            };
        }

        let event = if let Some(item) = self.items.iter_mut().find(|i| i.product.id == product.id)
        {
            item.quantity = item.quantity.saturating_add(quantity);
            CartEvent::QuantityIncreased {
                product_id: product.id.clone(),
                name: product.name.clone(),
                quantity: item.quantity,
            }
        } else {
            self.items.push(CartItem {
                product: product.clone(),
                quantity,
            });
            CartEvent::Added {
                product_id: product.id.clone(),
                name: product.name.clone(),
                quantity,
            }
        };

        self.commit(event)
    }

    /// Delete a product's line. Absent products are a no-op.
    #[instrument(skip(self))]
    pub fn remove(&mut self, product_id: &ProductId) -> CartEvent {
        let before = self.items.len();
        self.items.retain(|item| &item.product.id != product_id);

        if self.items.len() == before {
            return CartEvent::NotInCart {
                product_id: product_id.clone(),
            };
        }

        self.commit(CartEvent::Removed {
            product_id: product_id.clone(),
        })
    }

    /// Overwrite a line's quantity.
    ///
    /// Quantities below one are ignored rather than removing the line.
    /// Quantities beyond `u32::MAX` saturate.
    #[instrument(skip(self))]
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: i64) -> CartEvent {
        if quantity < 1 {
            return CartEvent::Ignored {
                product_id: product_id.clone(),
                quantity,
            };
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        let Some(item) = self.items.iter_mut().find(|i| &i.product.id == product_id) else {
            return CartEvent::NotInCart {
                product_id: product_id.clone(),
            };
        };
        item.quantity = quantity;

        self.commit(CartEvent::QuantityChanged {
            product_id: product_id.clone(),
            quantity,
        })
    }

    /// Delete every line.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> CartEvent {
        self.items.clear();
        self.commit(CartEvent::Cleared)
    }

    /// Persist the snapshot and record the event.
    fn commit(&self, event: CartEvent) -> CartEvent {
        if let Err(e) = save_json(&*self.storage, keys::CART, &self.items) {
            capture_storage_error(&e, "Failed to persist cart");
        }

        add_breadcrumb("cart", &event.description(), None);
        tracing::debug!(count = self.count(), total = %self.total(), "Cart updated");
        event
    }
}

/// Merge duplicate products and drop empty lines from a restored snapshot.
fn normalize(items: Vec<CartItem>) -> Vec<CartItem> {
    let mut merged: Vec<CartItem> = Vec::with_capacity(items.len());
    for item in items {
        if item.quantity == 0 {
            continue;
        }
        match merged.iter_mut().find(|m| m.product.id == item.product.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => merged.push(item),
        }
    }
    merged
}
