//! Product catalog.
//!
//! The catalog is a static in-memory list loaded once at startup behind a
//! simulated network delay. It has no pagination and no error path;
//! filtering and sorting happen client-side through [`ProductQuery`].

mod data;
pub mod query;

use tracing::instrument;

use shopfront_core::ProductId;

pub use data::sample_products;
pub use query::{ALL_CATEGORIES, CategoryFilter, ProductQuery, SortOrder, SortOrderError};

use crate::models::Product;
use crate::services::SimulatedLatency;

/// Number of products shown in featured and similar-product rails.
pub const RAIL_SIZE: usize = 4;

/// The loaded product catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from an explicit product list.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// The built-in sample catalog, available immediately.
    #[must_use]
    pub fn sample() -> Self {
        Self::new(sample_products())
    }

    /// Load the sample catalog after the simulated network delay.
    #[instrument(skip(latency), fields(delay = ?latency.delay()))]
    pub async fn load(latency: SimulatedLatency) -> Self {
        latency.wait().await;
        let catalog = Self::sample();
        tracing::info!(products = catalog.len(), "Catalog loaded");
        catalog
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Number of products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Returns `true` if the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct categories in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Category choices for a filter menu: the "all" sentinel followed by
    /// every distinct category.
    #[must_use]
    pub fn category_options(&self) -> Vec<&str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(self.categories())
            .collect()
    }

    /// The first few products, shown on the home page.
    #[must_use]
    pub fn featured(&self) -> &[Product] {
        let end = self.products.len().min(RAIL_SIZE);
        self.products.get(..end).unwrap_or_default()
    }

    /// Other products in the same category, up to [`RAIL_SIZE`].
    #[must_use]
    pub fn similar(&self, product: &Product) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(RAIL_SIZE)
            .collect()
    }

    /// Run a filter/sort query over the catalog.
    #[must_use]
    pub fn query(&self, query: &ProductQuery) -> Vec<&Product> {
        query.apply(&self.products)
    }
}
