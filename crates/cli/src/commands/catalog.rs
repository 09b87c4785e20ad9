//! Catalog browsing commands.

use shopfront_core::ProductId;
use shopfront_storefront::catalog::{ProductQuery, SortOrder};
use shopfront_storefront::error::{AppError, Result};
use shopfront_storefront::format::{pluralize, truncate};
use shopfront_storefront::models::Product;
use shopfront_storefront::state::AppState;

const DESCRIPTION_PREVIEW: usize = 60;

fn product_line(product: &Product) -> String {
    format!(
        "[{}] {} - {} ({})",
        product.id,
        product.name,
        product.unit_price(),
        product.category
    )
}

/// List products matching a search, category and sort order.
///
/// # Errors
///
/// Returns `AppError::Query` for an unknown sort key.
pub fn list(state: &AppState, search: &str, category: &str, sort: &str) -> Result<String> {
    let sort: SortOrder = sort.parse()?;
    let query = ProductQuery::new()
        .with_search(search)
        .with_category(category)
        .with_sort(sort);

    let products = state.catalog().query(&query);
    if products.is_empty() {
        return Ok("No products found".to_owned());
    }

    let mut lines = vec![format!(
        "{} {} - {}",
        products.len(),
        pluralize(products.len(), "product", "products"),
        sort.label()
    )];
    for product in products {
        lines.push(product_line(product));
        lines.push(format!(
            "    {}",
            truncate(&product.description, DESCRIPTION_PREVIEW)
        ));
    }
    Ok(lines.join("\n"))
}

/// Show one product, its cart quantity and similar products.
///
/// # Errors
///
/// Returns `AppError::NotFound` when no product has this ID.
pub fn show(state: &AppState, id: &str) -> Result<String> {
    let id = ProductId::new(id);
    let product = state
        .catalog()
        .get(&id)
        .ok_or_else(|| AppError::NotFound(format!("Product {id}")))?;

    let mut lines = vec![
        product.name.clone(),
        format!("Price:    {}", product.unit_price()),
        format!("Category: {}", product.category),
        format!("Image:    {}", product.image),
        String::new(),
        product.description.clone(),
    ];

    if let Some(item) = state.cart().get(&id) {
        lines.push(String::new());
        lines.push(format!("In your cart: {}", item.quantity));
    }

    let similar = state.catalog().similar(product);
    if !similar.is_empty() {
        lines.push(String::new());
        lines.push("You might also like:".to_owned());
        lines.extend(similar.into_iter().map(product_line));
    }

    tracing::debug!(product_id = %id, "Product viewed");
    Ok(lines.join("\n"))
}

/// List category filter choices.
pub fn categories(state: &AppState) -> String {
    state.catalog().category_options().join("\n")
}

/// List the featured products.
pub fn featured(state: &AppState) -> String {
    state
        .catalog()
        .featured()
        .iter()
        .map(product_line)
        .collect::<Vec<_>>()
        .join("\n")
}
