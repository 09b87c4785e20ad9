//! Built-in sample products.

use rust_decimal::Decimal;

use shopfront_core::ProductId;

use crate::models::Product;

const IMAGE_QUERY: &str = "?ixlib=rb-4.0.3&ixid=MnwxMjA3fDB8MHxwaG90by1wYWdlfHx8fGVufDB8fHx8&auto=format&fit=crop&w=800&q=80";

fn product(
    id: &str,
    name: &str,
    description: &str,
    cents: i64,
    photo: &str,
    category: &str,
) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        description: description.to_owned(),
        price: Decimal::new(cents, 2),
        image: format!("https://images.unsplash.com/{photo}{IMAGE_QUERY}"),
        category: category.to_owned(),
    }
}

/// The eight products every storefront starts with.
#[must_use]
pub fn sample_products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Premium Wireless Headphones",
            "Immerse yourself in crystal-clear sound with these premium wireless headphones, featuring active noise cancellation and 30 hours of battery life.",
            29_999,
            "photo-1505740420928-5e560c06d30e",
            "electronics",
        ),
        product(
            "2",
            "Smart Watch Series 5",
            "Stay connected and track your fitness with this elegant smartwatch featuring health monitoring, GPS, and a stunning always-on display.",
            39_999,
            "photo-1523275335684-37898b6baf30",
            "electronics",
        ),
        product(
            "3",
            "Ultra-Slim Laptop Pro",
            "Power through your workday with this ultra-slim laptop featuring a powerful processor, stunning display, and all-day battery life.",
            129_999,
            "photo-1496181133206-80ce9b88a853",
            "electronics",
        ),
        product(
            "4",
            "Ergonomic Office Chair",
            "Work in comfort with this ergonomic office chair, designed to provide optimal support for long hours at your desk.",
            24_999,
            "photo-1580480055273-228ff5388ef8",
            "furniture",
        ),
        product(
            "5",
            "Minimalist Wooden Desk",
            "Enhance your workspace with this sleek, minimalist wooden desk that combines functionality with modern Scandinavian design.",
            39_999,
            "photo-1519710164239-da123dc03ef4",
            "furniture",
        ),
        product(
            "6",
            "Air Purifier Premium",
            "Breathe cleaner air with this advanced air purifier that removes 99.97% of particles, allergens, and odors from your home or office.",
            34_999,
            "photo-1555041469-a586c61ea9bc",
            "home",
        ),
        product(
            "7",
            "Designer Coffee Table",
            "Make a statement with this designer coffee table that combines tempered glass and natural wood for a touch of modern elegance.",
            49_999,
            "photo-1532372576444-dda954194ad0",
            "furniture",
        ),
        product(
            "8",
            "Premium Mechanical Keyboard",
            "Enhance your typing experience with this premium mechanical keyboard featuring customizable RGB lighting and satisfying tactile feedback.",
            14_999,
            "photo-1618384887929-16ec33fab9ef",
            "electronics",
        ),
    ]
}
