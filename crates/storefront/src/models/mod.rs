//! Domain models for the storefront.
//!
//! These are the values persisted to durable storage and passed between
//! the stores and the presentation layer.

pub mod cart;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use product::Product;
pub use user::User;
