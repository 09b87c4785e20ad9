//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod role;

pub use id::*;
pub use price::{CurrencyCode, Price, group_thousands};
pub use role::Role;
