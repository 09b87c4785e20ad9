//! Command implementations.
//!
//! Each command renders its result as text; `main` decides where it goes.

pub mod account;
pub mod cart;
pub mod catalog;
pub mod dashboard;
