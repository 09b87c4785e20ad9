//! Shopfront Core - Shared types library.
//!
//! This crate provides common types used across all Shopfront components:
//! - `storefront` - Catalog, cart, identity and dashboard state layer
//! - `cli` - Command-line front end over the storefront state layer
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no storage access,
//! no clocks. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices and roles

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
