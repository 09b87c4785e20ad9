//! Client-side state stores.
//!
//! Each store owns its in-memory state and a handle to durable storage
//! supplied by the caller. State is restored on construction and written
//! back synchronously after every mutation.

pub mod cart;
pub mod identity;

pub use cart::{CartEvent, CartStore};
pub use identity::IdentityStore;
