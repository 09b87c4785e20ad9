//! Integration tests for Shopfront.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shopfront-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_properties` - Cart algebra over arbitrary mutation sequences
//! - `auth_flow` - Demo sign-in, registration and sign-out
//! - `catalog_queries` - Search, category and sort pipeline
//! - `persistence` - State surviving a restart, corrupt data recovery
//! - `dashboard_access` - Admin gating of the analytics report
//!
//! Every test owns its storage, so tests run in parallel without sharing
//! state.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;
use std::sync::Arc;

use shopfront_storefront::config::StorefrontConfig;
use shopfront_storefront::state::AppState;
use shopfront_storefront::storage::{FileStorage, KeyValueStore, MemoryStorage, SharedStorage};

/// A storage backend plus configuration that can boot [`AppState`]
/// repeatedly, simulating process restarts.
#[derive(Debug)]
pub struct TestContext {
    pub storage: SharedStorage,
    config: StorefrontConfig,
}

impl TestContext {
    /// Context backed by in-memory storage.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            storage: Arc::new(MemoryStorage::new()),
            config: StorefrontConfig::without_latency("unused"),
        }
    }

    /// Context backed by JSON files under `dir`, typically a
    /// `tempfile::TempDir` owned by the test.
    #[must_use]
    pub fn on_disk(dir: &Path) -> Self {
        Self {
            storage: Arc::new(FileStorage::new(dir)),
            config: StorefrontConfig::without_latency(dir),
        }
    }

    /// Start a fresh application over this context's storage.
    pub async fn boot(&self) -> AppState {
        AppState::with_storage(&self.config, Arc::clone(&self.storage)).await
    }

    /// Read a persisted blob directly.
    #[must_use]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.storage.get(key).ok().flatten()
    }

    /// Write a persisted blob directly.
    ///
    /// # Panics
    ///
    /// Panics if the backend rejects the write.
    #[allow(clippy::unwrap_used)]
    pub fn write_raw(&self, key: &str, value: &str) {
        self.storage.set(key, value).unwrap();
    }
}
