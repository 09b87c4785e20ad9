//! Application state owned by a presentation layer.

use std::sync::Arc;

use tracing::instrument;

use crate::catalog::Catalog;
use crate::config::StorefrontConfig;
use crate::services::AuthService;
use crate::storage::{FileStorage, SharedStorage};
use crate::stores::{CartStore, IdentityStore};

/// Everything a storefront session needs: the loaded catalog, the cart,
/// and the auth service with its identity store.
///
/// The cart and identity stores share one storage handle. Unlike a
/// request-scoped handle this is owned, not cloned: there is exactly one
/// writer per process.
#[derive(Debug)]
pub struct AppState {
    catalog: Catalog,
    cart: CartStore,
    auth: AuthService,
}

impl AppState {
    /// Build state backed by files under `config.data_dir`.
    pub async fn init(config: &StorefrontConfig) -> Self {
        tracing::debug!(data_dir = %config.data_dir.display(), "Using file storage");
        let storage: SharedStorage = Arc::new(FileStorage::new(&config.data_dir));
        Self::with_storage(config, storage).await
    }

    /// Build state over an explicit storage backend.
    ///
    /// Restores the cart and identity, then loads the catalog.
    #[instrument(skip_all)]
    pub async fn with_storage(config: &StorefrontConfig, storage: SharedStorage) -> Self {
        let cart = CartStore::load(Arc::clone(&storage));
        let identity = IdentityStore::load(storage);
        let auth = AuthService::new(identity, config.network_latency);
        let catalog = Catalog::load(config.catalog_latency).await;

        Self {
            catalog,
            cart,
            auth,
        }
    }

    /// Get a reference to the loaded catalog.
    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Get a reference to the cart.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Get a mutable reference to the cart.
    pub const fn cart_mut(&mut self) -> &mut CartStore {
        &mut self.cart
    }

    /// Get a reference to the auth service.
    #[must_use]
    pub const fn auth(&self) -> &AuthService {
        &self.auth
    }

    /// Get a mutable reference to the auth service.
    pub const fn auth_mut(&mut self) -> &mut AuthService {
        &mut self.auth
    }

    /// Borrow the catalog and cart together for add-to-cart flows.
    pub const fn catalog_and_cart(&mut self) -> (&Catalog, &mut CartStore) {
        (&self.catalog, &mut self.cart)
    }
}
