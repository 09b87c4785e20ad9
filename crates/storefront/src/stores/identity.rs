//! Identity store: the single signed-in user.

use crate::error::capture_storage_error;
use crate::models::User;
use crate::storage::{KeyValueStore, SharedStorage, keys, load_json, save_json};

/// Holds the current identity and mirrors it to durable storage.
///
/// Zero or one user is live at a time. Malformed persisted data is
/// discarded and the store starts signed out.
#[derive(Debug)]
pub struct IdentityStore {
    storage: SharedStorage,
    user: Option<User>,
}

impl IdentityStore {
    /// Restore the identity from storage.
    #[must_use]
    pub fn load(storage: SharedStorage) -> Self {
        let user = match load_json::<User>(&*storage, keys::USER) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "Discarding persisted identity");
                None
            }
        };

        Self { storage, user }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns `true` when a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Returns `true` when the signed-in user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }

    /// Replace the current identity and persist it.
    pub fn sign_in(&mut self, user: User) {
        if let Err(e) = save_json(&*self.storage, keys::USER, &user) {
            capture_storage_error(&e, "Failed to persist identity");
        }
        self.user = Some(user);
    }

    /// Clear the current identity and its persisted copy.
    ///
    /// Returns the user that was signed in.
    pub fn sign_out(&mut self) -> Option<User> {
        if let Err(e) = self.storage.remove(keys::USER) {
            capture_storage_error(&e, "Failed to clear persisted identity");
        }
        self.user.take()
    }
}
