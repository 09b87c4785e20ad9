//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type for operations the presentation layer
//! invokes. Internal failures are captured to Sentry when reported; the
//! shopper only ever sees [`AppError::user_message`].

use thiserror::Error;

use crate::catalog::SortOrderError;
use crate::config::ConfigError;
use crate::services::auth::AuthError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Durable storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// A catalog query could not be parsed.
    #[error("Query error: {0}")]
    Query(#[from] SortOrderError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// No user is signed in.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The signed-in user lacks the required role.
    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl AppError {
    /// Returns `true` for failures that indicate a fault rather than a
    /// rejected request.
    #[must_use]
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Storage(_) | Self::Config(_))
    }

    /// Message safe to show to the end user.
    #[must_use]
    pub fn user_message(&self) -> String {
        // Don't expose internal error details to users
        match self {
            Self::Storage(_) => "Something went wrong saving your data".to_string(),
            Self::Config(err) => err.to_string(),
            Self::Auth(err) => err.to_string(),
            Self::Query(err) => err.to_string(),
            Self::NotFound(what) => format!("{what} not found"),
            Self::Unauthorized(_) => "Please sign in to continue".to_string(),
            Self::Forbidden(_) => "You do not have access to this page".to_string(),
        }
    }

    /// Log the error and capture internal failures to Sentry.
    pub fn report(&self) {
        if self.is_internal() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Operation failed"
            );
        } else {
            tracing::info!(error = %self, "Operation rejected");
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Log and capture a storage failure that does not abort the caller.
///
/// Store writes are fire-and-forget: the in-memory state stays
/// authoritative for the rest of the process.
pub fn capture_storage_error(err: &StorageError, context: &str) {
    let event_id = sentry::capture_error(err);
    tracing::error!(
        error = %err,
        sentry_event_id = %event_id,
        "{context}"
    );
}

/// Set the Sentry user context from a user ID.
///
/// Call this after successful authentication to associate errors with users.
pub fn set_sentry_user(user_id: &impl ToString, email: Option<&str>) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            email: email.map(String::from),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
///
/// Call this on logout to stop associating errors with the user.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("cart", "Item removed from your cart", Some(&[("product_id", "3")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
