//! Authentication service.
//!
//! Demo sign-in against two fixed accounts, plus self-registration that
//! fabricates a standard account. Both operations wait on a
//! [`SimulatedLatency`] before resolving.

mod error;

pub use error::AuthError;

use chrono::Utc;
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use shopfront_core::{Role, UserId};

use crate::error::{clear_sentry_user, set_sentry_user};
use crate::models::User;
use crate::services::SimulatedLatency;
use crate::stores::IdentityStore;

/// Email of the built-in administrator account.
pub const ADMIN_EMAIL: &str = "admin@example.com";

/// Email of the built-in shopper account.
pub const USER_EMAIL: &str = "user@example.com";

/// A built-in account accepted by [`AuthService::login`].
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct DemoAccount {
    /// The identity signed in on a successful match.
    pub user: User,
    password: SecretString,
}

impl DemoAccount {
    /// Create a demo account.
    #[must_use]
    pub fn new(user: User, password: &str) -> Self {
        Self {
            user,
            password: SecretString::from(password.to_owned()),
        }
    }

    /// The two accounts every storefront ships with.
    #[must_use]
    pub fn defaults() -> Vec<Self> {
        vec![
            Self::new(
                User {
                    id: UserId::new("admin-1"),
                    email: ADMIN_EMAIL.to_owned(),
                    name: "Admin User".to_owned(),
                    role: Role::Admin,
                },
                "admin",
            ),
            Self::new(
                User {
                    id: UserId::new("user-1"),
                    email: USER_EMAIL.to_owned(),
                    name: "Regular User".to_owned(),
                    role: Role::User,
                },
                "user",
            ),
        ]
    }

    fn matches(&self, email: &str, password: &str) -> bool {
        self.user.email == email && self.password.expose_secret() == password
    }
}

impl std::fmt::Debug for DemoAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DemoAccount")
            .field("user", &self.user)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Outcome of a successful authentication operation.
///
/// The presentation layer decides how to surface these; the service only
/// reports what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// An existing account signed in.
    SignedIn(User),
    /// A new account was created and signed in.
    Registered(User),
    /// The current identity was cleared.
    SignedOut,
}

impl AuthEvent {
    /// Short headline for the event.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::SignedIn(_) => "Login successful",
            Self::Registered(_) => "Registration successful",
            Self::SignedOut => "Logged out",
        }
    }

    /// User-facing detail text.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::SignedIn(user) => match user.role {
                Role::Admin => "Welcome back, Admin!".to_owned(),
                Role::User => "Welcome back, User!".to_owned(),
            },
            Self::Registered(_) => "Your account has been created!".to_owned(),
            Self::SignedOut => "You have been logged out successfully".to_owned(),
        }
    }

    /// The identity that is now signed in, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::SignedIn(user) | Self::Registered(user) => Some(user),
            Self::SignedOut => None,
        }
    }
}

/// Authentication service.
///
/// Owns the [`IdentityStore`] it signs users into.
#[derive(Debug)]
pub struct AuthService {
    identity: IdentityStore,
    latency: SimulatedLatency,
    accounts: Vec<DemoAccount>,
}

impl AuthService {
    /// Create a service with the default demo accounts.
    #[must_use]
    pub fn new(identity: IdentityStore, latency: SimulatedLatency) -> Self {
        Self::with_accounts(identity, latency, DemoAccount::defaults())
    }

    /// Create a service with a custom account list.
    #[must_use]
    pub const fn with_accounts(
        identity: IdentityStore,
        latency: SimulatedLatency,
        accounts: Vec<DemoAccount>,
    ) -> Self {
        Self {
            identity,
            latency,
            accounts,
        }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.identity.current()
    }

    /// Returns `true` when a user is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.identity.is_authenticated()
    }

    /// Returns `true` when the signed-in user is an administrator.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity.is_admin()
    }

    // =========================================================================
    // Sign-in
    // =========================================================================

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the pair matches no demo
    /// account. The current identity is left unchanged.
    #[instrument(skip_all, fields(email_domain = email_domain(email)))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<AuthEvent, AuthError> {
        self.latency.wait().await;

        let Some(account) = self.accounts.iter().find(|a| a.matches(email, password)) else {
            tracing::info!("Login rejected");
            return Err(AuthError::InvalidCredentials);
        };

        let user = account.user.clone();
        self.identity.sign_in(user.clone());
        set_sentry_user(&user.id, Some(&user.email));
        tracing::info!(user_id = %user.id, role = %user.role, "User signed in");

        Ok(AuthEvent::SignedIn(user))
    }

    /// Register a new standard account and sign it in.
    ///
    /// The password is accepted but not stored; demo accounts are the only
    /// ones checked on login.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::EmailInUse` if the email belongs to a demo account.
    #[instrument(skip_all, fields(email_domain = email_domain(email)))]
    pub async fn register(
        &mut self,
        email: &str,
        _password: &str,
        name: &str,
    ) -> Result<AuthEvent, AuthError> {
        self.latency.wait().await;

        if self.accounts.iter().any(|a| a.user.email == email) {
            tracing::info!("Registration rejected, email in use");
            return Err(AuthError::EmailInUse);
        }

        let user = User {
            id: UserId::new(format!("user-{}", Utc::now().timestamp_millis())),
            email: email.to_owned(),
            name: name.to_owned(),
            role: Role::User,
        };
        self.identity.sign_in(user.clone());
        set_sentry_user(&user.id, Some(&user.email));
        tracing::info!(user_id = %user.id, "User registered");

        Ok(AuthEvent::Registered(user))
    }

    // =========================================================================
    // Sign-out
    // =========================================================================

    /// Clear the current identity and its persisted copy.
    pub fn logout(&mut self) -> AuthEvent {
        if let Some(user) = self.identity.sign_out() {
            tracing::info!(user_id = %user.id, "User signed out");
        }
        clear_sentry_user();
        AuthEvent::SignedOut
    }
}

/// The part of an address after the last `@`, safe to record in logs.
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map_or("", |(_, domain)| domain)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::storage::{KeyValueStore, MemoryStorage, SharedStorage, keys};

    #[test]
    fn test_email_domain() {
        assert_eq!(email_domain("admin@example.com"), "example.com");
        assert_eq!(email_domain("a@b@shop.test"), "shop.test");
        assert_eq!(email_domain("no-at-sign"), "");
    }

    fn service() -> (AuthService, SharedStorage) {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let identity = IdentityStore::load(Arc::clone(&storage));
        (
            AuthService::new(identity, SimulatedLatency::none()),
            storage,
        )
    }

    #[tokio::test]
    async fn test_login_admin() {
        let (mut auth, _) = service();

        let event = auth.login("admin@example.com", "admin").await.unwrap();

        let user = event.user().unwrap();
        assert_eq!(user.id.as_str(), "admin-1");
        assert_eq!(user.role, Role::Admin);
        assert!(auth.is_authenticated());
        assert!(auth.is_admin());
        assert_eq!(event.description(), "Welcome back, Admin!");
    }

    #[tokio::test]
    async fn test_login_regular_user() {
        let (mut auth, _) = service();

        let event = auth.login("user@example.com", "user").await.unwrap();

        assert_eq!(event.user().unwrap().name, "Regular User");
        assert!(auth.is_authenticated());
        assert!(!auth.is_admin());
    }

    #[tokio::test]
    async fn test_login_wrong_password() {
        let (mut auth, storage) = service();

        let err = auth.login("admin@example.com", "user").await.unwrap_err();

        assert_eq!(err, AuthError::InvalidCredentials);
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!auth.is_authenticated());
        assert!(storage.get(keys::USER).unwrap().is_none());
    }

    #[tokio::test]
    async fn test_failed_login_keeps_existing_identity() {
        let (mut auth, _) = service();
        auth.login("user@example.com", "user").await.unwrap();

        let result = auth.login("nobody@example.com", "nope").await;

        assert!(result.is_err());
        assert_eq!(auth.current_user().unwrap().id.as_str(), "user-1");
    }

    #[tokio::test]
    async fn test_login_persists_identity() {
        let (mut auth, storage) = service();
        auth.login("admin@example.com", "admin").await.unwrap();

        let reloaded = IdentityStore::load(storage);
        assert_eq!(reloaded.current(), auth.current_user());
    }

    #[tokio::test]
    async fn test_register_reserved_email() {
        let (mut auth, _) = service();

        for email in [ADMIN_EMAIL, USER_EMAIL] {
            let err = auth.register(email, "pw", "Someone").await.unwrap_err();
            assert_eq!(err, AuthError::EmailInUse);
            assert_eq!(err.to_string(), "Email already in use");
        }
        assert!(!auth.is_authenticated());
    }

    #[tokio::test]
    async fn test_register_new_user() {
        let (mut auth, _) = service();

        let event = auth
            .register("jane@example.org", "secret", "Jane")
            .await
            .unwrap();

        let user = event.user().unwrap();
        assert_eq!(user.email, "jane@example.org");
        assert_eq!(user.name, "Jane");
        assert_eq!(user.role, Role::User);
        assert!(user.id.as_str().starts_with("user-"));
        assert_eq!(auth.current_user(), Some(user));
        assert!(!auth.is_admin());
    }

    #[tokio::test]
    async fn test_logout_clears_storage() {
        let (mut auth, storage) = service();
        auth.login("user@example.com", "user").await.unwrap();

        let event = auth.logout();

        assert_eq!(event, AuthEvent::SignedOut);
        assert!(!auth.is_authenticated());
        assert!(storage.get(keys::USER).unwrap().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_latency() {
        let storage: SharedStorage = Arc::new(MemoryStorage::new());
        let mut auth = AuthService::new(
            IdentityStore::load(storage),
            SimulatedLatency::new(SimulatedLatency::DEFAULT_DELAY),
        );
        let start = tokio::time::Instant::now();

        auth.login("user@example.com", "user").await.unwrap();

        assert!(start.elapsed() >= SimulatedLatency::DEFAULT_DELAY);
    }

    #[test]
    fn test_demo_account_debug_redacts_password() {
        let debug_output = format!("{:?}", DemoAccount::defaults());

        assert!(debug_output.contains("admin@example.com"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("password: \"admin\""));
    }
}
