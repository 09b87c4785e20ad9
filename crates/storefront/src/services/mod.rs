//! Business logic services for the storefront.
//!
//! # Services
//!
//! - `auth` - Demo sign-in, registration and sign-out
//! - `latency` - Simulated network round trip used by async operations

pub mod auth;
pub mod latency;

pub use auth::{AuthError, AuthEvent, AuthService, DemoAccount};
pub use latency::SimulatedLatency;
