//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//!
//! - `SHOPFRONT_DATA_DIR` - Directory for persisted cart/identity (default: .shopfront)
//! - `SHOPFRONT_NETWORK_DELAY_MS` - Simulated login/registration latency (default: 1000)
//! - `SHOPFRONT_CATALOG_DELAY_MS` - Simulated catalog load latency (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate, 0.0-1.0 (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate, 0.0-1.0 (default: 0.0)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::services::SimulatedLatency;

const DEFAULT_DATA_DIR: &str = ".shopfront";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding persisted state
    pub data_dir: PathBuf,
    /// Latency applied to login and registration
    pub network_latency: SimulatedLatency,
    /// Latency applied to the catalog load
    pub catalog_latency: SimulatedLatency,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development")
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            network_latency: SimulatedLatency::new(SimulatedLatency::DEFAULT_DELAY),
            catalog_latency: SimulatedLatency::new(SimulatedLatency::DEFAULT_DELAY),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    fn from_source(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let data_dir = get("SHOPFRONT_DATA_DIR").map_or(defaults.data_dir, PathBuf::from);
        let network_latency = match get("SHOPFRONT_NETWORK_DELAY_MS") {
            Some(raw) => parse_latency("SHOPFRONT_NETWORK_DELAY_MS", &raw)?,
            None => defaults.network_latency,
        };
        let catalog_latency = match get("SHOPFRONT_CATALOG_DELAY_MS") {
            Some(raw) => parse_latency("SHOPFRONT_CATALOG_DELAY_MS", &raw)?,
            None => defaults.catalog_latency,
        };
        let sentry_sample_rate = match get("SENTRY_SAMPLE_RATE") {
            Some(raw) => parse_rate("SENTRY_SAMPLE_RATE", &raw)?,
            None => defaults.sentry_sample_rate,
        };
        let sentry_traces_sample_rate = match get("SENTRY_TRACES_SAMPLE_RATE") {
            Some(raw) => parse_rate("SENTRY_TRACES_SAMPLE_RATE", &raw)?,
            None => defaults.sentry_traces_sample_rate,
        };

        Ok(Self {
            data_dir,
            network_latency,
            catalog_latency,
            sentry_dsn: get("SENTRY_DSN").filter(|dsn| !dsn.is_empty()),
            sentry_environment: get("SENTRY_ENVIRONMENT"),
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Configuration for tests and ephemeral runs: no latency, no Sentry.
    #[must_use]
    pub fn without_latency(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            network_latency: SimulatedLatency::none(),
            catalog_latency: SimulatedLatency::none(),
            ..Self::default()
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a millisecond delay.
fn parse_latency(key: &str, raw: &str) -> Result<SimulatedLatency, ConfigError> {
    let millis = raw
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    Ok(SimulatedLatency::new(Duration::from_millis(millis)))
}

/// Parse a sample rate in the inclusive range 0.0-1.0.
fn parse_rate(key: &str, raw: &str) -> Result<f32, ConfigError> {
    let rate = raw
        .trim()
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if !(0.0..=1.0).contains(&rate) {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ));
    }
    Ok(rate)
}
