//! Simulated network latency.

use std::time::Duration;

/// A fixed artificial delay standing in for a network round trip.
///
/// Login, registration and catalog loading await this before resolving.
/// There is no cancellation and no timeout. Tests use
/// [`SimulatedLatency::none`] or tokio's paused clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SimulatedLatency {
    delay: Duration,
}

impl SimulatedLatency {
    /// Delay used when nothing is configured.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

    /// Create a latency hook with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// A hook that resolves immediately.
    #[must_use]
    pub const fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    /// The configured delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Wait for the configured delay.
    pub async fn wait(&self) {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
    }
}
