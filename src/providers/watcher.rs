use std::time::{Duration, Instant};

use async_trait::async_trait;
use bon::Builder;
use tracing::{debug, error, info};

use crate::error::{PortalError, Result};
use crate::protocol::{VaaId, VaaRecord};
use crate::transfer::{Clock, VaaSource};

/// Default seconds between VAA lookups.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// [`Clock`] backed by the system clock and tokio's async sleep; the one the
/// watcher runs on outside of tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

impl TokioClock {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Bounded poll over a [`VaaSource`] until the signed VAA is available.
///
/// This is the building block SDK integrations use to implement the
/// attestation phase: a single call that keeps polling within a deadline and
/// fails with [`PortalError::AttestationTimeout`] when it expires.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use portal_rs::providers::{TokioClock, VaaWatcher, WormholescanClient};
/// use portal_rs::{VaaId, WormholeChainId};
///
/// # async fn example() -> Result<(), portal_rs::PortalError> {
/// let watcher = VaaWatcher::builder()
///     .source(WormholescanClient::testnet())
///     .clock(TokioClock::new())
///     .build();
///
/// let id = VaaId::new(WormholeChainId::Sepolia, "0x00...d9", 7);
/// let record = watcher.wait_for(&id, Duration::from_secs(60)).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Builder)]
pub struct VaaWatcher<S: VaaSource, C: Clock> {
    source: S,
    clock: C,
    #[builder(default = Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS))]
    poll_interval: Duration,
}

impl<S: VaaSource, C: Clock> VaaWatcher<S, C> {
    /// Polls until the signed VAA is available or the deadline passes.
    ///
    /// Rate-limit responses back off for the advertised period when it fits
    /// inside the deadline; every other error aborts immediately.
    pub async fn wait_for(&self, id: &VaaId, timeout: Duration) -> Result<VaaRecord> {
        let started = self.clock.now();
        info!(vaa_id = %id, timeout_secs = timeout.as_secs(), event = "vaa_polling_started");

        loop {
            match self.source.fetch_vaa(id).await {
                Ok(Some(record)) => {
                    info!(vaa_id = %id, event = "vaa_available");
                    return Ok(record);
                }
                Ok(None) => {
                    debug!(vaa_id = %id, event = "vaa_pending");
                    self.sleep_within(started, timeout, self.poll_interval)
                        .await?;
                }
                Err(PortalError::RateLimitExceeded {
                    retry_after_seconds,
                }) => {
                    debug!(sleep_secs = retry_after_seconds, event = "rate_limit_exceeded");
                    self.sleep_within(started, timeout, Duration::from_secs(retry_after_seconds))
                        .await?;
                }
                Err(e) => {
                    error!(error = %e, event = "vaa_fetch_failed");
                    return Err(e);
                }
            }
        }
    }

    async fn sleep_within(
        &self,
        started: Instant,
        timeout: Duration,
        wanted: Duration,
    ) -> Result<()> {
        let elapsed = self.clock.now().saturating_duration_since(started);
        if elapsed + wanted >= timeout {
            error!(
                elapsed_secs = elapsed.as_secs(),
                timeout_secs = timeout.as_secs(),
                event = "vaa_polling_timeout"
            );
            return Err(PortalError::AttestationTimeout);
        }
        self.clock.sleep(wanted).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::WormholeChainId;
    use crate::testing::{FakeClock, FakeVaaSource};

    fn vaa_id() -> VaaId {
        VaaId::new(WormholeChainId::Sepolia, "0xemitter", 1)
    }

    #[tokio::test]
    async fn test_returns_once_signed() {
        let source = FakeVaaSource::new();
        source.push_pending();
        source.push_pending();
        source.push_signed("AQAAAAEN");

        let watcher = VaaWatcher::builder()
            .source(source.clone())
            .clock(FakeClock::new())
            .build();

        let record = watcher
            .wait_for(&vaa_id(), Duration::from_secs(60))
            .await
            .unwrap();
        assert!(record.is_signed());
        assert_eq!(source.fetch_count(), 3);
    }

    #[tokio::test]
    async fn test_times_out_when_never_signed() {
        let source = FakeVaaSource::new();
        let clock = FakeClock::new();

        let watcher = VaaWatcher::builder()
            .source(source.clone())
            .clock(clock.clone())
            .build();

        let result = watcher.wait_for(&vaa_id(), Duration::from_secs(60)).await;
        assert!(matches!(
            result.unwrap_err(),
            PortalError::AttestationTimeout
        ));
        // 5s interval inside a 60s bound: the 12th sleep would cross it.
        assert_eq!(clock.sleep_count(), 11);
    }

    #[tokio::test]
    async fn test_rate_limit_backs_off_then_succeeds() {
        let source = FakeVaaSource::new();
        source.push_rate_limited(10);
        source.push_signed("AQAAAAEN");

        let clock = FakeClock::new();
        let watcher = VaaWatcher::builder()
            .source(source.clone())
            .clock(clock.clone())
            .build();

        let record = watcher
            .wait_for(&vaa_id(), Duration::from_secs(60))
            .await
            .unwrap();
        assert!(record.is_signed());
        assert_eq!(clock.total_sleep_time(), Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_real_failure_aborts() {
        let source = FakeVaaSource::new();
        source.push_failure("boom");

        let watcher = VaaWatcher::builder()
            .source(source)
            .clock(FakeClock::new())
            .build();

        let result = watcher.wait_for(&vaa_id(), Duration::from_secs(60)).await;
        assert!(matches!(result.unwrap_err(), PortalError::Sdk(_)));
    }
}
