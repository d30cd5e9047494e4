use std::time::Duration;

/// Configuration for the attestation phase.
///
/// Controls the single bounded wait for the signed VAA and whether the wait
/// happens at all. A relayer completes automatic transfers on its own, so
/// callers that do not intend to self-redeem can skip the wait entirely.
///
/// # Examples
///
/// ```rust
/// use portal_rs::AttestationConfig;
///
/// // Defaults: wait up to 60 seconds for the attestation
/// let config = AttestationConfig::default();
/// assert_eq!(config.timeout_secs(), 60);
///
/// // Fire-and-forget: let the relayer finish the transfer
/// let config = AttestationConfig::default().with_await_attestation(false);
/// assert!(!config.await_attestation());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttestationConfig {
    timeout_secs: u64,
    await_attestation: bool,
}

impl Default for AttestationConfig {
    /// 60-second bound, attestation awaited unconditionally.
    fn default() -> Self {
        Self {
            timeout_secs: 60,
            await_attestation: true,
        }
    }
}

impl AttestationConfig {
    /// Sets the bound on the attestation wait in seconds.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Sets whether the orchestrator waits for the attestation at all.
    pub fn with_await_attestation(mut self, await_attestation: bool) -> Self {
        self.await_attestation = await_attestation;
        self
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn await_attestation(&self) -> bool {
        self.await_attestation
    }
}
