//! Test utilities and fake implementations of the collaborator seams.
//!
//! This module provides fake/mock implementations of the transfer traits that
//! enable comprehensive testing including adversarial scenarios without
//! requiring actual blockchain or API interactions.
//!
//! The fakes are designed to be used in integration tests to verify the
//! behavior of the [`TransferOrchestrator`](crate::TransferOrchestrator)
//! under various conditions like negative quotes, attestation timeouts and
//! completion races.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use alloy_primitives::{I256, U256};
use async_trait::async_trait;

use crate::chain::{ChainEndpoint, ChainName, Network};
use crate::error::{PortalError, Result};
use crate::protocol::{VaaId, VaaRecord, WormholeChainId};
use crate::signer::{KeyMaterial, SignerHandle};
use crate::token::TokenReference;
use crate::transfer::{
    Clock, TokenBridge, TransferHandle, TransferQuote, TransferRequest, TxId, VaaSource,
};

/// Builds a signer handle suitable for tests, without any real key material.
pub fn test_signer(chain: ChainName) -> SignerHandle {
    let endpoint = ChainEndpoint::new(
        chain,
        Network::Testnet,
        url::Url::parse("http://localhost:8545").unwrap(),
    );
    SignerHandle::new(
        endpoint,
        format!("{chain}-test-address"),
        KeyMaterial::new("test-key"),
        None,
    )
}

/// Shared, ordered record of collaborator calls.
///
/// The bridge and every handle it creates share one recorder, so tests can
/// assert cross-object ordering (quote before initiate, attest before
/// complete) as well as per-call counts.
#[derive(Clone, Debug, Default)]
pub struct CallRecorder {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, name: &str) {
        self.calls.lock().unwrap().push(name.to_string());
    }

    /// All calls in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, name: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| call.as_str() == name)
            .count()
    }
}

/// Scripted attestation behavior for a fake transfer handle.
#[derive(Clone, Debug)]
pub enum FakeAttestation {
    /// Resolve immediately with these attestation ids.
    Immediate(Vec<VaaId>),
    /// Never resolve within any bound; the wait fails with
    /// [`PortalError::AttestationTimeout`].
    NeverResolves,
    /// Fail with [`PortalError::AttestationFailed`].
    Fails(String),
}

/// Script controlling what a [`FakeTransferHandle`] returns at each phase.
#[derive(Clone, Debug)]
pub struct FakeHandleScript {
    pub automatic: bool,
    pub source_txids: Vec<TxId>,
    pub attestation: FakeAttestation,
    pub destination_txids: Vec<TxId>,
}

impl Default for FakeHandleScript {
    fn default() -> Self {
        Self {
            automatic: true,
            source_txids: vec!["0xsrc".to_string(), "0xmsg".to_string()],
            attestation: FakeAttestation::Immediate(vec![VaaId::new(
                WormholeChainId::Sepolia,
                "0xemitter",
                1,
            )]),
            destination_txids: vec!["0xdst".to_string()],
        }
    }
}

/// A fake in-flight transfer following a pre-configured script.
#[derive(Clone, Debug)]
pub struct FakeTransferHandle {
    script: FakeHandleScript,
    recorder: CallRecorder,
    last_attestation_timeout: Arc<Mutex<Option<Duration>>>,
}

impl FakeTransferHandle {
    pub fn new(script: FakeHandleScript, recorder: CallRecorder) -> Self {
        Self {
            script,
            recorder,
            last_attestation_timeout: Arc::new(Mutex::new(None)),
        }
    }

    fn with_timeout_slot(
        script: FakeHandleScript,
        recorder: CallRecorder,
        slot: Arc<Mutex<Option<Duration>>>,
    ) -> Self {
        Self {
            script,
            recorder,
            last_attestation_timeout: slot,
        }
    }
}

#[async_trait]
impl TransferHandle for FakeTransferHandle {
    fn is_automatic(&self) -> bool {
        self.script.automatic
    }

    async fn initiate(&self, _signer: &SignerHandle) -> Result<Vec<TxId>> {
        self.recorder.record("initiate");
        Ok(self.script.source_txids.clone())
    }

    async fn fetch_attestation(&self, timeout: Duration) -> Result<Vec<VaaId>> {
        self.recorder.record("fetch_attestation");
        *self.last_attestation_timeout.lock().unwrap() = Some(timeout);
        match &self.script.attestation {
            FakeAttestation::Immediate(ids) => Ok(ids.clone()),
            FakeAttestation::NeverResolves => Err(PortalError::AttestationTimeout),
            FakeAttestation::Fails(reason) => Err(PortalError::AttestationFailed {
                reason: reason.clone(),
            }),
        }
    }

    async fn complete(&self, _signer: &SignerHandle) -> Result<Vec<TxId>> {
        self.recorder.record("complete");
        Ok(self.script.destination_txids.clone())
    }
}

/// A fake SDK bridge that hands out scripted handles and quotes.
///
/// All clones share state, so a test can keep one instance for configuration
/// and assertions while the orchestrator owns another.
#[derive(Clone, Debug)]
pub struct FakeTokenBridge {
    recorder: CallRecorder,
    quote: Arc<Mutex<TransferQuote>>,
    script: Arc<Mutex<FakeHandleScript>>,
    last_attestation_timeout: Arc<Mutex<Option<Duration>>>,
}

impl Default for FakeTokenBridge {
    fn default() -> Self {
        Self {
            recorder: CallRecorder::new(),
            quote: Arc::new(Mutex::new(TransferQuote::new(
                I256::try_from(990_000).expect("fits in 256 bits"),
                U256::from(10_000u64),
                U256::ZERO,
            ))),
            script: Arc::new(Mutex::new(FakeHandleScript::default())),
            last_attestation_timeout: Arc::new(Mutex::new(None)),
        }
    }
}

impl FakeTokenBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the quote returned for every pending transfer.
    pub fn set_quote(&self, quote: TransferQuote) {
        *self.quote.lock().unwrap() = quote;
    }

    /// Replaces the script used for every handle created from now on.
    pub fn set_handle_script(&self, script: FakeHandleScript) {
        *self.script.lock().unwrap() = script;
    }

    pub fn recorder(&self) -> &CallRecorder {
        &self.recorder
    }

    /// The bound passed to the most recent attestation wait, across every
    /// handle this bridge created.
    pub fn last_attestation_timeout(&self) -> Option<Duration> {
        *self.last_attestation_timeout.lock().unwrap()
    }

    fn make_handle(&self) -> Box<dyn TransferHandle> {
        Box::new(FakeTransferHandle::with_timeout_slot(
            self.script.lock().unwrap().clone(),
            self.recorder.clone(),
            self.last_attestation_timeout.clone(),
        ))
    }
}

#[async_trait]
impl TokenBridge for FakeTokenBridge {
    async fn decimals(&self, _chain: ChainName, _token: &TokenReference) -> Result<u8> {
        self.recorder.record("decimals");
        Ok(6)
    }

    async fn token_transfer(&self, _request: &TransferRequest) -> Result<Box<dyn TransferHandle>> {
        self.recorder.record("token_transfer");
        Ok(self.make_handle())
    }

    async fn circle_transfer(&self, _request: &TransferRequest) -> Result<Box<dyn TransferHandle>> {
        self.recorder.record("circle_transfer");
        Ok(self.make_handle())
    }

    async fn transfer_from_txid(
        &self,
        _chain: ChainName,
        _txid: &str,
    ) -> Result<Box<dyn TransferHandle>> {
        self.recorder.record("transfer_from_txid");
        Ok(self.make_handle())
    }

    async fn quote(&self, _handle: &dyn TransferHandle) -> Result<TransferQuote> {
        self.recorder.record("quote");
        Ok(*self.quote.lock().unwrap())
    }
}

/// Scripted single-lookup VAA source.
///
/// Each fetch consumes the next scripted response; once the script is
/// exhausted every further fetch reports the VAA as still pending.
#[derive(Clone, Debug, Default)]
pub struct FakeVaaSource {
    responses: Arc<Mutex<Vec<FakeVaaResponse>>>,
    fetches: Arc<Mutex<usize>>,
}

#[derive(Clone, Debug)]
enum FakeVaaResponse {
    Pending,
    Signed(String),
    RateLimited(u64),
    Failure(String),
}

impl FakeVaaSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pending(&self) {
        self.responses.lock().unwrap().push(FakeVaaResponse::Pending);
    }

    pub fn push_signed(&self, vaa_base64: &str) {
        self.responses
            .lock()
            .unwrap()
            .push(FakeVaaResponse::Signed(vaa_base64.to_string()));
    }

    pub fn push_rate_limited(&self, retry_after_seconds: u64) {
        self.responses
            .lock()
            .unwrap()
            .push(FakeVaaResponse::RateLimited(retry_after_seconds));
    }

    pub fn push_failure(&self, reason: &str) {
        self.responses
            .lock()
            .unwrap()
            .push(FakeVaaResponse::Failure(reason.to_string()));
    }

    pub fn fetch_count(&self) -> usize {
        *self.fetches.lock().unwrap()
    }
}

#[async_trait]
impl VaaSource for FakeVaaSource {
    async fn fetch_vaa(&self, _id: &VaaId) -> Result<Option<VaaRecord>> {
        *self.fetches.lock().unwrap() += 1;

        let mut responses = self.responses.lock().unwrap();
        let next = if responses.is_empty() {
            FakeVaaResponse::Pending
        } else {
            responses.remove(0)
        };
        drop(responses);

        match next {
            FakeVaaResponse::Pending => Ok(None),
            FakeVaaResponse::Signed(vaa) => {
                let record: VaaRecord = serde_json::from_value(serde_json::json!({
                    "vaa": vaa,
                    "sequence": 1,
                }))?;
                Ok(Some(record))
            }
            FakeVaaResponse::RateLimited(retry_after_seconds) => {
                Err(PortalError::RateLimitExceeded {
                    retry_after_seconds,
                })
            }
            FakeVaaResponse::Failure(reason) => Err(PortalError::Sdk(reason)),
        }
    }
}

/// A fake clock that advances instantly instead of sleeping.
///
/// Tracks every sleep so tests can assert polling cadence and total waits
/// without real delays.
#[derive(Clone, Debug)]
pub struct FakeClock {
    start: Instant,
    advanced: Arc<Mutex<Duration>>,
    sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl Default for FakeClock {
    fn default() -> Self {
        Self {
            start: Instant::now(),
            advanced: Arc::new(Mutex::new(Duration::ZERO)),
            sleeps: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sleeps performed.
    pub fn sleep_count(&self) -> usize {
        self.sleeps.lock().unwrap().len()
    }

    /// Sum of every slept duration.
    pub fn total_sleep_time(&self) -> Duration {
        self.sleeps.lock().unwrap().iter().sum()
    }
}

#[async_trait]
impl Clock for FakeClock {
    async fn sleep(&self, duration: Duration) {
        *self.advanced.lock().unwrap() += duration;
        self.sleeps.lock().unwrap().push(duration);
    }

    fn now(&self) -> Instant {
        self.start + *self.advanced.lock().unwrap()
    }
}
