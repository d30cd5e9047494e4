//! Collaborator trait seams for the external SDK.
//!
//! Everything network-bound is delegated through these traits: transfer
//! construction and submission, fee quoting, attestation retrieval and time.
//! Fake implementations in [`crate::testing`] script them for tests,
//! including adversarial scenarios (negative quotes, attestation timeouts).

use std::time::{Duration, Instant};

use alloy_primitives::{I256, U256};
use async_trait::async_trait;

use crate::chain::ChainName;
use crate::error::Result;
use crate::protocol::VaaId;
use crate::signer::SignerHandle;
use crate::token::TokenReference;
use crate::transfer::outcome::TxId;
use crate::transfer::request::TransferRequest;

/// Projected outcome of a transfer before submission.
///
/// The destination amount is signed: for automatic transfers the relayer fee
/// and any requested native-gas drop are deducted, and the projection goes
/// negative when the transfer amount cannot cover them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferQuote {
    destination_amount: I256,
    relayer_fee: U256,
    native_gas: U256,
}

impl TransferQuote {
    pub fn new(destination_amount: I256, relayer_fee: U256, native_gas: U256) -> Self {
        Self {
            destination_amount,
            relayer_fee,
            native_gas,
        }
    }

    /// Base units expected to arrive on the destination chain, net of fees.
    pub fn destination_amount(&self) -> I256 {
        self.destination_amount
    }

    pub fn relayer_fee(&self) -> U256 {
        self.relayer_fee
    }

    pub fn native_gas(&self) -> U256 {
        self.native_gas
    }

    /// Whether the projected destination amount covers the fee and any
    /// requested native gas.
    pub fn covers_fees(&self) -> bool {
        !self.destination_amount.is_negative()
    }
}

/// The live, stateful object representing one in-flight transfer.
///
/// Returned by [`TokenBridge`] factories; threaded through the three phases
/// and discarded afterwards. Not persisted across process restarts.
#[async_trait]
pub trait TransferHandle: Send + Sync {
    /// Whether a relayer will complete this transfer without the caller.
    fn is_automatic(&self) -> bool;

    /// Submits the transfer on the source chain.
    ///
    /// Returns the source-chain transaction id, optionally followed by the
    /// messaging-layer message id. Irreversible once it resolves.
    async fn initiate(&self, signer: &SignerHandle) -> Result<Vec<TxId>>;

    /// Waits for the signed attestation, bounded by `timeout`.
    ///
    /// Polling cadence within the bound is the SDK's concern; the single call
    /// either resolves with the attestation ids or fails with
    /// [`PortalError::AttestationTimeout`](crate::PortalError::AttestationTimeout).
    async fn fetch_attestation(&self, timeout: Duration) -> Result<Vec<VaaId>>;

    /// Redeems the attested transfer on the destination chain.
    ///
    /// For automatic transfers a relayer may have already redeemed; the SDK
    /// then reports an empty id list rather than an error.
    async fn complete(&self, signer: &SignerHandle) -> Result<Vec<TxId>>;
}

/// Transfer factory, quoting and token metadata: the SDK surface the
/// orchestrator sequences calls against.
#[async_trait]
pub trait TokenBridge: Send + Sync {
    /// Decimal precision of a token on a chain. Native tokens never reach
    /// this lookup; their precision comes from chain configuration.
    async fn decimals(&self, chain: ChainName, token: &TokenReference) -> Result<u8>;

    /// Constructs a token-bridge transfer from the request.
    async fn token_transfer(&self, request: &TransferRequest) -> Result<Box<dyn TransferHandle>>;

    /// Constructs a Circle-bridged USDC transfer from the request.
    async fn circle_transfer(&self, request: &TransferRequest) -> Result<Box<dyn TransferHandle>>;

    /// Reconstructs an in-flight transfer from its originating chain and
    /// source transaction id.
    async fn transfer_from_txid(
        &self,
        chain: ChainName,
        txid: &str,
    ) -> Result<Box<dyn TransferHandle>>;

    /// Projects the destination-side outcome for a pending transfer.
    async fn quote(&self, handle: &dyn TransferHandle) -> Result<TransferQuote>;
}

/// Single attestation-API lookup: `Ok(None)` while the guardians have not
/// signed yet, `Err` for real failures.
#[async_trait]
pub trait VaaSource: Send + Sync {
    async fn fetch_vaa(&self, id: &VaaId) -> Result<Option<crate::protocol::VaaRecord>>;
}

/// Trait for time-based operations.
///
/// Abstracts sleep and time queries so bounded waits can be fast-forwarded in
/// tests without actually waiting.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Asynchronously sleeps for the given duration.
    async fn sleep(&self, duration: Duration);

    /// Returns the current instant in time.
    fn now(&self) -> Instant;
}
