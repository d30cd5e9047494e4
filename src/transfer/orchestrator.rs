use bon::Builder;
use tracing::{debug, error, info};

use crate::chain::ChainName;
use crate::error::{PortalError, Result};
use crate::signer::SignerHandle;
use crate::spans;
use crate::token::TokenReference;
use crate::transfer::options::AttestationConfig;
use crate::transfer::outcome::{TransferReceipt, TransferState, TxId};
use crate::transfer::request::TransferRequest;
use crate::transfer::traits::{TokenBridge, TransferHandle};

/// Drives a cross-chain token transfer through its three ordered phases.
///
/// Phases are strictly sequential and each depends on the success of the
/// previous one: a quote-gated source-chain submission, a bounded wait for
/// the signed attestation, and the destination-chain redemption. Any phase's
/// error aborts the run; there is no retry and no compensation — a failure
/// after submission leaves an on-chain transaction that
/// [`recover`](Self::recover) can later resume from.
///
/// # Example
///
/// ```rust,no_run
/// # use portal_rs::{
/// #     DeliveryOptions, PortalError, TokenReference, TransferAmount, TransferOrchestrator,
/// #     TransferRequest,
/// # };
/// # async fn example(
/// #     bridge: impl portal_rs::TokenBridge,
/// #     source: portal_rs::SignerHandle,
/// #     destination: portal_rs::SignerHandle,
/// # ) -> Result<(), PortalError> {
/// let orchestrator = TransferOrchestrator::builder()
///     .bridge(bridge)
///     .source(source)
///     .destination(destination)
///     .build();
///
/// let request = TransferRequest::builder()
///     .token(TokenReference::native())
///     .amount(TransferAmount::parse("0.01", 18)?)
///     .source_address(orchestrator.source().address().to_string())
///     .destination_address(orchestrator.destination().address().to_string())
///     .delivery(DeliveryOptions::automatic(None))
///     .build();
///
/// let receipt = orchestrator.transfer(&request).await?;
/// println!("completed: {:?}", receipt.destination_txids());
/// # Ok(())
/// # }
/// ```
#[derive(Builder)]
pub struct TransferOrchestrator<B: TokenBridge> {
    bridge: B,
    source: SignerHandle,
    destination: SignerHandle,
    #[builder(default)]
    attestation: AttestationConfig,
}

impl<B: TokenBridge> TransferOrchestrator<B> {
    pub fn source(&self) -> &SignerHandle {
        &self.source
    }

    pub fn destination(&self) -> &SignerHandle {
        &self.destination
    }

    pub fn attestation(&self) -> &AttestationConfig {
        &self.attestation
    }

    /// Decimal precision for a token on a chain.
    ///
    /// The native-asset marker short-circuits to the chain's configured
    /// decimals; concrete token contracts go through the SDK lookup.
    pub async fn token_decimals(&self, chain: ChainName, token: &TokenReference) -> Result<u8> {
        match token {
            TokenReference::Native => Ok(chain.native_decimals()),
            token => self.bridge.decimals(chain, token).await,
        }
    }

    /// Runs a token-bridge transfer through all three phases.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<TransferReceipt> {
        let span = spans::transfer(
            self.source.chain(),
            self.destination.chain(),
            request.token(),
            request.delivery().is_automatic(),
        );
        let _guard = span.enter();

        request.validate()?;
        let handle = self.bridge.token_transfer(request).await?;
        self.run(handle.as_ref(), request).await
    }

    /// Runs a Circle-bridged USDC transfer through all three phases.
    pub async fn transfer_usdc(&self, request: &TransferRequest) -> Result<TransferReceipt> {
        let span = spans::transfer(
            self.source.chain(),
            self.destination.chain(),
            request.token(),
            request.delivery().is_automatic(),
        );
        let _guard = span.enter();

        request.validate()?;
        let handle = self.bridge.circle_transfer(request).await?;
        self.run(handle.as_ref(), request).await
    }

    /// Resumes an in-flight transfer from its source transaction id.
    ///
    /// Replaces the initiate phase with handle reconstruction; attestation
    /// and completion then run exactly as in [`transfer`](Self::transfer).
    pub async fn recover(&self, chain: ChainName, txid: &str) -> Result<TransferReceipt> {
        let span = spans::recover(chain, txid);
        let _guard = span.enter();

        let handle = self.bridge.transfer_from_txid(chain, txid).await?;
        info!(chain = %chain, txid = %txid, event = "transfer_recovered");

        self.attest_and_complete(handle.as_ref(), TransferState::Recovered, Vec::new())
            .await
    }

    async fn run(
        &self,
        handle: &dyn TransferHandle,
        request: &TransferRequest,
    ) -> Result<TransferReceipt> {
        debug!(state = %TransferState::Created, event = "state_transition");

        // Quote gate: an automatic transfer whose projected destination
        // amount is negative must never reach the source chain.
        {
            let quote_span = spans::quote(self.source.chain(), self.destination.chain());
            let _quote_guard = quote_span.enter();

            let quote = self.bridge.quote(handle).await?;
            info!(
                destination_amount = %quote.destination_amount(),
                relayer_fee = %quote.relayer_fee(),
                native_gas = %quote.native_gas(),
                event = "quote_received"
            );

            if request.delivery().is_automatic() && !quote.covers_fees() {
                let projected = quote.destination_amount();
                spans::record_error_with_context(
                    "QuoteInsufficient",
                    "Projected destination amount is negative",
                    Some("The amount requested is too low to cover the fee and any native gas requested"),
                );
                error!(
                    destination_amount = %projected,
                    event = "quote_insufficient"
                );
                return Err(PortalError::QuoteInsufficient { projected });
            }
        }

        let source_txids = {
            let initiate_span = spans::initiate(self.source.chain());
            let _initiate_guard = initiate_span.enter();

            let txids = handle.initiate(&self.source).await?;
            info!(
                source_txid = txids.first().map(String::as_str).unwrap_or_default(),
                message_id = txids.get(1).or_else(|| txids.first()).map(String::as_str).unwrap_or_default(),
                event = "transfer_initiated"
            );
            txids
        };

        self.attest_and_complete(handle, TransferState::Initiated, source_txids)
            .await
    }

    async fn attest_and_complete(
        &self,
        handle: &dyn TransferHandle,
        entry_state: TransferState,
        source_txids: Vec<TxId>,
    ) -> Result<TransferReceipt> {
        debug!(state = %entry_state, event = "state_transition");

        let attestation_ids = if self.attestation.await_attestation() {
            let attest_span = spans::fetch_attestation(self.attestation.timeout_secs());
            let _attest_guard = attest_span.enter();

            let ids = match handle.fetch_attestation(self.attestation.timeout()).await {
                Ok(ids) => ids,
                Err(e) => {
                    spans::record_error_with_context(
                        "AttestationFailed",
                        &e.to_string(),
                        Some("The source transaction is already on-chain; resume with recover() once the attestation is available"),
                    );
                    error!(error = %e, state = %TransferState::Failed, event = "attestation_wait_failed");
                    return Err(e);
                }
            };
            debug!(state = %TransferState::Attested, event = "state_transition");
            info!(count = ids.len(), event = "attestation_received");
            ids
        } else {
            debug!(event = "attestation_wait_skipped");
            Vec::new()
        };

        let destination_txids = {
            let complete_span = spans::complete(self.destination.chain());
            let _complete_guard = complete_span.enter();

            let txids = handle.complete(&self.destination).await?;
            if txids.is_empty() {
                // Relayer won the race on an automatic transfer.
                debug!(event = "completion_already_redeemed");
            }
            info!(
                destination_txids = ?txids,
                event = "transfer_completed"
            );
            txids
        };

        debug!(state = %TransferState::Completed, event = "state_transition");
        Ok(TransferReceipt::new(
            TransferState::Completed,
            source_txids,
            attestation_ids,
            destination_txids,
        ))
    }
}
