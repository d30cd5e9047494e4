//! # portal-rs
//!
//! A production-ready Rust orchestrator for Wormhole-style cross-chain token
//! transfers.
//!
//! This library sequences a token transfer (native assets or Circle-bridged
//! USDC) through three ordered phases against a pluggable chain-abstraction
//! SDK: submit on the source chain, wait for the signed attestation (VAA),
//! and redeem on the destination chain. Everything network-bound — signing,
//! RPC access, attestation production, contract interaction — stays behind
//! the collaborator traits; this crate owns the sequencing, the quote gate
//! and the amount normalization.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use portal_rs::{
//!     DeliveryOptions, EnvConfig, EvmPlatform, Network, PlatformRegistry, PortalError,
//!     SolanaPlatform, TokenReference, TransferAmount, TransferOrchestrator, TransferRequest,
//! };
//!
//! # async fn example(bridge: impl portal_rs::TokenBridge) -> Result<(), PortalError> {
//! // Resolve chains against the platforms registered for this run
//! let config = EnvConfig::from_env();
//! let registry = PlatformRegistry::new(
//!     Network::Testnet,
//!     vec![Box::new(EvmPlatform::new()), Box::new(SolanaPlatform::new())],
//! );
//!
//! let send_chain = registry.chain_with_config("Avalanche", &config)?;
//! let rcv_chain = registry.chain_with_config("Solana", &config)?;
//!
//! let source = registry.signer(&send_chain, &config).await?;
//! let destination = registry.signer(&rcv_chain, &config).await?;
//!
//! // 0.01 USDC at 6 decimals, delivered by the relayer
//! let amount = TransferAmount::parse("0.01", 6)?;
//! let request = TransferRequest::builder()
//!     .token(TokenReference::contract(
//!         send_chain.name(),
//!         "0x5425890298aed601595a70ab815c96711a31bc65",
//!     ))
//!     .amount(amount)
//!     .source_address(source.address().to_string())
//!     .destination_address(destination.address().to_string())
//!     .delivery(DeliveryOptions::automatic(Some(TransferAmount::parse("0.01", 6)?)))
//!     .build();
//!
//! // `bridge` is any TokenBridge implementation wrapping your SDK
//! let orchestrator = TransferOrchestrator::builder()
//!     .bridge(bridge)
//!     .source(source)
//!     .destination(destination)
//!     .build();
//!
//! let receipt = orchestrator.transfer(&request).await?;
//! println!("source tx: {:?}", receipt.source_txid());
//! println!("destination txs: {:?}", receipt.destination_txids());
//! # Ok(())
//! # }
//! ```
//!
//! ## Recovery
//!
//! A transfer interrupted after submission can be resumed from its source
//! transaction id; attestation and completion then run identically:
//!
//! ```rust,ignore
//! let receipt = orchestrator.recover(send_chain.name(), "0xabc123...").await?;
//! ```
//!
//! ## Features
//!
//! - **Strict phase ordering** with no retry and no compensation — failures
//!   surface immediately and recovery picks up from on-chain state
//! - **Quote gate** that refuses to submit an automatic transfer whose
//!   projected destination amount is negative
//! - **Platform adapters** registered at startup; the orchestrator depends
//!   only on the abstract contract
//! - **Explicit configuration** threaded by parameter, never read ambiently
//! - **Comprehensive fakes** in [`testing`] for adversarial scenarios
//!
//! ## Public API
//!
//! - [`TransferOrchestrator`] - the three-phase transfer flow and recovery
//! - [`TokenBridge`], [`TransferHandle`] - the SDK collaborator seams
//! - [`PlatformRegistry`], [`EvmPlatform`], [`SolanaPlatform`] - chain resolution
//! - [`TransferAmount`] - decimal-string ↔ base-unit codec
//! - [`PortalError`] and [`Result`] - error types for error handling

mod amount;
mod chain;
mod error;
mod platform;
mod protocol;
mod signer;
mod token;
mod transfer;

// Public API - minimal surface for stability
pub use amount::{normalize, TransferAmount};
pub use chain::{ChainEndpoint, ChainName, Network, Platform};
pub use error::{PortalError, Result};
pub use platform::{EvmPlatform, PlatformAdapter, PlatformRegistry, SolanaPlatform};
pub use protocol::{VaaId, VaaRecord, VaaResponse, WormholeChainId};
pub use signer::{EnvConfig, KeyMaterial, SignerHandle};
pub use token::TokenReference;
pub use transfer::{
    AttestationConfig, Clock, DeliveryOptions, TokenBridge, TransferHandle, TransferOrchestrator,
    TransferQuote, TransferReceipt, TransferRequest, TransferState, TxId, VaaSource,
};

// Production implementations of the collaborator seams
pub mod providers;

// Public module for advanced users who need custom instrumentation
pub mod spans;

// Fakes for integration testing against the collaborator seams
pub mod testing;
