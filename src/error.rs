use alloy_primitives::I256;
use thiserror::Error;

use crate::chain::Platform;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Chain not supported: {chain}")]
    ChainNotSupported { chain: String },

    #[error("No adapter registered for platform: {platform}")]
    PlatformNotRegistered { platform: Platform },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Signer error: {0}")]
    Signer(String),

    #[error("Invalid key material: {reason}")]
    InvalidKey { reason: String },

    #[error("Amount parse error: {0}")]
    AmountParse(#[from] alloy_primitives::utils::UnitsError),

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error(
        "Quote insufficient: projected destination amount {projected} does not cover the relayer fee and requested native gas"
    )]
    QuoteInsufficient { projected: I256 },

    #[error("Attestation failed: {reason}")]
    AttestationFailed { reason: String },

    #[error("Rate limit exceeded, retry after {retry_after_seconds} seconds")]
    RateLimitExceeded { retry_after_seconds: u64 },

    #[error("Timeout waiting for attestation")]
    AttestationTimeout,

    #[error("Transaction failed: {reason}")]
    TransactionFailed { reason: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("SDK error: {0}")]
    Sdk(String),

    #[error("Invalid URL: {reason}")]
    InvalidUrl { reason: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PortalError>;
