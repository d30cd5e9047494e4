//! Token references scoped to a chain.

use std::fmt;

use crate::chain::ChainName;

/// Identifies the asset being moved: either the source chain's native token or
/// a concrete token contract on a specific chain.
///
/// # Example
///
/// ```rust
/// use portal_rs::{ChainName, TokenReference};
///
/// let native = TokenReference::native();
/// let usdc = TokenReference::contract(
///     ChainName::Avalanche,
///     "0x5425890298aed601595a70ab815c96711a31bc65",
/// );
/// assert!(native.is_native());
/// assert!(!usdc.is_native());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenReference {
    /// The native gas token of the source chain.
    Native,
    /// A token contract address scoped to a chain. The address format is
    /// platform-specific (hex for EVM, base58 for Solana).
    Contract { chain: ChainName, address: String },
}

impl TokenReference {
    pub fn native() -> Self {
        Self::Native
    }

    pub fn contract(chain: ChainName, address: impl Into<String>) -> Self {
        Self::Contract {
            chain,
            address: address.into(),
        }
    }

    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native)
    }

    /// The contract address, when this is not a native-asset marker.
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Native => None,
            Self::Contract { address, .. } => Some(address),
        }
    }
}

impl fmt::Display for TokenReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Contract { chain, address } => write!(f, "{chain}:{address}"),
        }
    }
}
