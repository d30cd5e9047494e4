// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Wormhole chain ID types for identifying blockchain networks
//!
//! The Wormhole guardian network assigns each supported blockchain a unique
//! chain ID, carried in every VAA's emitter address. This module provides a
//! strongly-typed enum to prevent invalid chain IDs at compile time.
//!
//! Reference: <https://wormhole.com/docs/products/reference/chain-ids/>

use std::fmt;

/// Wormhole chain identifier for blockchain networks
///
/// Testnet deployments of a mainnet chain reuse the mainnet ID (Avalanche
/// Fuji is 6, Solana devnet is 1); dedicated testnet chains such as Sepolia
/// have IDs in the 10000 range.
///
/// # Example
///
/// ```rust
/// use portal_rs::WormholeChainId;
///
/// let solana = WormholeChainId::Solana;
/// assert_eq!(solana.as_u16(), 1);
/// assert_eq!(WormholeChainId::from_u16(2), Some(WormholeChainId::Ethereum));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
#[non_exhaustive]
pub enum WormholeChainId {
    /// Solana mainnet and devnet (Chain ID: 1)
    Solana = 1,
    /// Ethereum mainnet (Chain ID: 2)
    Ethereum = 2,
    /// Avalanche C-Chain and Fuji (Chain ID: 6)
    Avalanche = 6,
    /// Arbitrum One (Chain ID: 23)
    Arbitrum = 23,
    /// Optimism (Chain ID: 24)
    Optimism = 24,
    /// Base (Chain ID: 30)
    Base = 30,
    /// Sepolia testnet (Chain ID: 10002)
    Sepolia = 10002,
    /// Arbitrum Sepolia testnet (Chain ID: 10003)
    ArbitrumSepolia = 10003,
    /// Base Sepolia testnet (Chain ID: 10004)
    BaseSepolia = 10004,
    /// Optimism Sepolia testnet (Chain ID: 10005)
    OptimismSepolia = 10005,
}

impl WormholeChainId {
    /// Returns the numeric chain ID value
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Attempts to create a WormholeChainId from a u16 value
    #[inline]
    pub const fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(Self::Solana),
            2 => Some(Self::Ethereum),
            6 => Some(Self::Avalanche),
            23 => Some(Self::Arbitrum),
            24 => Some(Self::Optimism),
            30 => Some(Self::Base),
            10002 => Some(Self::Sepolia),
            10003 => Some(Self::ArbitrumSepolia),
            10004 => Some(Self::BaseSepolia),
            10005 => Some(Self::OptimismSepolia),
            _ => None,
        }
    }

    /// Returns the chain name as a string
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solana => "Solana",
            Self::Ethereum => "Ethereum",
            Self::Avalanche => "Avalanche",
            Self::Arbitrum => "Arbitrum",
            Self::Optimism => "Optimism",
            Self::Base => "Base",
            Self::Sepolia => "Sepolia",
            Self::ArbitrumSepolia => "ArbitrumSepolia",
            Self::BaseSepolia => "BaseSepolia",
            Self::OptimismSepolia => "OptimismSepolia",
        }
    }
}

impl fmt::Display for WormholeChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<WormholeChainId> for u16 {
    fn from(id: WormholeChainId) -> Self {
        id.as_u16()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(WormholeChainId::Solana, 1)]
    #[case(WormholeChainId::Ethereum, 2)]
    #[case(WormholeChainId::Avalanche, 6)]
    #[case(WormholeChainId::Base, 30)]
    #[case(WormholeChainId::Sepolia, 10002)]
    fn test_chain_id_values(#[case] id: WormholeChainId, #[case] expected: u16) {
        assert_eq!(id.as_u16(), expected);
        assert_eq!(WormholeChainId::from_u16(expected), Some(id));
    }

    #[test]
    fn test_unknown_chain_id() {
        assert_eq!(WormholeChainId::from_u16(0), None);
        assert_eq!(WormholeChainId::from_u16(9999), None);
    }

    #[test]
    fn test_display_uses_chain_name() {
        assert_eq!(WormholeChainId::Solana.to_string(), "Solana");
        assert_eq!(WormholeChainId::BaseSepolia.to_string(), "BaseSepolia");
    }
}
