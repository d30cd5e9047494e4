// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
use std::fmt;
use std::str::FromStr;

use crate::error::PortalError;
use crate::protocol::WormholeChainId;

/// Platform family a chain belongs to.
///
/// The orchestrator is platform-agnostic; platform adapters registered at
/// startup supply everything platform-specific (signer construction, RPC
/// defaults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Platform {
    Evm,
    Solana,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evm => write!(f, "Evm"),
            Self::Solana => write!(f, "Solana"),
        }
    }
}

/// A supported chain, addressable by its human-readable name.
///
/// Names follow the messaging layer's convention: a name like `Avalanche`
/// resolves to the C-Chain on Mainnet and to Fuji on Testnet, while dedicated
/// testnet chains (`Sepolia` and friends) only exist on Testnet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ChainName {
    Ethereum,
    Sepolia,
    Avalanche,
    Arbitrum,
    ArbitrumSepolia,
    Base,
    BaseSepolia,
    Optimism,
    OptimismSepolia,
    Solana,
}

impl ChainName {
    pub const ALL: &'static [ChainName] = &[
        ChainName::Ethereum,
        ChainName::Sepolia,
        ChainName::Avalanche,
        ChainName::Arbitrum,
        ChainName::ArbitrumSepolia,
        ChainName::Base,
        ChainName::BaseSepolia,
        ChainName::Optimism,
        ChainName::OptimismSepolia,
        ChainName::Solana,
    ];

    pub const fn platform(self) -> Platform {
        match self {
            Self::Solana => Platform::Solana,
            _ => Platform::Evm,
        }
    }

    /// Decimal precision of the chain's native gas token.
    pub const fn native_decimals(self) -> u8 {
        match self {
            Self::Solana => 9,
            _ => 18,
        }
    }

    /// The messaging-layer chain ID carried in VAA emitter addresses.
    pub const fn wormhole_chain_id(self) -> WormholeChainId {
        match self {
            Self::Ethereum => WormholeChainId::Ethereum,
            Self::Sepolia => WormholeChainId::Sepolia,
            Self::Avalanche => WormholeChainId::Avalanche,
            Self::Arbitrum => WormholeChainId::Arbitrum,
            Self::ArbitrumSepolia => WormholeChainId::ArbitrumSepolia,
            Self::Base => WormholeChainId::Base,
            Self::BaseSepolia => WormholeChainId::BaseSepolia,
            Self::Optimism => WormholeChainId::Optimism,
            Self::OptimismSepolia => WormholeChainId::OptimismSepolia,
            Self::Solana => WormholeChainId::Solana,
        }
    }

    /// Whether the chain can be resolved within the given environment.
    ///
    /// `Avalanche` and `Solana` exist in both environments (Fuji and devnet on
    /// Testnet); mainnet-named EVM chains only resolve on Mainnet, dedicated
    /// testnet chains only on Testnet.
    pub const fn available_on(self, network: super::Network) -> bool {
        match self {
            Self::Avalanche | Self::Solana => true,
            Self::Ethereum | Self::Arbitrum | Self::Base | Self::Optimism => {
                matches!(network, super::Network::Mainnet)
            }
            Self::Sepolia | Self::ArbitrumSepolia | Self::BaseSepolia | Self::OptimismSepolia => {
                matches!(network, super::Network::Testnet)
            }
        }
    }

    /// Average seconds until a source transaction is considered final, used
    /// only for operator-facing progress reporting.
    pub const fn finality_average_time_seconds(self) -> u64 {
        match self {
            Self::Ethereum | Self::Sepolia => 900,
            Self::Avalanche => 2,
            Self::Arbitrum | Self::ArbitrumSepolia => 1080,
            Self::Base | Self::BaseSepolia => 1080,
            Self::Optimism | Self::OptimismSepolia => 1080,
            Self::Solana => 14,
        }
    }

    /// Prefix used for per-chain environment overrides (`{PREFIX}_RPC_URL`).
    pub const fn env_prefix(self) -> &'static str {
        match self {
            Self::Ethereum => "ETHEREUM",
            Self::Sepolia => "SEPOLIA",
            Self::Avalanche => "AVALANCHE",
            Self::Arbitrum => "ARBITRUM",
            Self::ArbitrumSepolia => "ARBITRUM_SEPOLIA",
            Self::Base => "BASE",
            Self::BaseSepolia => "BASE_SEPOLIA",
            Self::Optimism => "OPTIMISM",
            Self::OptimismSepolia => "OPTIMISM_SEPOLIA",
            Self::Solana => "SOLANA",
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Ethereum => "Ethereum",
            Self::Sepolia => "Sepolia",
            Self::Avalanche => "Avalanche",
            Self::Arbitrum => "Arbitrum",
            Self::ArbitrumSepolia => "ArbitrumSepolia",
            Self::Base => "Base",
            Self::BaseSepolia => "BaseSepolia",
            Self::Optimism => "Optimism",
            Self::OptimismSepolia => "OptimismSepolia",
            Self::Solana => "Solana",
        }
    }
}

impl fmt::Display for ChainName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ChainName {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChainName::ALL
            .iter()
            .find(|chain| chain.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| PortalError::ChainNotSupported {
                chain: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::Network;
    use rstest::rstest;

    #[rstest]
    #[case("Avalanche", ChainName::Avalanche)]
    #[case("avalanche", ChainName::Avalanche)]
    #[case("Solana", ChainName::Solana)]
    #[case("Sepolia", ChainName::Sepolia)]
    fn test_from_str(#[case] input: &str, #[case] expected: ChainName) {
        assert_eq!(input.parse::<ChainName>().unwrap(), expected);
    }

    #[test]
    fn test_from_str_unknown_chain() {
        let result = "Atlantis".parse::<ChainName>();
        assert!(matches!(
            result.unwrap_err(),
            PortalError::ChainNotSupported { .. }
        ));
    }

    #[rstest]
    #[case(ChainName::Solana, 9)]
    #[case(ChainName::Avalanche, 18)]
    #[case(ChainName::Sepolia, 18)]
    fn test_native_decimals(#[case] chain: ChainName, #[case] decimals: u8) {
        assert_eq!(chain.native_decimals(), decimals);
    }

    #[test]
    fn test_availability_by_network() {
        assert!(ChainName::Avalanche.available_on(Network::Testnet));
        assert!(ChainName::Avalanche.available_on(Network::Mainnet));
        assert!(ChainName::Solana.available_on(Network::Testnet));
        assert!(ChainName::Sepolia.available_on(Network::Testnet));
        assert!(!ChainName::Sepolia.available_on(Network::Mainnet));
        assert!(!ChainName::Ethereum.available_on(Network::Testnet));
    }

    #[test]
    fn test_wormhole_chain_ids() {
        assert_eq!(ChainName::Solana.wormhole_chain_id().as_u16(), 1);
        assert_eq!(ChainName::Avalanche.wormhole_chain_id().as_u16(), 6);
        assert_eq!(ChainName::Sepolia.wormhole_chain_id().as_u16(), 10002);
    }
}
