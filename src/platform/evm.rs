use alloy_chains::NamedChain;
use alloy_signer_local::PrivateKeySigner;
use async_trait::async_trait;
use url::Url;

use crate::chain::{ChainEndpoint, ChainName, Network, Platform};
use crate::error::{PortalError, Result};
use crate::signer::{EnvConfig, SignerHandle};

use super::PlatformAdapter;

/// Platform adapter for EVM chains.
///
/// Derives the signer address from the configured `ETH_PRIVATE_KEY` and tags
/// the handle with the EIP-155 chain id the SDK signs under.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvmPlatform;

impl EvmPlatform {
    pub fn new() -> Self {
        Self
    }

    /// Maps a chain name within an environment onto the canonical EVM chain.
    ///
    /// `Avalanche` on Testnet is Fuji; dedicated testnet names map directly.
    pub fn named_chain(chain: ChainName, network: Network) -> Result<NamedChain> {
        let named = match (chain, network) {
            (ChainName::Ethereum, _) => NamedChain::Mainnet,
            (ChainName::Sepolia, _) => NamedChain::Sepolia,
            (ChainName::Avalanche, Network::Mainnet) => NamedChain::Avalanche,
            (ChainName::Avalanche, Network::Testnet) => NamedChain::AvalancheFuji,
            (ChainName::Arbitrum, _) => NamedChain::Arbitrum,
            (ChainName::ArbitrumSepolia, _) => NamedChain::ArbitrumSepolia,
            (ChainName::Base, _) => NamedChain::Base,
            (ChainName::BaseSepolia, _) => NamedChain::BaseSepolia,
            (ChainName::Optimism, _) => NamedChain::Optimism,
            (ChainName::OptimismSepolia, _) => NamedChain::OptimismSepolia,
            (other, _) => {
                return Err(PortalError::ChainNotSupported {
                    chain: other.to_string(),
                })
            }
        };
        Ok(named)
    }
}

#[async_trait]
impl PlatformAdapter for EvmPlatform {
    fn platform(&self) -> Platform {
        Platform::Evm
    }

    fn default_rpc_url(&self, chain: ChainName, network: Network) -> Result<Url> {
        let raw = match (chain, network) {
            (ChainName::Ethereum, _) => "https://ethereum-rpc.publicnode.com",
            (ChainName::Sepolia, _) => "https://ethereum-sepolia-rpc.publicnode.com",
            (ChainName::Avalanche, Network::Mainnet) => "https://api.avax.network/ext/bc/C/rpc",
            (ChainName::Avalanche, Network::Testnet) => "https://api.avax-test.network/ext/bc/C/rpc",
            (ChainName::Arbitrum, _) => "https://arb1.arbitrum.io/rpc",
            (ChainName::ArbitrumSepolia, _) => "https://sepolia-rollup.arbitrum.io/rpc",
            (ChainName::Base, _) => "https://mainnet.base.org",
            (ChainName::BaseSepolia, _) => "https://sepolia.base.org",
            (ChainName::Optimism, _) => "https://mainnet.optimism.io",
            (ChainName::OptimismSepolia, _) => "https://sepolia.optimism.io",
            (other, _) => {
                return Err(PortalError::ChainNotSupported {
                    chain: other.to_string(),
                })
            }
        };
        Url::parse(raw).map_err(|e| PortalError::InvalidUrl {
            reason: format!("Failed to parse default RPC URL: {e}"),
        })
    }

    async fn signer(&self, endpoint: &ChainEndpoint, config: &EnvConfig) -> Result<SignerHandle> {
        let key = config.evm_private_key.as_ref().ok_or_else(|| {
            PortalError::InvalidConfig("ETH_PRIVATE_KEY is not configured".to_string())
        })?;

        let signer: PrivateKeySigner = key.expose().parse().map_err(|_| PortalError::InvalidKey {
            reason: "ETH_PRIVATE_KEY is not a valid secp256k1 private key".to_string(),
        })?;

        let named = Self::named_chain(endpoint.name(), endpoint.network())?;

        Ok(SignerHandle::new(
            endpoint.clone(),
            signer.address().to_string(),
            key.clone(),
            Some(named as u64),
        ))
    }
}
