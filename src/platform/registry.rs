// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::chain::{ChainEndpoint, ChainName, Network};
use crate::error::{PortalError, Result};
use crate::signer::{EnvConfig, SignerHandle};

use super::PlatformAdapter;

/// Chain/environment resolver over a set of platform adapters.
///
/// Built once at startup with the platforms the process intends to touch;
/// resolution fails for chains whose platform was not registered.
///
/// # Example
///
/// ```rust
/// use portal_rs::{EvmPlatform, Network, PlatformRegistry, SolanaPlatform};
///
/// let registry = PlatformRegistry::new(
///     Network::Testnet,
///     vec![
///         Box::new(EvmPlatform::new()),
///         Box::new(SolanaPlatform::new()),
///     ],
/// );
/// let avalanche = registry.chain("Avalanche").unwrap();
/// assert_eq!(avalanche.name().to_string(), "Avalanche");
/// ```
pub struct PlatformRegistry {
    network: Network,
    adapters: Vec<Arc<dyn PlatformAdapter>>,
}

impl PlatformRegistry {
    pub fn new(network: Network, adapters: Vec<Box<dyn PlatformAdapter>>) -> Self {
        Self {
            network,
            adapters: adapters.into_iter().map(Arc::from).collect(),
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    /// Resolves a human-readable chain name to an endpoint handle.
    ///
    /// Uses the configured RPC override when one exists, otherwise the
    /// platform adapter's default public endpoint.
    pub fn chain(&self, name: &str) -> Result<ChainEndpoint> {
        self.chain_with_config(name, &EnvConfig::default())
    }

    /// Like [`chain`](Self::chain), honoring per-chain RPC overrides from the
    /// given configuration.
    pub fn chain_with_config(&self, name: &str, config: &EnvConfig) -> Result<ChainEndpoint> {
        let chain = ChainName::from_str(name)?;

        if !chain.available_on(self.network) {
            return Err(PortalError::ChainNotSupported {
                chain: format!("{chain} is not available on {}", self.network),
            });
        }

        let adapter = self.adapter_for(chain)?;
        let rpc_url = match config.rpc_override(chain) {
            Some(url) => url.clone(),
            None => adapter.default_rpc_url(chain, self.network)?,
        };

        debug!(chain = %chain, network = %self.network, rpc = %rpc_url, event = "chain_resolved");
        Ok(ChainEndpoint::new(chain, self.network, rpc_url))
    }

    /// Builds a signer for the endpoint via its platform's adapter.
    pub async fn signer(
        &self,
        endpoint: &ChainEndpoint,
        config: &EnvConfig,
    ) -> Result<SignerHandle> {
        let adapter = self.adapter_for(endpoint.name())?;
        adapter.signer(endpoint, config).await
    }

    fn adapter_for(&self, chain: ChainName) -> Result<&Arc<dyn PlatformAdapter>> {
        let platform = chain.platform();
        self.adapters
            .iter()
            .find(|adapter| adapter.platform() == platform)
            .ok_or(PortalError::PlatformNotRegistered { platform })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{EvmPlatform, SolanaPlatform};

    fn testnet_registry() -> PlatformRegistry {
        PlatformRegistry::new(
            Network::Testnet,
            vec![
                Box::new(EvmPlatform::new()),
                Box::new(SolanaPlatform::new()),
            ],
        )
    }

    #[test]
    fn test_resolves_registered_chains() {
        let registry = testnet_registry();

        let sepolia = registry.chain("Sepolia").unwrap();
        assert_eq!(sepolia.name(), ChainName::Sepolia);
        assert_eq!(sepolia.network(), Network::Testnet);

        let solana = registry.chain("Solana").unwrap();
        assert_eq!(solana.rpc_url().as_str(), "https://api.devnet.solana.com/");
    }

    #[test]
    fn test_rejects_chain_outside_environment() {
        let registry = testnet_registry();
        let result = registry.chain("Ethereum");
        assert!(matches!(
            result.unwrap_err(),
            PortalError::ChainNotSupported { .. }
        ));
    }

    #[test]
    fn test_rejects_unregistered_platform() {
        let evm_only = PlatformRegistry::new(Network::Testnet, vec![Box::new(EvmPlatform::new())]);
        let result = evm_only.chain("Solana");
        assert!(matches!(
            result.unwrap_err(),
            PortalError::PlatformNotRegistered { .. }
        ));
    }

    #[test]
    fn test_rpc_override_wins() {
        let registry = testnet_registry();
        let mut config = EnvConfig::default();
        config.rpc_overrides.insert(
            ChainName::Sepolia,
            url::Url::parse("http://localhost:8545").unwrap(),
        );

        let endpoint = registry.chain_with_config("Sepolia", &config).unwrap();
        assert_eq!(endpoint.rpc_url().as_str(), "http://localhost:8545/");
    }
}
