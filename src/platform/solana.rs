use async_trait::async_trait;
use url::Url;

use crate::chain::{ChainEndpoint, ChainName, Network, Platform};
use crate::error::{PortalError, Result};
use crate::signer::{EnvConfig, SignerHandle};

use super::PlatformAdapter;

/// Length of a base58-decoded ed25519 keypair: 32 secret + 32 public bytes.
const KEYPAIR_LEN: usize = 64;

/// Platform adapter for Solana.
///
/// Expects `SOL_PRIVATE_KEY` to hold a base58-encoded 64-byte keypair; the
/// signer address is the public half re-encoded as base58.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolanaPlatform;

impl SolanaPlatform {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PlatformAdapter for SolanaPlatform {
    fn platform(&self) -> Platform {
        Platform::Solana
    }

    fn default_rpc_url(&self, chain: ChainName, network: Network) -> Result<Url> {
        if chain != ChainName::Solana {
            return Err(PortalError::ChainNotSupported {
                chain: chain.to_string(),
            });
        }
        let raw = match network {
            Network::Mainnet => "https://api.mainnet-beta.solana.com",
            Network::Testnet => "https://api.devnet.solana.com",
        };
        Url::parse(raw).map_err(|e| PortalError::InvalidUrl {
            reason: format!("Failed to parse default RPC URL: {e}"),
        })
    }

    async fn signer(&self, endpoint: &ChainEndpoint, config: &EnvConfig) -> Result<SignerHandle> {
        let key = config.solana_private_key.as_ref().ok_or_else(|| {
            PortalError::InvalidConfig("SOL_PRIVATE_KEY is not configured".to_string())
        })?;

        let decoded = bs58::decode(key.expose())
            .into_vec()
            .map_err(|e| PortalError::InvalidKey {
                reason: format!("SOL_PRIVATE_KEY is not valid base58: {e}"),
            })?;

        if decoded.len() != KEYPAIR_LEN {
            return Err(PortalError::InvalidKey {
                reason: format!(
                    "SOL_PRIVATE_KEY must decode to {KEYPAIR_LEN} bytes, got {}",
                    decoded.len()
                ),
            });
        }

        let address = bs58::encode(&decoded[32..]).into_string();

        Ok(SignerHandle::new(endpoint.clone(), address, key.clone(), None))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signer::KeyMaterial;

    fn devnet_endpoint() -> ChainEndpoint {
        ChainEndpoint::new(
            ChainName::Solana,
            Network::Testnet,
            SolanaPlatform::new()
                .default_rpc_url(ChainName::Solana, Network::Testnet)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn test_signer_address_is_public_half() {
        // Keypair bytes 0..64; the address is base58 of bytes 32..64.
        let keypair: Vec<u8> = (0u8..64).collect();
        let encoded = bs58::encode(&keypair).into_string();
        let expected_address = bs58::encode(&keypair[32..]).into_string();

        let config = EnvConfig {
            solana_private_key: Some(KeyMaterial::new(encoded)),
            ..Default::default()
        };

        let signer = SolanaPlatform::new()
            .signer(&devnet_endpoint(), &config)
            .await
            .unwrap();
        assert_eq!(signer.address(), expected_address);
        assert_eq!(signer.evm_chain_id(), None);
    }

    #[tokio::test]
    async fn test_signer_rejects_short_key() {
        let config = EnvConfig {
            solana_private_key: Some(KeyMaterial::new(bs58::encode(&[0u8; 32]).into_string())),
            ..Default::default()
        };

        let result = SolanaPlatform::new()
            .signer(&devnet_endpoint(), &config)
            .await;
        assert!(matches!(result.unwrap_err(), PortalError::InvalidKey { .. }));
    }

    #[test]
    fn test_devnet_rpc_for_testnet_environment() {
        let url = SolanaPlatform::new()
            .default_rpc_url(ChainName::Solana, Network::Testnet)
            .unwrap();
        assert_eq!(url.as_str(), "https://api.devnet.solana.com/");
    }
}
