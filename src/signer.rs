//! Signer handles and process-level configuration.
//!
//! Key material is loaded exactly once at process entry into [`EnvConfig`] and
//! threaded by parameter into the platform adapters; nothing in this crate
//! reads the process environment after that point.

use std::collections::HashMap;
use std::fmt;

use tracing::warn;
use url::Url;

use crate::chain::{ChainEndpoint, ChainName};

/// Opaque signing key material handed through to the SDK's signer.
///
/// The Debug representation is redacted; the raw value is only reachable
/// through [`KeyMaterial::expose`].
#[derive(Clone, PartialEq, Eq)]
pub struct KeyMaterial(String);

impl KeyMaterial {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw key string, for handing to the SDK's signing entry points.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for KeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyMaterial(..)")
    }
}

/// Pairs a chain endpoint with an address and the key material the SDK signs
/// with. Built once per chain at startup by a platform adapter and kept for
/// the whole run.
#[derive(Clone, Debug)]
pub struct SignerHandle {
    endpoint: ChainEndpoint,
    address: String,
    key: KeyMaterial,
    evm_chain_id: Option<u64>,
}

impl SignerHandle {
    pub fn new(
        endpoint: ChainEndpoint,
        address: impl Into<String>,
        key: KeyMaterial,
        evm_chain_id: Option<u64>,
    ) -> Self {
        Self {
            endpoint,
            address: address.into(),
            key,
            evm_chain_id,
        }
    }

    pub fn chain(&self) -> ChainName {
        self.endpoint.name()
    }

    pub fn endpoint(&self) -> &ChainEndpoint {
        &self.endpoint
    }

    /// The signing address in the platform's canonical form (EIP-55 hex for
    /// EVM chains, base58 for Solana).
    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn key(&self) -> &KeyMaterial {
        &self.key
    }

    /// EIP-155 chain id, present for EVM signers only.
    pub fn evm_chain_id(&self) -> Option<u64> {
        self.evm_chain_id
    }
}

/// Process-level configuration: private keys and RPC overrides.
///
/// Constructed once at process entry (typically via [`EnvConfig::from_env`])
/// and passed into [`PlatformRegistry::signer`](crate::PlatformRegistry::signer).
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    pub evm_private_key: Option<KeyMaterial>,
    pub solana_private_key: Option<KeyMaterial>,
    pub rpc_overrides: HashMap<ChainName, Url>,
}

impl EnvConfig {
    /// Loads configuration from a `.env` file (if present) and the process
    /// environment.
    ///
    /// Recognized variables:
    /// - `ETH_PRIVATE_KEY`: hex private key used for every EVM chain
    /// - `SOL_PRIVATE_KEY`: base58 keypair used for Solana
    /// - `{CHAIN}_RPC_URL` (e.g. `SEPOLIA_RPC_URL`): per-chain RPC override
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut rpc_overrides = HashMap::new();
        for chain in ChainName::ALL {
            let var = format!("{}_RPC_URL", chain.env_prefix());
            if let Ok(raw) = std::env::var(&var) {
                match Url::parse(&raw) {
                    Ok(url) => {
                        rpc_overrides.insert(*chain, url);
                    }
                    Err(e) => {
                        warn!(var = %var, error = %e, event = "rpc_override_invalid");
                    }
                }
            }
        }

        Self {
            evm_private_key: std::env::var("ETH_PRIVATE_KEY").ok().map(KeyMaterial::new),
            solana_private_key: std::env::var("SOL_PRIVATE_KEY").ok().map(KeyMaterial::new),
            rpc_overrides,
        }
    }

    pub fn rpc_override(&self, chain: ChainName) -> Option<&Url> {
        self.rpc_overrides.get(&chain)
    }
}
