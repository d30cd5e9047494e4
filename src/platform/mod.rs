//! Platform adapters and the chain/environment resolver.
//!
//! The SDK abstracts over chain platforms; this module mirrors that seam. A
//! [`PlatformAdapter`] contributes RPC defaults and signer construction for
//! one platform family, and the [`PlatformRegistry`] resolves human-readable
//! chain names against the set of adapters registered at startup.

mod evm;
mod registry;
mod solana;

pub use evm::EvmPlatform;
pub use registry::PlatformRegistry;
pub use solana::SolanaPlatform;

use async_trait::async_trait;
use url::Url;

use crate::chain::{ChainEndpoint, ChainName, Network, Platform};
use crate::error::Result;
use crate::signer::{EnvConfig, SignerHandle};

/// Capability contract one platform family provides to the registry.
///
/// Implementations are registered into a [`PlatformRegistry`] at startup; the
/// orchestrator never touches a platform directly.
#[async_trait]
pub trait PlatformAdapter: Send + Sync {
    /// The platform family this adapter serves.
    fn platform(&self) -> Platform;

    /// Default public RPC endpoint for a chain in the given environment.
    fn default_rpc_url(&self, chain: ChainName, network: Network) -> Result<Url>;

    /// Builds a signer handle for the endpoint from explicit configuration.
    ///
    /// The adapter derives the signing address from the configured key
    /// material; actual transaction signing stays inside the SDK.
    async fn signer(&self, endpoint: &ChainEndpoint, config: &EnvConfig) -> Result<SignerHandle>;
}
