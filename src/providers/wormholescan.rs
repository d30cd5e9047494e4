// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0
//! Wormholescan VAA source implementation.

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument, trace};

use crate::chain::Network;
use crate::error::{PortalError, Result};
use crate::protocol::{VaaId, VaaRecord, VaaResponse};
use crate::transfer::VaaSource;

/// Wormholescan API environment URLs
///
/// See <https://docs.wormholescan.io/>
pub const WORMHOLESCAN_API: &str = "https://api.wormholescan.io";
pub const WORMHOLESCAN_API_TESTNET: &str = "https://api.testnet.wormholescan.io";

/// VAA API path; a VAA is addressed by `{chainId}/{emitter}/{sequence}`.
const VAA_PATH: &str = "/api/v1/vaas/";

/// Production VAA source backed by the Wormholescan API.
///
/// Fetches already-signed VAAs by id; it never verifies guardian signatures,
/// which remains the SDK's job.
///
/// # Examples
///
/// ```rust,no_run
/// use portal_rs::providers::WormholescanClient;
/// use portal_rs::{VaaId, VaaSource, WormholeChainId};
///
/// # async fn example() -> Result<(), portal_rs::PortalError> {
/// let client = WormholescanClient::testnet();
/// let id = VaaId::new(WormholeChainId::Avalanche, "0x00...61", 42);
/// let record = client.fetch_vaa(&id).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct WormholescanClient {
    base_url: String,
    client: Client,
}

impl WormholescanClient {
    /// Creates a client against an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: Client::new(),
        }
    }

    /// Creates a client for the production (Mainnet) environment.
    pub fn production() -> Self {
        Self::new(WORMHOLESCAN_API)
    }

    /// Creates a client for the Testnet environment.
    pub fn testnet() -> Self {
        Self::new(WORMHOLESCAN_API_TESTNET)
    }

    /// Picks the environment matching the registry's network.
    pub fn for_network(network: Network) -> Self {
        if network.is_testnet() {
            Self::testnet()
        } else {
            Self::production()
        }
    }

    /// Constructs the full API URL for a VAA id.
    pub fn vaa_url(&self, id: &VaaId) -> String {
        format!("{}{}{}", self.base_url, VAA_PATH, id)
    }
}

#[async_trait]
impl VaaSource for WormholescanClient {
    #[instrument(skip(self), fields(vaa_id = %id))]
    async fn fetch_vaa(&self, id: &VaaId) -> Result<Option<VaaRecord>> {
        let url = self.vaa_url(id);
        trace!(url = %url, "Requesting VAA from Wormholescan");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(PortalError::Network)?;

        let status_code = response.status();
        trace!(status_code = %status_code, "Received response from Wormholescan");

        // Rate limiting - extract Retry-After header if present
        if status_code == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(300);

            debug!(retry_after_seconds = retry_after, "Rate limit exceeded");
            return Err(PortalError::RateLimitExceeded {
                retry_after_seconds: retry_after,
            });
        }

        // 404 - the guardians have not observed the message yet
        if status_code == reqwest::StatusCode::NOT_FOUND {
            debug!("VAA not found");
            return Ok(None);
        }

        response.error_for_status_ref()?;

        let parsed: VaaResponse = response.json().await.map_err(PortalError::Network)?;
        match parsed.data {
            Some(record) if record.is_signed() => {
                debug!(sequence = ?record.sequence, "Signed VAA available");
                Ok(Some(record))
            }
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::WormholeChainId;

    #[test]
    fn test_vaa_url_format_production() {
        let client = WormholescanClient::production();
        let id = VaaId::new(
            WormholeChainId::Avalanche,
            "0x0000000000000000000000000e082f06ff657d94310cb8ce8b0d9a04541d8052",
            42,
        );
        insta::assert_snapshot!(client.vaa_url(&id), @"https://api.wormholescan.io/api/v1/vaas/6/0x0000000000000000000000000e082f06ff657d94310cb8ce8b0d9a04541d8052/42");
    }

    #[test]
    fn test_vaa_url_format_testnet() {
        let client = WormholescanClient::testnet();
        let id = VaaId::new(
            WormholeChainId::Sepolia,
            "0x000000000000000000000000db5492265f6038831e89f495670ff909ade94bd9",
            7,
        );
        insta::assert_snapshot!(client.vaa_url(&id), @"https://api.testnet.wormholescan.io/api/v1/vaas/10002/0x000000000000000000000000db5492265f6038831e89f495670ff909ade94bd9/7");
    }

    #[test]
    fn test_for_network_uses_correct_environment() {
        let mainnet = WormholescanClient::for_network(Network::Mainnet);
        assert!(mainnet.vaa_url(&VaaId::new(WormholeChainId::Solana, "0x00", 0))
            .starts_with(WORMHOLESCAN_API));

        let testnet = WormholescanClient::for_network(Network::Testnet);
        assert!(testnet.vaa_url(&VaaId::new(WormholeChainId::Solana, "0x00", 0))
            .starts_with(WORMHOLESCAN_API_TESTNET));
    }
}
