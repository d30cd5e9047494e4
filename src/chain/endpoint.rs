use std::fmt;

use url::Url;

use super::{ChainName, Platform};

/// Deployment environment the registry resolves chains within.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    pub const fn is_testnet(self) -> bool {
        matches!(self, Self::Testnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mainnet => write!(f, "Mainnet"),
            Self::Testnet => write!(f, "Testnet"),
        }
    }
}

/// A resolved chain handle: name, environment and the RPC endpoint the SDK
/// should talk to. Immutable once produced by the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainEndpoint {
    name: ChainName,
    network: Network,
    rpc_url: Url,
}

impl ChainEndpoint {
    pub fn new(name: ChainName, network: Network, rpc_url: Url) -> Self {
        Self {
            name,
            network,
            rpc_url,
        }
    }

    pub fn name(&self) -> ChainName {
        self.name
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn platform(&self) -> Platform {
        self.name.platform()
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }
}

impl fmt::Display for ChainEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.network)
    }
}
