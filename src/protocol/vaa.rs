//! VAA identifier and API response types.

use std::fmt;

use serde::{Deserialize, Deserializer};

use super::WormholeChainId;

/// Identifies a signed VAA on the messaging layer.
///
/// A VAA is addressed by the emitter chain, the emitter contract address
/// (hex, zero-padded to 32 bytes) and the per-emitter sequence number. This
/// triple is what the attestation API is queried with.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VaaId {
    pub chain: WormholeChainId,
    pub emitter: String,
    pub sequence: u64,
}

impl VaaId {
    pub fn new(chain: WormholeChainId, emitter: impl Into<String>, sequence: u64) -> Self {
        Self {
            chain,
            emitter: emitter.into(),
            sequence,
        }
    }
}

impl fmt::Display for VaaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.chain.as_u16(), self.emitter, self.sequence)
    }
}

/// Response envelope from the Wormholescan VAA API.
///
/// The API wraps the record in a `data` field; the record is absent while the
/// guardians have not yet signed the observation.
#[derive(Debug, Deserialize)]
pub struct VaaResponse {
    pub data: Option<VaaRecord>,
}

/// A single signed VAA as returned by the API.
///
/// **API quirk**: the `vaa` field is sometimes present as an empty string
/// rather than omitted while signing is in progress. The deserializer treats
/// an empty string as absent so callers only see complete payloads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaaRecord {
    /// Base64-encoded signed VAA bytes. Verification is the SDK's job; this
    /// crate only transports the payload.
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub vaa: Option<String>,
    /// Guardian-observed timestamp, RFC 3339.
    #[serde(default)]
    pub timestamp: Option<String>,
    /// Per-emitter sequence number.
    #[serde(default)]
    pub sequence: Option<u64>,
}

impl VaaRecord {
    /// Whether the guardians have produced the signed payload yet.
    pub fn is_signed(&self) -> bool {
        self.vaa.is_some()
    }
}

fn deserialize_non_empty_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        None => Ok(None),
        Some(s) if s.is_empty() => Ok(None),
        Some(s) => Ok(Some(s)),
    }
}
