//! Wormhole protocol types and definitions
//!
//! This module contains protocol-level types used by the messaging layer:
//! chain identifiers assigned by the guardian network and the VAA
//! (Verified Action Approval) identifier and API response types.

mod chain_id;
mod vaa;

pub use chain_id::WormholeChainId;
pub use vaa::{VaaId, VaaRecord, VaaResponse};
