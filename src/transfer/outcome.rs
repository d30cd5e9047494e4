use std::fmt;

use crate::protocol::VaaId;

/// Identifier of a submitted transaction, in the source platform's canonical
/// string form.
pub type TxId = String;

/// Progress of one transfer through its phases.
///
/// `Recovered` is the side entry used when a transfer is reconstructed from
/// its source transaction id instead of being initiated here. `Failed` is
/// terminal alongside `Completed`; there is no cancellation once the source
/// transaction is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferState {
    Created,
    Initiated,
    Recovered,
    Attested,
    Completed,
    Failed,
}

impl fmt::Display for TransferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Created => "created",
            Self::Initiated => "initiated",
            Self::Recovered => "recovered",
            Self::Attested => "attested",
            Self::Completed => "completed",
            Self::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Identifiers collected across the phases of one finished transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    state: TransferState,
    source_txids: Vec<TxId>,
    attestation_ids: Vec<VaaId>,
    destination_txids: Vec<TxId>,
}

impl TransferReceipt {
    pub(crate) fn new(
        state: TransferState,
        source_txids: Vec<TxId>,
        attestation_ids: Vec<VaaId>,
        destination_txids: Vec<TxId>,
    ) -> Self {
        Self {
            state,
            source_txids,
            attestation_ids,
            destination_txids,
        }
    }

    pub fn state(&self) -> TransferState {
        self.state
    }

    /// Source-chain transaction ids; empty for recovered transfers.
    pub fn source_txids(&self) -> &[TxId] {
        &self.source_txids
    }

    /// The source-chain transaction that started the transfer.
    pub fn source_txid(&self) -> Option<&TxId> {
        self.source_txids.first()
    }

    /// The messaging-layer message id. Falls back to the source transaction
    /// id when the SDK reports only one identifier.
    pub fn message_id(&self) -> Option<&TxId> {
        self.source_txids.get(1).or_else(|| self.source_txids.first())
    }

    /// Ids of the signed attestations; empty when the wait was skipped.
    pub fn attestation_ids(&self) -> &[VaaId] {
        &self.attestation_ids
    }

    /// Destination-chain transaction ids; may be empty when a relayer won
    /// the completion race on an automatic transfer.
    pub fn destination_txids(&self) -> &[TxId] {
        &self.destination_txids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_id_falls_back_to_source_txid() {
        let receipt = TransferReceipt::new(
            TransferState::Completed,
            vec!["0xsrc".to_string()],
            vec![],
            vec!["0xdst".to_string()],
        );
        assert_eq!(receipt.message_id(), Some(&"0xsrc".to_string()));

        let receipt = TransferReceipt::new(
            TransferState::Completed,
            vec!["0xsrc".to_string(), "0xmsg".to_string()],
            vec![],
            vec![],
        );
        assert_eq!(receipt.message_id(), Some(&"0xmsg".to_string()));
    }

    #[test]
    fn test_state_display() {
        assert_eq!(TransferState::Attested.to_string(), "attested");
        assert_eq!(TransferState::Failed.to_string(), "failed");
    }
}
