use bon::Builder;

use crate::amount::TransferAmount;
use crate::error::{PortalError, Result};
use crate::token::TokenReference;

/// How the transfer reaches the destination.
///
/// Automatic transfers are completed by a relayer and may carry a native-gas
/// drop; manual transfers are redeemed by the destination signer and carry no
/// native gas even when one is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryOptions {
    automatic: bool,
    native_gas: Option<TransferAmount>,
}

impl DeliveryOptions {
    /// Relayer-driven delivery with an optional native-gas drop.
    pub fn automatic(native_gas: Option<TransferAmount>) -> Self {
        Self {
            automatic: true,
            native_gas,
        }
    }

    /// Delivery redeemed by the destination signer.
    pub fn manual() -> Self {
        Self {
            automatic: false,
            native_gas: None,
        }
    }

    /// Manual delivery that still records a configured native-gas value.
    /// The accessor masks it, so downstream consumers never observe it.
    pub fn manual_with_native_gas(native_gas: Option<TransferAmount>) -> Self {
        Self {
            automatic: false,
            native_gas,
        }
    }

    pub fn is_automatic(&self) -> bool {
        self.automatic
    }

    /// The native-gas drop, absent for manual transfers regardless of what
    /// was configured.
    pub fn native_gas(&self) -> Option<&TransferAmount> {
        if self.automatic {
            self.native_gas.as_ref()
        } else {
            None
        }
    }
}

/// Parameters for one cross-chain token transfer.
///
/// Addresses are in each platform's canonical string form; the amount and any
/// native-gas drop must be normalized at the token's decimal precision.
#[derive(Builder, Debug, Clone)]
pub struct TransferRequest {
    token: TokenReference,
    amount: TransferAmount,
    source_address: String,
    destination_address: String,
    #[builder(default)]
    delivery: DeliveryOptions,
    payload: Option<Vec<u8>>,
}

impl TransferRequest {
    pub fn token(&self) -> &TokenReference {
        &self.token
    }

    pub fn amount(&self) -> &TransferAmount {
        &self.amount
    }

    pub fn source_address(&self) -> &str {
        &self.source_address
    }

    pub fn destination_address(&self) -> &str {
        &self.destination_address
    }

    pub fn delivery(&self) -> &DeliveryOptions {
        &self.delivery
    }

    pub fn payload(&self) -> Option<&[u8]> {
        self.payload.as_deref()
    }

    /// Checks the amount/native-gas precision invariant.
    pub fn validate(&self) -> Result<()> {
        if let Some(native_gas) = self.delivery.native_gas() {
            if native_gas.decimals() != self.amount.decimals() {
                return Err(PortalError::InvalidAmount {
                    reason: format!(
                        "native gas normalized at {} decimals but transfer amount at {}",
                        native_gas.decimals(),
                        self.amount.decimals()
                    ),
                });
            }
        }
        Ok(())
    }
}
