//! Decimal-adjusted token amounts.
//!
//! Token amounts cross the SDK boundary as integer base units. This module
//! converts between human decimal strings and base units at a fixed precision,
//! keeping the precision attached to the value so that a transfer amount and
//! its native-gas drop can be checked for matching decimals.

use alloy_primitives::{
    utils::{format_units, parse_units, ParseUnits},
    U256,
};

use crate::error::{PortalError, Result};

/// A token amount normalized to integer base units at a known decimal precision.
///
/// # Example
///
/// ```rust
/// use portal_rs::TransferAmount;
///
/// let amount = TransferAmount::parse("0.01", 6).unwrap();
/// assert_eq!(amount.base_units().to::<u64>(), 10_000);
/// assert_eq!(amount.format().unwrap(), "0.01");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferAmount {
    units: U256,
    decimals: u8,
}

impl TransferAmount {
    /// Parses a decimal string into base units at the given precision.
    ///
    /// Rejects negative amounts and fractional digits beyond the precision.
    pub fn parse(amount: &str, decimals: u8) -> Result<Self> {
        match parse_units(amount, decimals)? {
            ParseUnits::U256(units) => Ok(Self { units, decimals }),
            ParseUnits::I256(_) => Err(PortalError::InvalidAmount {
                reason: format!("negative amount: {amount}"),
            }),
        }
    }

    /// Wraps an already-normalized base-unit amount.
    pub fn from_base_units(units: U256, decimals: u8) -> Self {
        Self { units, decimals }
    }

    /// The integer base-unit value handed to the SDK.
    pub fn base_units(&self) -> U256 {
        self.units
    }

    /// The decimal precision this amount was normalized at.
    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.units.is_zero()
    }

    /// Formats the amount back into a canonical decimal string.
    ///
    /// Trailing fractional zeros are trimmed, so `format(parse(a, d))` yields
    /// the normalized form of `a` ("0.010" becomes "0.01").
    pub fn format(&self) -> Result<String> {
        let formatted = format_units(self.units, self.decimals)?;
        Ok(match formatted.split_once('.') {
            Some((integer, fraction)) => {
                let fraction = fraction.trim_end_matches('0');
                if fraction.is_empty() {
                    integer.to_string()
                } else {
                    format!("{integer}.{fraction}")
                }
            }
            None => formatted,
        })
    }
}

/// Canonicalizes a decimal amount string at the given precision.
///
/// Equivalent to parsing and re-formatting; "0.010" normalizes to "0.01".
pub fn normalize(amount: &str, decimals: u8) -> Result<String> {
    TransferAmount::parse(amount, decimals)?.format()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("0.01", 6, 10_000u64)]
    #[case("1", 6, 1_000_000u64)]
    #[case("0.000001", 6, 1u64)]
    #[case("200", 6, 200_000_000u64)]
    #[case("0.01", 18, 10_000_000_000_000_000u64)]
    #[case("0", 6, 0u64)]
    fn test_parse_base_units(#[case] input: &str, #[case] decimals: u8, #[case] expected: u64) {
        let amount = TransferAmount::parse(input, decimals).unwrap();
        assert_eq!(amount.base_units(), U256::from(expected));
        assert_eq!(amount.decimals(), decimals);
    }

    #[rstest]
    #[case("0.01", 6)]
    #[case("0.010", 6)]
    #[case("1.5", 8)]
    #[case("200", 6)]
    #[case("0", 9)]
    #[case("0.000000000000000001", 18)]
    fn test_round_trip_matches_normalized_input(#[case] input: &str, #[case] decimals: u8) {
        let amount = TransferAmount::parse(input, decimals).unwrap();
        assert_eq!(amount.format().unwrap(), normalize(input, decimals).unwrap());
    }

    #[test]
    fn test_format_trims_trailing_fractional_zeros() {
        let amount = TransferAmount::from_base_units(U256::from(10_000u64), 6);
        assert_eq!(amount.format().unwrap(), "0.01");

        let whole = TransferAmount::from_base_units(U256::from(2_000_000u64), 6);
        assert_eq!(whole.format().unwrap(), "2");
    }

    #[test]
    fn test_negative_amount_rejected() {
        let result = TransferAmount::parse("-0.5", 6);
        assert!(matches!(
            result.unwrap_err(),
            PortalError::InvalidAmount { .. }
        ));
    }

    #[test]
    fn test_excess_precision_rejected() {
        let result = TransferAmount::parse("0.0000001", 6);
        assert!(result.is_err(), "7 fractional digits at 6 decimals");
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(TransferAmount::parse("not-a-number", 6).is_err());
    }
}
