//! Monetary amount type with currency-unit precision.
//!
//! Amounts are fixed-point decimals, never binary floats: a detected `$12.34`
//! must round-trip as exactly 12.34, with cent precision preserved. The
//! [`Amount`] newtype also carries the emission invariant of the pipeline —
//! an amount attached to a candidate is always strictly positive.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A strictly positive monetary amount with a canonical scale of two
/// decimal places (cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount from a decimal value.
    ///
    /// The value is normalized to two decimal places, so `12` and `12.00`
    /// compare equal and display identically.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveAmount` if `value <= 0`.
    pub fn new(value: Decimal) -> Result<Self, ValidationError> {
        if value <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount { amount: value });
        }
        let mut normalized = value;
        normalized.rescale(2);
        Ok(Self(normalized))
    }

    /// Creates an amount from a whole number of cents.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NonPositiveAmount` if `cents <= 0`.
    pub fn from_cents(cents: i64) -> Result<Self, ValidationError> {
        Self::new(Decimal::new(cents, 2))
    }

    /// The underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// The amount as a whole number of cents.
    #[must_use]
    pub fn to_cents(&self) -> i128 {
        // Canonical scale is 2, so the mantissa is the cent count.
        self.0.mantissa()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
