use crate::error::{PaymentError, Result};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

pub const NANOS_PER_UNIT: i64 = 1_000_000_000;

/// An amount of money in a given currency.
///
/// `units` holds whole major units and `nanos` the fractional part in
/// 10^-9 units. `|nanos| < 10^9` and, when both are non-zero, `nanos`
/// carries the same sign as `units`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Money {
    currency_code: String,
    units: i64,
    nanos: i32,
}

impl Money {
    pub fn new(currency_code: impl Into<String>, units: i64, nanos: i32) -> Result<Self> {
        if i64::from(nanos).abs() >= NANOS_PER_UNIT {
            return Err(PaymentError::ValidationError(format!(
                "nanos must be within +/-999999999, got {nanos}"
            )));
        }
        if (units > 0 && nanos < 0) || (units < 0 && nanos > 0) {
            return Err(PaymentError::ValidationError(
                "units and nanos must have the same sign".to_string(),
            ));
        }
        Ok(Self {
            currency_code: currency_code.into(),
            units,
            nanos,
        })
    }

    pub fn currency_code(&self) -> &str {
        &self.currency_code
    }

    pub fn units(&self) -> i64 {
        self.units
    }

    pub fn nanos(&self) -> i32 {
        self.nanos
    }

    fn total_nanos(&self) -> i128 {
        i128::from(self.units) * i128::from(NANOS_PER_UNIT) + i128::from(self.nanos)
    }

    fn from_total_nanos(currency_code: &str, total: i128) -> Result<Self> {
        let per_unit = i128::from(NANOS_PER_UNIT);
        let units = i64::try_from(total / per_unit).map_err(|_| {
            PaymentError::ValidationError("amount overflows 64-bit units".to_string())
        })?;
        // Truncating division keeps the remainder's sign aligned with units.
        let nanos = (total % per_unit) as i32;
        Self::new(currency_code, units, nanos)
    }

    /// Sums two amounts of the same currency.
    ///
    /// Library helper for callers building order totals; charging itself
    /// never combines amounts.
    pub fn checked_add(&self, other: &Money) -> Result<Money> {
        if self.currency_code != other.currency_code {
            return Err(PaymentError::CurrencyMismatch {
                left: self.currency_code.clone(),
                right: other.currency_code.clone(),
            });
        }
        Self::from_total_nanos(&self.currency_code, self.total_nanos() + other.total_nanos())
    }

    /// Scales an amount by an integer factor, e.g. a line item's quantity.
    pub fn multiply(&self, factor: i64) -> Result<Money> {
        let total = self
            .total_nanos()
            .checked_mul(i128::from(factor))
            .ok_or_else(|| PaymentError::ValidationError("amount overflow".to_string()))?;
        Self::from_total_nanos(&self.currency_code, total)
    }

    /// Exact decimal value, without trailing zeros.
    pub fn to_decimal(&self) -> Result<Decimal> {
        Decimal::try_from_i128_with_scale(self.total_nanos(), 9)
            .map(|d| d.normalize())
            .map_err(|e| PaymentError::ValidationError(e.to_string()))
    }
}

/// Renders as `{currency_code}{units}.{nanos}`, e.g. `USD100.0`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{}", self.currency_code, self.units, self.nanos)
    }
}
