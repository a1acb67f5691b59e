use super::card::{CardBrand, YearMonth};
use super::charge::TransactionId;
use super::money::Money;

/// Source of the current processing month.
pub trait Clock: Send + Sync {
    fn current_month(&self) -> YearMonth;
}

/// What gets recorded about an accepted charge. Only the last four digits of
/// the card are ever exposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedCharge {
    pub brand: CardBrand,
    pub last_four_digits: String,
    pub amount: Money,
    pub transaction_id: TransactionId,
}

/// Sink for the single informational record emitted per accepted charge.
/// Implementations must tolerate concurrent calls.
pub trait ChargeLog: Send + Sync {
    fn transaction_processed(&self, charge: &ProcessedCharge);
}

pub type ClockBox = Box<dyn Clock>;
pub type ChargeLogBox = Box<dyn ChargeLog>;
