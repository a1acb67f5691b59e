use crate::domain::card::YearMonth;
use crate::domain::ports::{ChargeLog, Clock, ProcessedCharge};
use std::sync::{Arc, PoisonError, RwLock};

/// A clock pinned to a single month.
///
/// Makes expiration checks deterministic in tests and batch replays.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    month: YearMonth,
}

impl FixedClock {
    pub fn new(month: YearMonth) -> Self {
        Self { month }
    }
}

impl Clock for FixedClock {
    fn current_month(&self) -> YearMonth {
        self.month
    }
}

/// A thread-safe charge log that keeps every record in memory.
///
/// Clones share the same buffer, so a test can hand one clone to the
/// validator and inspect the other.
#[derive(Debug, Default, Clone)]
pub struct RecordingChargeLog {
    records: Arc<RwLock<Vec<ProcessedCharge>>>,
}

impl RecordingChargeLog {
    /// Creates a new, empty recording log.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<ProcessedCharge> {
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl ChargeLog for RecordingChargeLog {
    fn transaction_processed(&self, charge: &ProcessedCharge) {
        self.records
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(charge.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::CardBrand;
    use crate::domain::charge::TransactionId;
    use crate::domain::money::Money;

    #[test]
    fn test_fixed_clock() {
        let clock = FixedClock::new(YearMonth::new(2030, 6));
        assert_eq!(clock.current_month(), YearMonth::new(2030, 6));
    }

    #[test]
    fn test_recording_log_shares_buffer_between_clones() {
        let log = RecordingChargeLog::new();
        let sink: Box<dyn ChargeLog> = Box::new(log.clone());

        let charge = ProcessedCharge {
            brand: CardBrand::MasterCard,
            last_four_digits: "4444".to_string(),
            amount: Money::new("EUR", 12, 500_000_000).unwrap(),
            transaction_id: TransactionId::generate(),
        };
        sink.transaction_processed(&charge);

        assert_eq!(log.records(), vec![charge]);
    }
}
