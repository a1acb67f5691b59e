use crate::domain::card::YearMonth;
use crate::domain::ports::{ChargeLog, Clock, ProcessedCharge};

/// Reads the current month from the local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_month(&self) -> YearMonth {
        YearMonth::from_date(&chrono::Local::now())
    }
}

/// Emits accepted charges as `tracing` events at `INFO`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingChargeLog;

impl ChargeLog for TracingChargeLog {
    fn transaction_processed(&self, charge: &ProcessedCharge) {
        tracing::info!(
            brand = %charge.brand,
            card_last_four = %charge.last_four_digits,
            amount = %charge.amount,
            transaction_id = %charge.transaction_id,
            "Transaction processed: {} ending {} Amount: {}",
            charge.brand,
            charge.last_four_digits,
            charge.amount,
        );
    }
}
