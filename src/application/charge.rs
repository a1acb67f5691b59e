use crate::domain::charge::{ChargeRequest, ChargeResult, TransactionId};
use crate::domain::ports::{ChargeLogBox, ClockBox, ProcessedCharge};
use crate::error::ChargeFailure;
use crate::infrastructure::system::{SystemClock, TracingChargeLog};

/// Validates credit cards and (pretend) charges them.
///
/// `ChargeValidator` holds no per-call state. `charge` takes `&self`, so one
/// instance can be shared across threads or tasks behind an `Arc`.
pub struct ChargeValidator {
    clock: ClockBox,
    log: ChargeLogBox,
}

impl Default for ChargeValidator {
    /// Wall-clock month and `tracing` output.
    fn default() -> Self {
        Self::new(Box::new(SystemClock), Box::new(TracingChargeLog))
    }
}

impl ChargeValidator {
    /// Creates a new `ChargeValidator`.
    ///
    /// # Arguments
    ///
    /// * `clock` - Supplies the current month for the expiration check.
    /// * `log` - Receives one record per accepted charge.
    pub fn new(clock: ClockBox, log: ChargeLogBox) -> Self {
        Self { clock, log }
    }

    /// Validates the card in `request` and returns a new transaction id.
    ///
    /// Checks run in order and stop at the first failure: number format and
    /// checksum, accepted brand, then expiration. The amount is not inspected
    /// beyond being logged on success.
    pub fn charge(&self, request: &ChargeRequest) -> Result<ChargeResult, ChargeFailure> {
        let card = &request.credit_card;
        let details = card.details();

        let (Some(number), Some(brand), true) = (details.number, details.brand, details.valid)
        else {
            return Err(ChargeFailure::InvalidCard);
        };

        if !brand.is_accepted() {
            return Err(ChargeFailure::UnsupportedCardBrand {
                brand: brand.label().to_string(),
            });
        }

        // A card is usable through the whole of its expiration month.
        let expiration = card.expiration();
        if self.clock.current_month().period() > expiration.period() {
            return Err(ChargeFailure::ExpiredCard {
                last_four_digits: number.last_four().to_string(),
                month: expiration.month,
                year: expiration.year,
            });
        }

        let transaction_id = TransactionId::generate();
        self.log.transaction_processed(&ProcessedCharge {
            brand,
            last_four_digits: number.last_four().to_string(),
            amount: request.amount.clone(),
            transaction_id,
        });

        Ok(ChargeResult { transaction_id })
    }
}
