use crate::domain::card::CreditCard;
use crate::domain::charge::ChargeRequest;
use crate::domain::money::Money;
use crate::error::{PaymentError, Result};
use serde::Deserialize;
use std::io::Read;

/// One CSV row, before the money and expiration-month invariants are checked.
#[derive(Debug, Deserialize)]
struct ChargeRecord {
    currency_code: String,
    units: i64,
    nanos: i32,
    credit_card_number: String,
    credit_card_expiration_month: u32,
    credit_card_expiration_year: i32,
}

impl TryFrom<ChargeRecord> for ChargeRequest {
    type Error = PaymentError;

    fn try_from(record: ChargeRecord) -> Result<Self> {
        let month = record.credit_card_expiration_month;
        if !(1..=12).contains(&month) {
            return Err(PaymentError::ValidationError(format!(
                "expiration month must be within 1-12, got {month}"
            )));
        }
        Ok(ChargeRequest {
            amount: Money::new(record.currency_code, record.units, record.nanos)?,
            credit_card: CreditCard::new(
                record.credit_card_number,
                record.credit_card_expiration_month,
                record.credit_card_expiration_year,
            ),
        })
    }
}

/// Reads charge requests from a CSV source.
///
/// Expected header:
/// `currency_code,units,nanos,credit_card_number,credit_card_expiration_month,credit_card_expiration_year`.
pub struct ChargeReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> ChargeReader<R> {
    /// Creates a new `ChargeReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily decodes one request per row. A bad row yields an error for
    /// that row only; iteration continues with the next one.
    pub fn requests(self) -> impl Iterator<Item = Result<ChargeRequest>> {
        self.reader
            .into_deserialize::<ChargeRecord>()
            .map(|result| result.map_err(PaymentError::from).and_then(ChargeRequest::try_from))
    }
}
