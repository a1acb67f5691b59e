use crate::domain::charge::{ChargeRequest, ChargeResult};
use crate::error::{ChargeFailure, Result};
use crate::interfaces::OutcomeWrite;
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct OutcomeRecord<'a> {
    row: usize,
    currency_code: &'a str,
    amount: Decimal,
    status: &'static str,
    transaction_id: Option<String>,
    message: Option<String>,
}

/// Writes one CSV record per charge outcome.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }
}

impl<W: Write> OutcomeWrite for OutcomeWriter<W> {
    fn write_outcome(
        &mut self,
        row: usize,
        request: &ChargeRequest,
        outcome: &std::result::Result<ChargeResult, ChargeFailure>,
    ) -> Result<()> {
        let (status, transaction_id, message) = match outcome {
            Ok(result) => ("ok", Some(result.transaction_id.to_string()), None),
            Err(failure) => ("declined", None, Some(failure.to_string())),
        };
        self.writer.serialize(OutcomeRecord {
            row,
            currency_code: request.amount.currency_code(),
            amount: request.amount.to_decimal()?,
            status,
            transaction_id,
            message,
        })?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
