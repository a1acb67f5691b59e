use crate::domain::charge::{ChargeRequest, ChargeResult, TransactionId};
use crate::error::{ChargeFailure, Result};
use crate::interfaces::OutcomeWrite;
use serde::Serialize;
use std::io::Write;

/// Response a transport layer sends back for a charge.
///
/// Declined charges carry the user-facing message together with the
/// "invalid argument" classification in both gRPC and HTTP terms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ChargeResponse {
    Ok {
        transaction_id: TransactionId,
    },
    Error {
        code: &'static str,
        grpc_code: i32,
        http_status: u16,
        message: String,
    },
}

impl From<&ChargeFailure> for ChargeResponse {
    fn from(failure: &ChargeFailure) -> Self {
        let code = failure.code();
        ChargeResponse::Error {
            code: code.as_str(),
            grpc_code: code.grpc_code(),
            http_status: code.http_status(),
            message: failure.to_string(),
        }
    }
}

impl From<&std::result::Result<ChargeResult, ChargeFailure>> for ChargeResponse {
    fn from(outcome: &std::result::Result<ChargeResult, ChargeFailure>) -> Self {
        match outcome {
            Ok(result) => ChargeResponse::Ok {
                transaction_id: result.transaction_id,
            },
            Err(failure) => failure.into(),
        }
    }
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    row: usize,
    #[serde(flatten)]
    response: &'a ChargeResponse,
}

/// Writes one `ChargeResponse` JSON object per line.
pub struct JsonLinesWriter<W: Write> {
    sink: W,
}

impl<W: Write> JsonLinesWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }
}

impl<W: Write> OutcomeWrite for JsonLinesWriter<W> {
    fn write_outcome(
        &mut self,
        row: usize,
        _request: &ChargeRequest,
        outcome: &std::result::Result<ChargeResult, ChargeFailure>,
    ) -> Result<()> {
        let response = ChargeResponse::from(outcome);
        serde_json::to_writer(&mut self.sink, &JsonOutcome {
            row,
            response: &response,
        })?;
        writeln!(self.sink)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }
}
