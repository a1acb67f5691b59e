use miette::Diagnostic;
use thiserror::Error;

/// Wire-level classification attached to every declined charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidArgument,
}

impl ErrorCode {
    /// Canonical gRPC status code.
    pub fn grpc_code(self) -> i32 {
        match self {
            ErrorCode::InvalidArgument => 3,
        }
    }

    pub fn http_status(self) -> u16 {
        match self {
            ErrorCode::InvalidArgument => 400,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidArgument => "INVALID_ARGUMENT",
        }
    }
}

/// Reasons a charge is declined.
///
/// Every variant is a client fault: the payment instrument supplied by the
/// caller is unusable. The `Display` output is the user-facing message.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ChargeFailure {
    #[error("Credit card info is invalid")]
    #[diagnostic(code(charge::invalid_card))]
    InvalidCard,

    #[error(
        "Sorry, we cannot process {brand} credit cards. Only VISA or MasterCard is accepted."
    )]
    #[diagnostic(code(charge::unsupported_brand))]
    UnsupportedCardBrand { brand: String },

    #[error("Your credit card (ending {last_four_digits}) expired on {month}/{year}")]
    #[diagnostic(code(charge::expired_card))]
    ExpiredCard {
        last_four_digits: String,
        month: u32,
        year: i32,
    },
}

impl ChargeFailure {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidArgument
    }
}

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Currency mismatch: cannot combine {left} with {right}")]
    CurrencyMismatch { left: String, right: String },
}

pub type Result<T> = std::result::Result<T, PaymentError>;
