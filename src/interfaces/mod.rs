//! Encoding and decoding at the edges: CSV input, CSV/JSON reports and the
//! wire-level response mapping.

use crate::domain::charge::{ChargeRequest, ChargeResult};
use crate::error::{ChargeFailure, Result};

pub mod csv;
pub mod wire;

/// A destination for per-row charge outcomes.
pub trait OutcomeWrite {
    fn write_outcome(
        &mut self,
        row: usize,
        request: &ChargeRequest,
        outcome: &std::result::Result<ChargeResult, ChargeFailure>,
    ) -> Result<()>;

    fn finish(&mut self) -> Result<()>;
}

pub type OutcomeWriteBox<'a> = Box<dyn OutcomeWrite + 'a>;
