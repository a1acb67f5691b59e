//! Application layer containing the charge authorization logic.
//!
//! This module defines the `ChargeValidator`, the entry point used by callers
//! to authorize a charge. It is synchronous and stateless; collaborators
//! (clock, log sink) are injected through the ports in `crate::domain::ports`.

pub mod charge;
