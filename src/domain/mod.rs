//! Value types of a charge and the ports the validator depends on.

pub mod card;
pub mod charge;
pub mod money;
pub mod ports;
