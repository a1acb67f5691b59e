//! Adapters for the domain ports plus process-wide logging setup.

pub mod in_memory;
pub mod logging;
pub mod system;
