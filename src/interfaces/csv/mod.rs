pub mod charge_reader;
pub mod outcome_writer;
