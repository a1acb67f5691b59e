use clap::Parser;
use miette::{IntoDiagnostic, Result};
use paymentservice::application::charge::ChargeValidator;
use paymentservice::config::{AppConfig, OutputFormat};
use paymentservice::infrastructure::logging;
use paymentservice::interfaces::OutcomeWriteBox;
use paymentservice::interfaces::csv::charge_reader::ChargeReader;
use paymentservice::interfaces::csv::outcome_writer::OutcomeWriter;
use paymentservice::interfaces::wire::JsonLinesWriter;
use std::fs::File;
use std::io;

fn main() -> Result<()> {
    let config = AppConfig::parse();
    logging::init(&config.log)?;

    let validator = ChargeValidator::default();

    let file = File::open(&config.input).into_diagnostic()?;
    let reader = ChargeReader::new(file);

    let stdout = io::stdout();
    let mut report: OutcomeWriteBox<'_> = match config.output {
        OutputFormat::Csv => Box::new(OutcomeWriter::new(stdout.lock())),
        OutputFormat::Json => Box::new(JsonLinesWriter::new(stdout.lock())),
    };

    // Rows are numbered from 1, not counting the header.
    for (index, request) in reader.requests().enumerate() {
        let row = index + 1;
        match request {
            Ok(request) => {
                let outcome = validator.charge(&request);
                if let Err(failure) = &outcome {
                    tracing::warn!(row, code = failure.code().as_str(), "Charge declined: {failure}");
                }
                report
                    .write_outcome(row, &request, &outcome)
                    .into_diagnostic()?;
            }
            Err(e) => {
                tracing::error!(row, "Error reading charge request: {e}");
            }
        }
    }

    report.finish().into_diagnostic()?;
    Ok(())
}
