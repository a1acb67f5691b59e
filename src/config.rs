use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Args)]
pub struct LogConfig {
    /// Log output format
    #[arg(long = "log-format", env = "LOG_FORMAT", value_enum, default_value = "pretty")]
    pub format: LogFormat,

    /// Log filter directive, e.g. `info` or `paymentservice=debug`
    #[arg(long = "log-level", env = "RUST_LOG", default_value = "info")]
    pub level: String,
}

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct AppConfig {
    /// Input charge requests CSV file
    pub input: PathBuf,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value = "csv")]
    pub output: OutputFormat,

    #[command(flatten)]
    pub log: LogConfig,
}
