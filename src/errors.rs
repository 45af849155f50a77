// Error types for lapwatch

use snafu::Snafu;
use std::{io, path::PathBuf};

#[derive(Debug, Snafu)]
pub enum LapwatchError {
    // Config management errors
    #[snafu(display("Could not find application data directory to save config file"))]
    NoConfigDir,
    #[snafu(display("Error writing config file"))]
    ConfigIOError { source: io::Error },
    #[snafu(display("Error serializing config file"))]
    ConfigSerializeError { source: serde_json::Error },
    #[snafu(display("Could not parse config file {}", path.display()))]
    ConfigParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    // User input validation errors
    #[snafu(display("Invalid tick interval: {value}ms, expected a value between 1 and 1000"))]
    InvalidTickInterval { value: u64 },

    // UI errors
    #[snafu(display("Could not start the stopwatch window: {reason}"))]
    AppStartError { reason: String },
}
