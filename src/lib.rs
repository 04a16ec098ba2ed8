//! Brokerage statement lot extractor
//!
//! Turns the text of a brokerage tax statement into one structured record per
//! sold security lot.
//!
//! This library provides functionality for:
//! - Classifying statement lines (holding id, CUSIP, lot data, boilerplate)
//! - Reassembling the three lines of each lot with a streaming state machine
//! - Reading statement text from a PDF-to-text extractor or a text file
//! - Writing records as CSV, JSON lines or a text table

pub mod cli;
pub mod config;
pub mod error;
pub mod parser;
pub mod source;
pub mod state_machine;

pub use config::Config;
pub use error::{Error, Result};
pub use parser::Record;
pub use state_machine::{ProcessSummary, RecordProcessor};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Initialize logging with the given log level
///
/// Logs go to stderr so that records written to stdout stay clean.
pub fn init_logging(level: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Run a sequence of statement lines through a fresh processor
///
/// Stops at the first error, after any earlier records were handed to
/// `on_record`.
pub fn process_lines<I, S, F>(lines: I, on_record: F) -> Result<ProcessSummary>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(Record) -> Result<()>,
{
    let mut processor = RecordProcessor::new(on_record);
    for line in lines {
        processor.ingest(line.as_ref())?;
    }
    Ok(processor.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
        assert_eq!(NAME, "lot-extract");
    }

    #[test]
    fn test_process_lines() {
        let mut records = Vec::new();
        let summary = process_lines(
            "00002 HOOLI INC\n30303M102\n1.0000 03/25/16 04/25/16 $1,166.00 $1,882.00\n".lines(),
            |record| {
                records.push(record);
                Ok(())
            },
        )
        .unwrap();

        assert_eq!(summary.records_emitted, 1);
        assert_eq!(records[0].cost_basis, "1,882.00");
    }
}
