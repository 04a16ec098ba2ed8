//! CLI command implementations

use crate::cli::Cli;
use crate::{Config, Result};

/// Extract command implementation
pub mod extract {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::cli::output::{create_sink, open_output};
    use crate::source::{InputKind, create_line_source};
    use crate::state_machine::{ProcessSummary, RecordProcessor};

    /// Run the statement through the record processor into the chosen sink
    ///
    /// Records emitted before a failure are flushed to the output before the
    /// error is returned.
    pub async fn execute(args: Cli, config: Config) -> Result<ProcessSummary> {
        let format = OutputFormat::resolve(args.format, &config)?;
        let kind = if args.text {
            InputKind::Text
        } else {
            InputKind::Pdf
        };

        let source = create_line_source(kind, &args.input, &config);
        tracing::info!("Reading statement from {}", source.describe());

        let writer = open_output(args.output.as_deref())?;
        let mut sink = create_sink(
            format,
            writer,
            &config.output,
            args.header || config.output.header,
        );

        let mut processor = RecordProcessor::new(|record| sink.write_record(&record));
        let read = source
            .for_each_line(&mut |line| processor.ingest(line))
            .await;
        let outcome = read.map(|lines_read| (lines_read, processor.finish()));

        let flushed = sink.finish();
        let (lines_read, summary) = outcome?;
        flushed?;

        tracing::info!(
            "Processed {} lines, wrote {} records",
            lines_read,
            summary.records_emitted
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsStr;
    use std::io::Write;

    const STATEMENT: &str = "\
Proceeds from Broker and Barter Exchange Transactions
00002 HOOLI INC
30303M102
1.0000 03/25/16 04/25/16 $1,166.00 $1,882.00
Page 1 of 1
";

    fn text_input(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_extract_text_to_csv() {
        let input = text_input(STATEMENT);
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("lots.csv");

        let args = Cli::try_parse_from([
            OsStr::new("lot-extract"),
            OsStr::new("--text"),
            OsStr::new("-i"),
            input.path().as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
        ])
        .unwrap();

        let summary = extract::execute(args, Config::default()).await.unwrap();
        assert_eq!(summary.records_emitted, 1);
        assert_eq!(summary.lines_ingested, 5);
        assert!(!summary.incomplete);

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "00002,HOOLI INC,30303M102,1.0000,03/25/16,04/25/16,\"1,166.00\",\"1,882.00\"\r\n"
        );
    }

    #[tokio::test]
    async fn test_records_before_failure_are_flushed() {
        let input = text_input(&format!("{}30303M102\n", STATEMENT));
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("lots.json");

        let args = Cli::try_parse_from([
            OsStr::new("lot-extract"),
            OsStr::new("--text"),
            OsStr::new("--format"),
            OsStr::new("json"),
            OsStr::new("-i"),
            input.path().as_os_str(),
            OsStr::new("-o"),
            output.as_os_str(),
        ])
        .unwrap();

        let err = extract::execute(args, Config::default()).await.unwrap_err();
        assert!(err.is_input_error());

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.contains("\"cusip\":\"30303M102\""));
    }
}
