//! Output formatting module
//!
//! Record sinks serialize each completed record as soon as it is emitted.

use crate::cli::OutputFormat;
use crate::config::OutputConfig;
use crate::parser::Record;
use crate::Result;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Destination for completed records
pub trait RecordSink: Send {
    fn write_record(&mut self, record: &Record) -> Result<()>;

    /// Flush buffered output; called once after the last record
    fn finish(&mut self) -> Result<()>;
}

/// Open the output file, or standard output when no path is given
pub fn open_output(path: Option<&Path>) -> Result<Box<dyn Write + Send>> {
    match path {
        Some(path) => {
            tracing::debug!("Writing records to {:?}", path);
            let file = File::create(path)?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

/// Create a sink for the requested format
pub fn create_sink(
    format: OutputFormat,
    writer: Box<dyn Write + Send>,
    config: &OutputConfig,
    header: bool,
) -> Box<dyn RecordSink> {
    match format {
        OutputFormat::Csv => Box::new(
            CsvSink::new(writer)
                .with_line_terminator(config.line_terminator.clone())
                .with_header(header),
        ),
        OutputFormat::Json => Box::new(JsonLinesSink::new(writer)),
        OutputFormat::Table => Box::new(TableSink::new(writer)),
    }
}

/// Eight column CSV rows, fields written exactly as captured
pub struct CsvSink<W: Write + Send> {
    writer: W,
    line_terminator: String,
    header: bool,
    header_written: bool,
}

impl<W: Write + Send> CsvSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            line_terminator: "\r\n".to_string(),
            header: false,
            header_written: false,
        }
    }

    pub fn with_line_terminator(mut self, terminator: impl Into<String>) -> Self {
        self.line_terminator = terminator.into();
        self
    }

    pub fn with_header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_row(&mut self, row: &[&str]) -> Result<()> {
        for (i, field) in row.iter().enumerate() {
            if i > 0 {
                self.writer.write_all(b",")?;
            }
            write_csv_field(&mut self.writer, field)?;
        }
        self.writer.write_all(self.line_terminator.as_bytes())?;
        Ok(())
    }

    fn ensure_header(&mut self) -> Result<()> {
        if self.header && !self.header_written {
            self.header_written = true;
            self.write_row(&Record::COLUMNS)?;
        }
        Ok(())
    }
}

/// Quote a field only when it contains a separator, quote or line break
fn write_csv_field(w: &mut impl Write, field: &str) -> io::Result<()> {
    if field.contains([',', '"', '\r', '\n']) {
        write!(w, "\"{}\"", field.replace('"', "\"\""))
    } else {
        w.write_all(field.as_bytes())
    }
}

impl<W: Write + Send> RecordSink for CsvSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        self.ensure_header()?;
        self.write_row(&record.to_row())
    }

    fn finish(&mut self) -> Result<()> {
        self.ensure_header()?;
        self.writer.flush()?;
        Ok(())
    }
}

/// One JSON object per line
pub struct JsonLinesSink<W: Write + Send> {
    writer: W,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> RecordSink for JsonLinesSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Plain text table for reading in a terminal
pub struct TableSink<W: Write + Send> {
    writer: W,
    rows: usize,
}

impl<W: Write + Send> TableSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0 }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_header(&mut self) -> Result<()> {
        writeln!(
            self.writer,
            "{:<6} {:<32} {:<9} {:>12} {:<8} {:<8} {:>14} {:>14}",
            "ID", "Name", "CUSIP", "Quantity", "Acquired", "Sold", "Proceeds", "Cost Basis"
        )?;
        writeln!(self.writer, "{:-<110}", "")?;
        Ok(())
    }
}

impl<W: Write + Send> RecordSink for TableSink<W> {
    fn write_record(&mut self, record: &Record) -> Result<()> {
        if self.rows == 0 {
            self.write_header()?;
        }
        self.rows += 1;

        writeln!(
            self.writer,
            "{:<6} {:<32} {:<9} {:>12} {:<8} {:<8} {:>14} {:>14}",
            record.id,
            record.name,
            record.cusip,
            record.quantity,
            record.acquired_date,
            record.sold_date,
            format!("${}", record.gross_proceeds),
            format!("${}", record.cost_basis)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.rows == 0 {
            self.write_header()?;
        }
        writeln!(self.writer, "{:-<110}", "")?;
        writeln!(self.writer, "{} lot(s)", self.rows)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_record() -> Record {
        Record {
            id: "00002".to_string(),
            name: "HOOLI INC".to_string(),
            cusip: "30303M102".to_string(),
            quantity: "1.0000".to_string(),
            acquired_date: "03/25/16".to_string(),
            sold_date: "04/25/16".to_string(),
            gross_proceeds: "1,166.00".to_string(),
            cost_basis: "1,882.00".to_string(),
        }
    }

    #[test]
    fn test_csv_row() {
        let mut sink = CsvSink::new(Vec::new());
        sink.write_record(&create_test_record()).unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "00002,HOOLI INC,30303M102,1.0000,03/25/16,04/25/16,\"1,166.00\",\"1,882.00\"\r\n"
        );
    }

    #[test]
    fn test_csv_quotes_embedded_quotes() {
        let mut record = create_test_record();
        record.name = "THE \"BEST\" FUND".to_string();
        record.gross_proceeds = "166.00".to_string();
        record.cost_basis = "882.00".to_string();

        let mut sink = CsvSink::new(Vec::new()).with_line_terminator("\n");
        sink.write_record(&record).unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(
            output,
            "00002,\"THE \"\"BEST\"\" FUND\",30303M102,1.0000,03/25/16,04/25/16,166.00,882.00\n"
        );
    }

    #[test]
    fn test_csv_header() {
        let mut sink = CsvSink::new(Vec::new())
            .with_line_terminator("\n")
            .with_header(true);
        sink.write_record(&create_test_record()).unwrap();
        sink.write_record(&create_test_record()).unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "id,name,cusip,quantity,acquired_date,sold_date,gross_proceeds,cost_basis"
        );
    }

    #[test]
    fn test_csv_header_without_records() {
        let mut sink = CsvSink::new(Vec::new()).with_header(true);
        sink.finish().unwrap();
        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("id,name,"));
    }

    #[test]
    fn test_json_lines() {
        let mut sink = JsonLinesSink::new(Vec::new());
        sink.write_record(&create_test_record()).unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        let parsed: Record = serde_json::from_str(output.trim_end()).unwrap();
        assert_eq!(parsed, create_test_record());
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_table() {
        let mut sink = TableSink::new(Vec::new());
        sink.write_record(&create_test_record()).unwrap();
        sink.finish().unwrap();

        let output = String::from_utf8(sink.into_inner()).unwrap();
        assert!(output.starts_with("ID"));
        assert!(output.contains("HOOLI INC"));
        assert!(output.contains("$1,882.00"));
        assert!(output.trim_end().ends_with("1 lot(s)"));
    }

    #[test]
    fn test_open_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lots.csv");
        {
            let mut writer = open_output(Some(&path)).unwrap();
            writer.write_all(b"x").unwrap();
            writer.flush().unwrap();
        }
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "x");
    }
}
