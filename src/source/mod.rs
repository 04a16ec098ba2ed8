//! Line source module - where statement text comes from
//!
//! Statement lines are produced either by running a PDF-to-text extractor on
//! a PDF, or by reading text that was extracted beforehand.

use crate::{Config, Result};
use async_trait::async_trait;
use std::path::PathBuf;

pub mod pdftotext;
pub mod text;

pub use pdftotext::PdfToTextSource;
pub use text::TextFileSource;

/// Kind of input handed to the tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    /// A PDF statement, converted with the configured extractor
    #[default]
    Pdf,
    /// Already extracted text, `-` for stdin
    Text,
}

/// Ordered source of statement lines
///
/// Implementations call `f` once per line, in reading order, and stop at the
/// first error it returns. The number of lines read is returned on success.
#[async_trait]
pub trait LineSource: Send + Sync {
    /// Short human readable description for logs
    fn describe(&self) -> String;

    async fn for_each_line(&self, f: &mut (dyn for<'a> FnMut(&'a str) -> Result<()> + Send)) -> Result<u64>;
}

/// Create a line source for the given input
pub fn create_line_source(
    kind: InputKind,
    input: impl Into<PathBuf>,
    config: &Config,
) -> Box<dyn LineSource> {
    let input = input.into();
    match kind {
        InputKind::Pdf => Box::new(
            PdfToTextSource::new(input)
                .with_command(config.extractor.command.clone())
                .with_args(config.extractor.args.clone()),
        ),
        InputKind::Text => Box::new(TextFileSource::new(input)),
    }
}
