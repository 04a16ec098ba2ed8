//! PDF-to-text extractor source
//!
//! Runs an external extractor (poppler's `pdftotext` by default) as
//! `<command> <args..> <input> -` and splits its standard output into lines.

use super::LineSource;
use crate::{Error, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// Line source backed by an extractor subprocess
#[derive(Debug, Clone)]
pub struct PdfToTextSource {
    input: PathBuf,
    command: String,
    args: Vec<String>,
}

impl PdfToTextSource {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            command: "pdftotext".to_string(),
            args: vec!["-raw".to_string()],
        }
    }

    /// Set the extractor executable
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Set the arguments placed before the input path
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = args;
        self
    }

    /// Run the extractor to completion and return its standard output
    ///
    /// The whole output is collected before any line is handed on, so an
    /// extractor failure never leaves a partially processed statement behind.
    async fn extract(&self) -> Result<String> {
        tracing::debug!("Running {}", self.describe());

        let output = Command::new(&self.command)
            .args(&self.args)
            .arg(&self.input)
            .arg("-")
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| Error::extraction(&self.command, format!("failed to start: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::extraction(
                &self.command,
                format!("{} ({})", output.status, stderr.trim()),
            ));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| Error::extraction(&self.command, format!("output is not UTF-8: {}", e)))
    }
}

#[async_trait]
impl LineSource for PdfToTextSource {
    fn describe(&self) -> String {
        let mut parts = vec![self.command.clone()];
        parts.extend(self.args.iter().cloned());
        parts.push(format!("{:?}", self.input));
        parts.push("-".to_string());
        parts.join(" ")
    }

    async fn for_each_line(&self, f: &mut (dyn for<'a> FnMut(&'a str) -> Result<()> + Send)) -> Result<u64> {
        let text = self.extract().await?;

        let mut count = 0;
        for line in text.lines() {
            count += 1;
            f(line)?;
        }

        tracing::debug!("Extractor produced {} lines", count);
        Ok(count)
    }
}
