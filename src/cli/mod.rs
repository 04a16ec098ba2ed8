//! CLI module
//!
//! This module defines the command-line interface using clap and implements
//! the command execution logic.

use crate::state_machine::ProcessSummary;
use crate::{Config, Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

pub mod commands;
pub mod output;

/// Convert a brokerage tax statement into one row per sold lot
#[derive(Parser, Debug)]
#[command(name = "lot-extract")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input statement PDF (or extracted text with --text)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file; records go to standard output when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Treat the input as already extracted text ("-" reads stdin)
    #[arg(long)]
    pub text: bool,

    /// Output format (overrides config)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Write a header row before CSV records
    #[arg(long)]
    pub header: bool,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (overrides config; RUST_LOG takes precedence)
    #[arg(long, env = "LOT_EXTRACT_LOG")]
    pub log_level: Option<String>,
}

/// Output format types
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Comma separated values, one row per lot
    Csv,
    /// One JSON object per line
    Json,
    /// Plain text table
    Table,
}

impl OutputFormat {
    /// Resolve the format from the command line, falling back to config
    pub fn resolve(cli: Option<OutputFormat>, config: &Config) -> Result<Self> {
        match cli {
            Some(format) => Ok(format),
            None => OutputFormat::from_str(&config.output.format, true).map_err(|_| {
                Error::Config(format!(
                    "Unknown output format {:?} (expected csv, json or table)",
                    config.output.format
                ))
            }),
        }
    }
}

/// Execute the CLI command
pub async fn execute(args: Cli, config: Config) -> Result<ProcessSummary> {
    commands::extract::execute(args, config).await
}
