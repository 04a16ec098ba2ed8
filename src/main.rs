//! Brokerage statement lot extractor

use clap::Parser;
use lot_extract::{Config, Result, VERSION, cli, init_logging};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::Cli::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            // 2 marks a statement the parser could not follow
            if e.is_input_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

async fn run(args: cli::Cli) -> Result<()> {
    let config = if let Some(config_path) = &args.config {
        Config::from_file(config_path)?
    } else {
        Config::load()?
    };
    config.validate()?;

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    init_logging(&level);

    tracing::info!("Brokerage statement lot extractor v{}", VERSION);
    tracing::debug!("Parsed arguments: {:?}", args);
    tracing::debug!("Loaded configuration: {:?}", config);

    cli::execute(args, config).await?;
    Ok(())
}
