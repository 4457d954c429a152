#![deny(missing_docs)]

//! # Model API CLI
//!
//! Command Line Interface over the model API spec generator.
//!
//! Supported Commands:
//! - `export`: Builds the OpenAPI document for a descriptor file.
//! - `validate`: Runs the save-time validator against a descriptor file.

use clap::{Parser, Subcommand};
use modelapi_core::{AppError, AppResult};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod export;
mod input;
mod validate;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "MODELAPI_LOG";

#[derive(Parser, Debug)]
#[clap(author, version, about = "Model API -> OpenAPI toolchain")]
struct Cli {
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the OpenAPI document for a model API descriptor.
    Export(export::ExportArgs),
    /// Check a model API descriptor the way the portal does on save.
    Validate(validate::ValidateArgs),
}

fn init_logging() {
    // stdout carries rendered documents, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV)
                .unwrap_or_else(|_| EnvFilter::new("modelapi=info,modelapi_core=info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Line printed to stderr when a command fails.
fn failure_message(err: &AppError) -> String {
    format!("Error: {}", err)
}

fn run(cli: &Cli) -> AppResult<()> {
    match &cli.command {
        Commands::Export(args) => export::execute(args),
        Commands::Validate(args) => validate::execute(args),
    }
}

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_logging();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", failure_message(&err));
            ExitCode::FAILURE
        }
    }
}
