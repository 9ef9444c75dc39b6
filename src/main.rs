// src/main.rs

use anyhow::Result;
use clap::Parser;
use srccat::cli::Cli;
use srccat::config::ConfigBuilder;
use srccat::errors::Error;
use srccat::run;

fn main() -> Result<()> {
    // Initialize logging. Default to 'info' if RUST_LOG is not set.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                if cfg!(debug_assertions) {
                    "srccat=debug".parse()?
                } else {
                    "srccat=info".parse()?
                },
            ),
        )
        .init();

    log::info!("Starting srccat v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    // --- Setup ---
    let cli = Cli::parse();

    // --- Configuration & Execution ---
    let config = match ConfigBuilder::from_cli(cli).build() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    // --- Error Handling ---
    match run(&config) {
        Ok(report) => {
            log::info!(
                "Printed {} file(s), {} could not be read.",
                report.printed,
                report.failed
            );
        }
        Err(Error::NoFilesFound) => {
            eprintln!("srccat: No files found matching the specified criteria.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
