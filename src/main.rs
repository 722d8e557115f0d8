mod api;
mod backup;
mod cli;
mod config;
mod error;

#[cfg(test)]
mod tests;

use std::process::ExitCode;

use anyhow::Result;
use api::CloudflareClient;
use backup::Backup;
use clap::Parser;
use cli::Cli;
use error::BackupError;
use log::info;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    info!("cloudflare-backup");

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Printed directly so the message survives any log filter.
            let report = FailureReport::from_error(&e);
            eprintln!("{}", report.message);
            ExitCode::from(report.code)
        }
    }
}

/// What the process prints and returns when a run fails.
#[derive(Debug, PartialEq, Eq)]
struct FailureReport {
    message: String,
    code: u8,
}

impl FailureReport {
    const FATAL: u8 = 1;
    const UNEXPECTED: u8 = 2;

    /// Known fatal conditions get one line with their context; anything else
    /// gets the full error chain.
    fn from_error(e: &anyhow::Error) -> Self {
        if e.downcast_ref::<BackupError>().is_some() {
            Self {
                message: format!("{:#}", e),
                code: Self::FATAL,
            }
        } else {
            Self {
                message: format!("Error: {:?}", e),
                code: Self::UNEXPECTED,
            }
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.into_config()?;
    config.check()?;

    let client = CloudflareClient::from_config(&config)?;
    let summary = Backup::new(client, &config).run().await?;

    if !summary.is_success() {
        let names: Vec<&str> = summary.failed.iter().map(|(name, _)| name.as_str()).collect();
        return Err(anyhow::anyhow!(
            "{} of {} zones failed: {}",
            names.len(),
            names.len() + summary.exported.len(),
            names.join(", ")
        ));
    }

    info!("Done!");
    Ok(())
}
