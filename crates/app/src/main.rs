//! Pin Probe - Main Entry Point
//!
//! Runs the Pin device system checks once and exits with 0 only if every
//! check passed.

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use pin_probe_application::DeviceTestRunner;
use pin_probe_infrastructure::{ConsoleReporter, JsonResultStore, ReqwestHttpClient, SystemClock};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Diagnostics go to stderr; stdout carries the result lines.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    if cli.verbose {
        for line in cli.configuration_lines() {
            println!("{line}");
        }
        println!();
    }

    let config = cli.runner_config()?;
    tracing::debug!(?config, "Resolved configuration");

    let mut runner = DeviceTestRunner::new(
        config,
        Arc::new(ReqwestHttpClient::new()?),
        Arc::new(SystemClock::new()),
        Arc::new(ConsoleReporter::stdout()),
    );
    let summary = runner.run_all().await;

    if let Some(path) = &cli.save {
        runner.save_results(&JsonResultStore::new(), path).await?;
    }

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
