//! Command-line interface.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pin_probe_domain::config::DEFAULT_TARGET;
use pin_probe_domain::{DomainResult, RunnerConfig};

/// Pin Device System Test
#[derive(Debug, Parser)]
#[command(name = "pin-probe", version, about = "Pin Device System Test")]
pub struct Cli {
    /// Device IP address or host, optionally with scheme and port
    #[arg(long, env = "PIN_PROBE_IP", default_value = DEFAULT_TARGET)]
    pub ip: String,

    /// Request timeout in seconds
    #[arg(
        long,
        env = "PIN_PROBE_TIMEOUT",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: u64,

    /// Save results to a JSON file
    #[arg(long, value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Pause between checks in milliseconds; 0 disables it
    #[arg(long, env = "PIN_PROBE_PAUSE_MS", default_value_t = 1000)]
    pub pause_ms: u64,

    /// Print the resolved configuration before running
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Builds the runner configuration from the parsed flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the target address is not usable.
    pub fn runner_config(&self) -> DomainResult<RunnerConfig> {
        Ok(
            RunnerConfig::new(&self.ip, Duration::from_secs(self.timeout))?
                .with_check_pause(Duration::from_millis(self.pause_ms)),
        )
    }

    /// Lines printed by `--verbose`.
    pub fn configuration_lines(&self) -> Vec<String> {
        let save = self
            .save
            .as_ref()
            .map_or_else(|| "No".to_string(), |path| path.display().to_string());
        vec![
            "Configuration:".to_string(),
            format!("  Device IP: {}", self.ip),
            format!("  Timeout: {}s", self.timeout),
            format!("  Save results: {save}"),
            format!("  Check pause: {}ms", self.pause_ms),
        ]
    }
}
