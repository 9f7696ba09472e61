use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use with_docker_machine::{Cli, config};

/// Env var holding the log filter, e.g. `WDM_LOG=debug`.
const LOG_ENV: &str = "WDM_LOG";

fn main() -> Result<()> {
    // Parse first so `--version` and usage errors skip everything else.
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let cfg = config::load(&cwd)?;
    let invocation = cli.into_invocation(cfg)?;

    let code = with_docker_machine::execute(&invocation)?;
    std::process::exit(code);
}
