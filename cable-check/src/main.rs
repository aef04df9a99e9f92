use anyhow::Result;
use clap::Parser;

mod check_cmd;
mod cli;
mod devices_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Check(args) => check_cmd::run_check(args),
        Command::Devices(args) => devices_cmd::run_devices(args),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
